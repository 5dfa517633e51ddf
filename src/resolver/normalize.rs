//! Name normalization for diacritic- and case-insensitive comparison.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Decompose accented characters, drop the combining marks, and lowercase.
/// Idempotent, so normalized and raw strings compare safely.
pub fn normalize_name(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
