//! ESPN site-API access.
//!
//! The provider's payloads are unversioned and shift shape without notice,
//! so responses stay loosely typed (`serde_json::Value`) and every field
//! read goes through the accessors in [`fields`].

pub mod fields;
pub mod http;

pub use http::SiteApiClient;
