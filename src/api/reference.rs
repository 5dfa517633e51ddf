//! Static reference-data endpoints.

use std::collections::BTreeMap;

use axum::Json;

use crate::reference;

/// Stat categories offered per role, in form display order.
pub async fn categories() -> Json<BTreeMap<&'static str, &'static [&'static str]>> {
    Json(reference::stat_categories())
}

/// Sorted union of every franchise name across the supported leagues.
pub async fn teams() -> Json<Vec<&'static str>> {
    Json(reference::all_team_names())
}
