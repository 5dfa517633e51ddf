//! Player lookup endpoint.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::AppState;
use crate::resolver::{LeagueHint, LookupResult};

#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub league: String,
}

pub async fn lookup_player(
    State(state): State<AppState>,
    Json(request): Json<LookupRequest>,
) -> Json<LookupResult> {
    let name = request.player_name.trim();
    if name.is_empty() {
        return Json(LookupResult::Error {
            error: "No player name provided".to_string(),
        });
    }

    let hint = LeagueHint::parse(&request.league);
    Json(state.resolver.resolve(name, hint).await)
}
