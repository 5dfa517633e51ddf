//! Entries CRUD endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use super::AppState;
use crate::error::Result;
use crate::store::Entry;

/// Mutation outcome: the refreshed list on success, the failure message
/// otherwise. Always carried in a 200 response.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MutationResponse {
    Updated { success: bool, entries: Vec<Entry> },
    Failed { error: String },
}

fn mutation_response(result: Result<Vec<Entry>>) -> Json<MutationResponse> {
    match result {
        Ok(entries) => Json(MutationResponse::Updated {
            success: true,
            entries,
        }),
        Err(err) => Json(MutationResponse::Failed {
            error: err.to_string(),
        }),
    }
}

pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<Entry>> {
    Json(state.store.list())
}

pub async fn upsert_entry(
    State(state): State<AppState>,
    Json(entry): Json<Entry>,
) -> Json<MutationResponse> {
    mutation_response(state.store.upsert(entry))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<usize>,
) -> Json<MutationResponse> {
    mutation_response(state.store.delete(id))
}
