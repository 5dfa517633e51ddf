//! HTTP facade: thin axum handlers over the store and resolver.
//!
//! Lookup and export failures are reported inside a 200 payload that
//! encodes success or failure itself; the transport never carries them.

pub mod entries;
pub mod export;
pub mod lookup;
pub mod reference;

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::resolver::PlayerResolver;
use crate::store::EntryStore;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EntryStore>,
    pub resolver: Arc<PlayerResolver>,
}

/// All routes, under `/api`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/lookup-player", post(lookup::lookup_player))
        .route(
            "/api/entries",
            get(entries::list_entries).post(entries::upsert_entry),
        )
        .route("/api/entries/:id", delete(entries::delete_entry))
        .route("/api/export-csv", get(export::export_csv))
        .route("/api/categories", get(reference::categories))
        .route("/api/teams", get(reference::teams))
        .with_state(state)
}
