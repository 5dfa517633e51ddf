//! Entry point: parse configuration, wire up the state, serve the API.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use propboard::{api, espn::SiteApiClient, Config, EntryStore, PlayerResolver};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    let state = api::AppState {
        store: Arc::new(EntryStore::new(config.entries_path())),
        resolver: Arc::new(PlayerResolver::new(SiteApiClient::new()?)),
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, entries = %config.entries_path().display(), "listening");

    axum::serve(listener, api::router(state)).await?;
    Ok(())
}
