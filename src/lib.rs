//! Propboard library
//!
//! A small web application for tracking sports prop-bet picks: it resolves
//! an athlete's current team and upcoming opponent through ESPN's public
//! site API, records picks to a flat JSON file, and exports them as a CSV.
//!
//! ## Features
//!
//! - **Player Resolution**: free-text name search with diacritic-insensitive
//!   disambiguation and NFL→NBA fallback
//! - **Next-Game Lookup**: schedule scan for the upcoming opponent, with a
//!   late-night rollover so tonight's started game isn't offered as "next"
//! - **Entry Store**: flat-file pick records with dense, contiguous ids
//! - **CSV Export**: spreadsheet-ready dump in a fixed column order
//! - **Reference Data**: franchise tables and per-role stat categories
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use propboard::{api, espn::SiteApiClient, EntryStore, PlayerResolver};
//!
//! # fn example() -> propboard::Result<()> {
//! let state = api::AppState {
//!     store: Arc::new(EntryStore::new("entries.json")),
//!     resolver: Arc::new(PlayerResolver::new(SiteApiClient::new()?)),
//! };
//! let app = api::router(state);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod espn;
pub mod reference;
pub mod resolver;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use resolver::{LeagueHint, LookupResult, PlayerResolver};
pub use store::{Entry, EntryStore};
