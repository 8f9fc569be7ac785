//! Fantasy Football Playoffs Library
//!
//! Scores fantasy playoff rosters kept in a Google Sheets spreadsheet against
//! weekly stats from the Sleeper API, writes one sheet per playoff round, and
//! keeps a "Running Totals" sheet recomputed from every round sheet.
//!
//! ## Features
//!
//! - **Player Directory**: Case-insensitive name to Sleeper ID lookup, limited to eligible positions
//! - **Score Resolution**: Ordered fallback over `pts_ppr`, `fantasy_points_ppr`, `fantasy_points`
//! - **Round Scoring**: Roster grid in, scores grid with a TOTAL row out; bad cells score 0 with a warning
//! - **Running Totals**: Full recomputation across round sheets, owners matched by name
//! - **Player Cache**: The Sleeper player listing is cached on disk for a day
//!
//! ## Quick Start
//!
//! ```rust
//! use ffl_playoffs::core::col_to_label;
//! use ffl_playoffs::sheets::range::grid_range;
//!
//! assert_eq!(col_to_label(0), "A");
//! assert_eq!(col_to_label(26), "AA");
//! assert_eq!(grid_range("Running Totals", 3, 4), "'Running Totals'!A1:C4");
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FFL_PLAYOFFS_SPREADSHEET_ID=1AbC...
//! export GOOGLE_SHEETS_TOKEN=$(gcloud auth print-access-token)
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod scoring;
pub mod sheets;
pub mod sleeper;

// Re-export commonly used types
pub use cli::types::{PlayerId, PlayoffRound, Position, Season, SeasonType, SpreadsheetId, Week};
pub use error::{PlayoffsError, Result};

pub const SPREADSHEET_ID_ENV_VAR: &str = "FFL_PLAYOFFS_SPREADSHEET_ID";
pub const ACCESS_TOKEN_ENV_VAR: &str = "GOOGLE_SHEETS_TOKEN";
