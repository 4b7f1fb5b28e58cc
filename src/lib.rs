//! Yahoo Fantasy Baseball assistant library
//!
//! Predicts weekly stat lines for Yahoo fantasy baseball rosters from
//! rest-of-season projections and compares teams category by category.
//!
//! ## Features
//!
//! - **Roster Retrieval**: Fetch leagues, teams, rosters, and matchups from
//!   the Yahoo Fantasy Sports API with an OAuth bearer token
//! - **Weekly Predictions**: Scale rest-of-season projection lines by each
//!   club's scheduled games and each starter's probable starts
//! - **Head-to-Head Comparison**: Twelve-category weekly summaries and a
//!   win-loss tally against any opponent
//! - **Run Caching**: Versioned JSON snapshots of the prediction builder,
//!   rosters, and data sources for offline re-runs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yahoo_flb::commands::report::{handle_report, ReportParams};
//! use yahoo_flb::opponents::OpponentMode;
//! use yahoo_flb::Season;
//!
//! # async fn example() -> yahoo_flb::Result<()> {
//! // Compare your roster against next week's opponent, reusing caches.
//! let report = handle_report(ReportParams {
//!     credentials: "oauth2.json".into(),
//!     mode: OpponentMode::NextMatchup,
//!     cached: true,
//!     save: false,
//!     season: Season::default(),
//!     league: None,
//! })
//! .await?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Pin the league to skip discovery of the season's first league:
//! ```bash
//! export YAHOO_FLB_LEAGUE_KEY=403.l.41177
//! ```

pub mod auth;
pub mod cache;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod opponents;
pub mod predict;
pub mod report;
pub mod roster;
pub mod score;
pub mod sources;
pub mod yahoo;

// Re-export commonly used types
pub use cli::{Season, Week};
pub use error::{FlbError, Result};

/// Yahoo game code for fantasy baseball.
pub const GAME_CODE: &str = "mlb";

pub const LEAGUE_KEY_ENV_VAR: &str = "YAHOO_FLB_LEAGUE_KEY";
