//! Public data feeds behind the prediction builder.
//!
//! Three sources are independently cacheable and shared across a run
//! (projections, season schedule, team summaries); the probable-starters
//! table is scoped to one week's dates and rebuilt every run.

pub mod projections;
pub mod schedule;
pub mod starters;
pub mod summary;

pub use projections::DepthChartProjections;
pub use schedule::TeamSchedule;
pub use starters::ProbableStarters;
pub use summary::TeamSummaries;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

pub const STATSAPI_BASE_URL: &str = "https://statsapi.mlb.com/api/v1";

pub(crate) async fn fetch_json(
    client: &Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<Value> {
    debug!(%url, "feed request");
    let doc = client
        .get(url)
        .query(query)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;
    Ok(doc)
}

/// Canonical lookup key for a player name.
///
/// The feeds and Yahoo disagree on case and initials punctuation ("J.D."
/// vs "JD"), so keys are lowercased with periods stripped and whitespace
/// runs collapsed.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .replace('.', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

// Clubs whose abbreviation differs across Yahoo, FanGraphs, and the Stats
// API. Codes not listed here are spelled the same everywhere.
const CLUB_ALIASES: &[&[&str]] = &[
    &["ARI", "AZ"],
    &["ATH", "OAK"],
    &["CWS", "CHW"],
    &["KC", "KCR"],
    &["SD", "SDP"],
    &["SF", "SFG"],
    &["TB", "TBR"],
    &["WSH", "WAS", "WSN"],
];

/// Every code a club may appear under across the feeds, query code first.
pub fn club_code_candidates(code: &str) -> Vec<String> {
    let upper = code.to_uppercase();
    let mut candidates = vec![upper.clone()];
    for group in CLUB_ALIASES {
        if group.contains(&upper.as_str()) {
            candidates.extend(
                group
                    .iter()
                    .filter(|alias| **alias != upper)
                    .map(|alias| alias.to_string()),
            );
        }
    }
    candidates
}
