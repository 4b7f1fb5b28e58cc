//! On-disk cache for prediction inputs.
//!
//! Every cache file is a JSON envelope carrying a schema number and a save
//! timestamp around the payload. Loads that hit a missing file, a stale
//! schema, or an undecodable payload report `Ok(None)` so callers fall back
//! to a fresh build; only real I/O failures surface as errors.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;

/// Bumped whenever the payload layout of any cache file changes.
pub const CACHE_SCHEMA: u32 = 1;

/// Prediction builder state (projections joined with schedule data).
pub fn builder_path(dir: &Path) -> PathBuf {
    dir.join("Builder.json")
}

/// Roster container for one team.
pub fn container_path(dir: &Path, team_key: &str) -> PathBuf {
    dir.join(format!("Container.{}.json", team_key))
}

/// Rest-of-season projection lines.
pub fn projections_path(dir: &Path) -> PathBuf {
    dir.join("fangraphs.predictions.json")
}

/// Per-club game dates for the season.
pub fn team_schedule_path(dir: &Path) -> PathBuf {
    dir.join("bref.teams.json")
}

/// Season-to-date team aggregates.
pub fn team_summary_path(dir: &Path) -> PathBuf {
    dir.join("bref.teamsummary.json")
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    schema: u32,
    saved_at: DateTime<Utc>,
    payload: T,
}

/// Load a cached value, or `None` when a fresh build is needed.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let envelope: Envelope<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unreadable cache file, rebuilding");
            return Ok(None);
        }
    };
    if envelope.schema != CACHE_SCHEMA {
        warn!(
            path = %path.display(),
            found = envelope.schema,
            expected = CACHE_SCHEMA,
            "cache schema mismatch, rebuilding"
        );
        return Ok(None);
    }

    match serde_json::from_value(envelope.payload) {
        Ok(payload) => Ok(Some(payload)),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "undecodable cache payload, rebuilding");
            Ok(None)
        }
    }
}

/// Cache load gated on the `-c` flag; without it every run builds fresh.
pub fn load_if<T: DeserializeOwned>(cached: bool, path: &Path) -> Result<Option<T>> {
    if cached {
        load(path)
    } else {
        Ok(None)
    }
}

/// Write a value to the cache, replacing any previous contents.
pub fn save<T: Serialize>(path: &Path, payload: &T) -> Result<()> {
    let envelope = Envelope {
        schema: CACHE_SCHEMA,
        saved_at: Utc::now(),
        payload,
    };
    let raw = serde_json::to_string_pretty(&envelope)?;
    fs::write(path, raw)?;
    Ok(())
}
