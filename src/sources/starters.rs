//! Probable starting pitchers for one week's dates, from the MLB Stats API.
//!
//! Unlike the other sources this one is scoped to a single date range and
//! is rebuilt every run; it is only written to disk as part of a builder.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FlbError, Result};

use super::{fetch_json, normalize_name, STATSAPI_BASE_URL};

/// Scheduled starts per pitcher inside one date range, keyed by
/// normalized pitcher name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbableStarters {
    pub start: NaiveDate,
    pub end: NaiveDate,
    starts: BTreeMap<String, u32>,
}

impl ProbableStarters {
    pub fn new(start: NaiveDate, end: NaiveDate, starts: BTreeMap<String, u32>) -> Self {
        let starts = starts
            .into_iter()
            .map(|(name, count)| (normalize_name(&name), count))
            .collect();
        Self { start, end, starts }
    }

    /// Download the probable-pitcher hydrated schedule for the range.
    pub async fn fetch(client: &Client, start: NaiveDate, end: NaiveDate) -> Result<Self> {
        let url = format!("{}/schedule", STATSAPI_BASE_URL);
        let query = [
            ("sportId", "1".to_string()),
            ("startDate", start.format("%Y-%m-%d").to_string()),
            ("endDate", end.format("%Y-%m-%d").to_string()),
            ("hydrate", "probablePitcher".to_string()),
        ];
        let doc = fetch_json(client, &url, &query).await?;
        let dates = doc
            .get("dates")
            .and_then(Value::as_array)
            .ok_or_else(|| FlbError::payload("schedule feed missing dates"))?;

        let mut starts: BTreeMap<String, u32> = BTreeMap::new();
        for block in dates {
            let Some(games) = block.get("games").and_then(Value::as_array) else {
                continue;
            };
            for game in games {
                for side in ["home", "away"] {
                    let pitcher = game
                        .get("teams")
                        .and_then(|teams| teams.get(side))
                        .and_then(|side| side.get("probablePitcher"))
                        .and_then(|pitcher| pitcher.get("fullName"))
                        .and_then(Value::as_str);
                    if let Some(name) = pitcher {
                        *starts.entry(normalize_name(name)).or_insert(0) += 1;
                    }
                }
            }
        }
        Ok(Self { start, end, starts })
    }

    /// Starts scheduled for a pitcher inside the range.
    pub fn scheduled_starts(&self, name: &str) -> u32 {
        self.starts.get(&normalize_name(name)).copied().unwrap_or(0)
    }

    pub fn pitcher_count(&self) -> usize {
        self.starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_scheduled_starts_is_name_normalized() {
        let mut starts = BTreeMap::new();
        starts.insert("Gerrit Cole".to_string(), 2);
        starts.insert("J.P. France".to_string(), 1);
        let table = ProbableStarters::new(day(2026, 6, 29), day(2026, 7, 5), starts);

        assert_eq!(table.scheduled_starts("GERRIT COLE"), 2);
        assert_eq!(table.scheduled_starts("JP France"), 1);
        assert_eq!(table.scheduled_starts("Nobody Listed"), 0);
        assert_eq!(table.pitcher_count(), 2);
    }

    #[test]
    fn test_starters_round_trip_through_json() {
        let mut starts = BTreeMap::new();
        starts.insert("Gerrit Cole".to_string(), 2);
        let table = ProbableStarters::new(day(2026, 6, 29), day(2026, 7, 5), starts);

        let raw = serde_json::to_string(&table).unwrap();
        let restored: ProbableStarters = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored.start, day(2026, 6, 29));
        assert_eq!(restored.scheduled_starts("Gerrit Cole"), 2);
    }
}
