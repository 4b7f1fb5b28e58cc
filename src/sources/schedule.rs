//! Regular-season game dates per club, from the MLB Stats API.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FlbError, Result};

use super::{club_code_candidates, fetch_json, STATSAPI_BASE_URL};

/// Game dates for every club in one season, keyed by club abbreviation.
///
/// Double-headers contribute two entries for the same date, so a range
/// count is a game count, not a day count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSchedule {
    pub season: u16,
    games: BTreeMap<String, Vec<NaiveDate>>,
}

impl TeamSchedule {
    pub fn new(season: u16, games: BTreeMap<String, Vec<NaiveDate>>) -> Self {
        let games = games
            .into_iter()
            .map(|(club, dates)| (club.to_uppercase(), dates))
            .collect();
        Self { season, games }
    }

    /// Download the season schedule and index it by club.
    pub async fn fetch(client: &Client, season: u16) -> Result<Self> {
        let clubs = club_directory(client, season).await?;

        let url = format!("{}/schedule", STATSAPI_BASE_URL);
        let query = [
            ("sportId", "1".to_string()),
            ("season", season.to_string()),
            ("gameType", "R".to_string()),
        ];
        let doc = fetch_json(client, &url, &query).await?;
        let dates = doc
            .get("dates")
            .and_then(Value::as_array)
            .ok_or_else(|| FlbError::payload("schedule feed missing dates"))?;

        let mut games: BTreeMap<String, Vec<NaiveDate>> = BTreeMap::new();
        for block in dates {
            let Some(day) = block
                .get("date")
                .and_then(Value::as_str)
                .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
            else {
                continue;
            };
            let Some(block_games) = block.get("games").and_then(Value::as_array) else {
                continue;
            };
            for game in block_games {
                for side in ["home", "away"] {
                    let club = game
                        .get("teams")
                        .and_then(|teams| teams.get(side))
                        .and_then(|side| side.get("team"))
                        .and_then(|team| team.get("id"))
                        .and_then(Value::as_u64)
                        .and_then(|id| clubs.get(&id));
                    if let Some(club) = club {
                        games.entry(club.clone()).or_default().push(day);
                    }
                }
            }
        }
        Ok(Self::new(season, games))
    }

    /// Number of games a club plays between two dates, inclusive.
    pub fn games_in_range(&self, club: &str, start: NaiveDate, end: NaiveDate) -> u32 {
        for code in club_code_candidates(club) {
            if let Some(dates) = self.games.get(&code) {
                return dates.iter().filter(|day| **day >= start && **day <= end).count() as u32;
            }
        }
        0
    }

    pub fn club_count(&self) -> usize {
        self.games.len()
    }
}

async fn club_directory(client: &Client, season: u16) -> Result<BTreeMap<u64, String>> {
    let url = format!("{}/teams", STATSAPI_BASE_URL);
    let query = [
        ("sportId", "1".to_string()),
        ("season", season.to_string()),
    ];
    let doc = fetch_json(client, &url, &query).await?;
    let teams = doc
        .get("teams")
        .and_then(Value::as_array)
        .ok_or_else(|| FlbError::payload("team feed missing teams"))?;
    Ok(teams
        .iter()
        .filter_map(|team| {
            let id = team.get("id")?.as_u64()?;
            let abbreviation = team.get("abbreviation")?.as_str()?.to_uppercase();
            Some((id, abbreviation))
        })
        .collect())
}
