//! Club directory and season summary rows, from the MLB Stats API.

use std::collections::BTreeMap;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FlbError, Result};

use super::{club_code_candidates, fetch_json, STATSAPI_BASE_URL};

/// One club's directory row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummaryRow {
    pub id: u64,
    pub name: String,
    pub abbreviation: String,
    #[serde(default)]
    pub league: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
}

/// The thirty-club directory for one season, keyed by abbreviation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSummaries {
    pub season: u16,
    teams: BTreeMap<String, TeamSummaryRow>,
}

impl TeamSummaries {
    pub fn new(season: u16, rows: Vec<TeamSummaryRow>) -> Self {
        Self {
            season,
            teams: rows
                .into_iter()
                .map(|row| (row.abbreviation.to_uppercase(), row))
                .collect(),
        }
    }

    /// Download the club directory for one season.
    pub async fn fetch(client: &Client, season: u16) -> Result<Self> {
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
        Ok(Self::new(
            season,
            teams.iter().filter_map(parse_row).collect(),
        ))
    }

    /// Directory row for a club code as any feed spells it.
    pub fn resolve(&self, code: &str) -> Option<&TeamSummaryRow> {
        club_code_candidates(code)
            .into_iter()
            .find_map(|candidate| self.teams.get(&candidate))
    }

    pub fn club_count(&self) -> usize {
        self.teams.len()
    }
}

fn parse_row(team: &Value) -> Option<TeamSummaryRow> {
    Some(TeamSummaryRow {
        id: team.get("id")?.as_u64()?,
        name: team.get("name")?.as_str()?.to_string(),
        abbreviation: team.get("abbreviation")?.as_str()?.to_uppercase(),
        league: team
            .get("league")
            .and_then(|league| league.get("name"))
            .and_then(Value::as_str)
            .map(str::to_string),
        division: team
            .get("division")
            .and_then(|division| division.get("name"))
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}
