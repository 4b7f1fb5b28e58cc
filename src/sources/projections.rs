//! Rest-of-season projection lines from the FanGraphs projections API.

use std::collections::BTreeMap;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{FlbError, Result};

use super::{fetch_json, normalize_name};

const PROJECTIONS_URL: &str = "https://www.fangraphs.com/api/projections";

/// FanGraphs type code for the Depth Charts rest-of-season system.
pub const PROJECTION_SYSTEM: &str = "rfangraphsdc";

/// One batter's rest-of-season projection. Field names follow the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatterLine {
    #[serde(rename = "PlayerName")]
    pub name: String,
    #[serde(rename = "Team", default)]
    pub team: Option<String>,
    #[serde(rename = "G", default)]
    pub g: f64,
    #[serde(rename = "AB", default)]
    pub ab: f64,
    #[serde(rename = "R", default)]
    pub r: f64,
    #[serde(rename = "2B", default)]
    pub doubles: f64,
    #[serde(rename = "3B", default)]
    pub triples: f64,
    #[serde(rename = "HR", default)]
    pub hr: f64,
    #[serde(rename = "RBI", default)]
    pub rbi: f64,
    #[serde(rename = "BB", default)]
    pub bb: f64,
    #[serde(rename = "SO", default)]
    pub so: f64,
    #[serde(rename = "SB", default)]
    pub sb: f64,
    #[serde(rename = "AVG", default)]
    pub avg: f64,
    #[serde(rename = "OBP", default)]
    pub obp: f64,
}

/// One pitcher's rest-of-season projection. Field names follow the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitcherLine {
    #[serde(rename = "PlayerName")]
    pub name: String,
    #[serde(rename = "Team", default)]
    pub team: Option<String>,
    #[serde(rename = "G", default)]
    pub g: f64,
    #[serde(rename = "GS", default)]
    pub gs: f64,
    #[serde(rename = "IP", default)]
    pub ip: f64,
    #[serde(rename = "W", default)]
    pub w: f64,
    #[serde(rename = "SO", default)]
    pub so: f64,
    #[serde(rename = "SV", default)]
    pub sv: f64,
    #[serde(rename = "HLD", default)]
    pub hld: f64,
    #[serde(rename = "ERA", default)]
    pub era: f64,
    #[serde(rename = "WHIP", default)]
    pub whip: f64,
}

/// Depth-chart rest-of-season projections, keyed by normalized player name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepthChartProjections {
    pub system: String,
    batters: BTreeMap<String, BatterLine>,
    pitchers: BTreeMap<String, PitcherLine>,
}

impl DepthChartProjections {
    pub fn new(batters: Vec<BatterLine>, pitchers: Vec<PitcherLine>) -> Self {
        Self {
            system: PROJECTION_SYSTEM.to_string(),
            batters: batters
                .into_iter()
                .map(|line| (normalize_name(&line.name), line))
                .collect(),
            pitchers: pitchers
                .into_iter()
                .map(|line| (normalize_name(&line.name), line))
                .collect(),
        }
    }

    /// Download both projection tables.
    pub async fn fetch(client: &Client) -> Result<Self> {
        let batters = fetch_lines(client, "bat").await?;
        let pitchers = fetch_lines(client, "pit").await?;
        Ok(Self::new(batters, pitchers))
    }

    pub fn batter(&self, name: &str) -> Option<&BatterLine> {
        self.batters.get(&normalize_name(name))
    }

    pub fn pitcher(&self, name: &str) -> Option<&PitcherLine> {
        self.pitchers.get(&normalize_name(name))
    }

    pub fn batter_count(&self) -> usize {
        self.batters.len()
    }

    pub fn pitcher_count(&self) -> usize {
        self.pitchers.len()
    }
}

async fn fetch_lines<T: DeserializeOwned>(client: &Client, stats: &str) -> Result<Vec<T>> {
    let query = [
        ("type", PROJECTION_SYSTEM.to_string()),
        ("stats", stats.to_string()),
        ("pos", "all".to_string()),
        ("team", "0".to_string()),
        ("players", "0".to_string()),
        ("lg", "all".to_string()),
    ];
    let doc = fetch_json(client, PROJECTIONS_URL, &query).await?;
    let rows = doc
        .as_array()
        .ok_or_else(|| FlbError::payload("projection feed was not a list"))?;
    // Rows missing a name are not projectable; skip them rather than fail
    // the whole download.
    Ok(rows
        .iter()
        .filter_map(|row| serde_json::from_value(row.clone()).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn trout_line() -> BatterLine {
        BatterLine {
            name: "Mike Trout".to_string(),
            team: Some("LAA".to_string()),
            g: 81.0,
            ab: 300.0,
            r: 60.0,
            doubles: 15.0,
            triples: 2.0,
            hr: 25.0,
            rbi: 55.0,
            bb: 50.0,
            so: 70.0,
            sb: 8.0,
            avg: 0.295,
            obp: 0.430,
        }
    }

    #[test]
    fn test_batter_line_decodes_feed_row() {
        let row = json!({
            "PlayerName": "Mike Trout",
            "Team": "LAA",
            "G": 81.0, "AB": 300.0, "R": 60.0, "2B": 15.0, "3B": 2.0,
            "HR": 25.0, "RBI": 55.0, "BB": 50.0, "SO": 70.0, "SB": 8.0,
            "AVG": 0.295, "OBP": 0.430,
            "wOBA": 0.410
        });
        let line: BatterLine = serde_json::from_value(row).unwrap();
        assert_eq!(line, trout_line());
    }

    #[test]
    fn test_pitcher_line_missing_fields_default_to_zero() {
        let row = json!({"PlayerName": "Josh Hader", "Team": "MIL", "G": 30.0, "SV": 18.0});
        let line: PitcherLine = serde_json::from_value(row).unwrap();
        assert_eq!(line.gs, 0.0);
        assert_eq!(line.sv, 18.0);
        assert_eq!(line.era, 0.0);
    }

    #[test]
    fn test_lookup_is_name_normalized() {
        let projections = DepthChartProjections::new(vec![trout_line()], vec![]);
        assert!(projections.batter("MIKE TROUT").is_some());
        assert!(projections.batter("Mike Trout").is_some());
        assert!(projections.batter("Nobody Special").is_none());
        assert!(projections.pitcher("Mike Trout").is_none());
        assert_eq!(projections.system, PROJECTION_SYSTEM);
    }

    #[test]
    fn test_projections_round_trip_through_json() {
        let projections = DepthChartProjections::new(vec![trout_line()], vec![]);
        let raw = serde_json::to_string(&projections).unwrap();
        let restored: DepthChartProjections = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored.batter("Mike Trout"), Some(&trout_line()));
        assert_eq!(restored.batter_count(), 1);
        assert_eq!(restored.pitcher_count(), 0);
    }
}
