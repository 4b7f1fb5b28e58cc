//! Roster snapshots used as prediction input.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::yahoo::types::RosterPlayer;
use crate::yahoo::League;

/// One team's roster, captured for prediction and cacheable as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    pub team_key: String,
    pub players: Vec<RosterPlayer>,
}

impl Container {
    pub fn new(team_key: impl Into<String>, players: Vec<RosterPlayer>) -> Self {
        Self {
            team_key: team_key.into(),
            players,
        }
    }

    /// Capture the live roster of one league team.
    pub async fn fetch(league: &League, team_key: &str) -> Result<Self> {
        let players = league.team(team_key).roster(None).await?;
        Ok(Self::new(team_key, players))
    }
}
