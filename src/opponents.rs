//! Opponent selection for the comparison report.

use crate::error::{FlbError, Result};
use crate::yahoo::types::TeamInfo;

/// Which opposing teams the report compares against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpponentMode {
    /// Every other team in the league.
    All,
    /// The team with this exact display name.
    Named(String),
    /// The team scheduled against the caller next week.
    NextMatchup,
}

impl OpponentMode {
    /// Mode from the `-a` / `-o` flags; neither flag means next matchup.
    pub fn from_flags(all: bool, opponent: Option<String>) -> Self {
        if all {
            OpponentMode::All
        } else if let Some(name) = opponent {
            OpponentMode::Named(name)
        } else {
            OpponentMode::NextMatchup
        }
    }
}

/// Every league team except the caller's, in league order.
pub fn all_opponents(teams: &[TeamInfo], my_team_key: &str) -> Vec<TeamInfo> {
    teams
        .iter()
        .filter(|team| team.team_key != my_team_key)
        .cloned()
        .collect()
}

/// The first team whose display name matches `name` exactly.
///
/// The caller asked for this team by name, so no match is an error rather
/// than an empty comparison.
pub fn named_opponent(teams: &[TeamInfo], name: &str) -> Result<TeamInfo> {
    teams
        .iter()
        .find(|team| team.name == name)
        .cloned()
        .ok_or_else(|| FlbError::OpponentNotFound {
            name: name.to_string(),
        })
}

/// The team whose key matches a matchup lookup result.
///
/// A matchup that names a key outside the league team list is surfaced,
/// not skipped.
pub fn opponent_by_key(teams: &[TeamInfo], team_key: &str) -> Result<TeamInfo> {
    teams
        .iter()
        .find(|team| team.team_key == team_key)
        .cloned()
        .ok_or_else(|| FlbError::MissingTeam {
            team_key: team_key.to_string(),
        })
}
