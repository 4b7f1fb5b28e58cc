//! Domain types lifted out of Yahoo payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One team in a league's team list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub team_key: String,
    pub name: String,
    /// True for the team owned by the logged-in account.
    pub is_mine: bool,
}

/// Whether a roster slot holds a batter or a pitcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionType {
    #[serde(rename = "B")]
    Batter,
    #[serde(rename = "P")]
    Pitcher,
}

impl PositionType {
    /// Decode Yahoo's single-letter position_type code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "B" => Some(Self::Batter),
            "P" => Some(Self::Pitcher),
            _ => None,
        }
    }
}

/// One player on a weekly roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterPlayer {
    pub player_id: u64,
    pub name: String,
    /// Editorial club abbreviation, e.g. "NYY".
    pub team: String,
    pub position_type: PositionType,
    /// Slot the manager filed the player under, e.g. "SS" or "BN".
    pub selected_position: String,
    /// Injury or roster designation such as "DTD" or "IL10", when set.
    #[serde(default)]
    pub status: Option<String>,
}

/// Inclusive calendar range covered by one fantasy week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDates {
    pub start: NaiveDate,
    pub end: NaiveDate,
}
