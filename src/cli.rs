//! CLI argument definitions and the season/week wrapper types.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::Datelike;
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::error::{FlbError, Result};

/// Type-safe wrapper for season years (e.g. 2019).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(chrono::Utc::now().year() as u16)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = FlbError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for league week numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The week after this one.
    pub fn next(&self) -> Week {
        Week(self.0 + 1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = FlbError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Full-report CLI: predict your roster for next week and compare it against
/// one or more opponents.
#[derive(Debug, Parser)]
#[clap(
    name = "flb-report",
    about = "Predict next week's stats and compare against league opponents"
)]
pub struct ReportArgs {
    /// Path to the JSON file holding the OAuth bearer token.
    pub credentials: PathBuf,

    /// Predict against every other team in the league.
    #[clap(short = 'a', long = "all", conflicts_with = "opponent")]
    pub all: bool,

    /// Predict against the team with this display name.
    #[clap(short = 'o', long = "opponent", value_name = "TEAM")]
    pub opponent: Option<String>,

    /// Read the builder, rosters and data sources from cache files in the
    /// working directory when present.
    #[clap(short = 'c', long = "cached")]
    pub cached: bool,

    /// Save the builder, rosters and data sources to cache files in the
    /// working directory.
    #[clap(short = 's', long = "save")]
    pub save: bool,

    /// Season year.
    #[clap(long, default_value_t = Season::default())]
    pub season: Season,

    /// League key (or set `YAHOO_FLB_LEAGUE_KEY`); defaults to the first
    /// league of the season.
    #[clap(long, value_name = "LEAGUE_KEY")]
    pub league: Option<String>,
}

/// Single-roster CLI: predict hitting stats for your roster in one week.
#[derive(Debug, Parser)]
#[clap(
    name = "flb-roster",
    about = "Predict hitting stats for one week's roster"
)]
pub struct RosterArgs {
    /// Path to the JSON file holding the OAuth bearer token.
    pub credentials: PathBuf,

    /// Week number whose roster to fetch.
    pub week: Week,

    /// Season year.
    #[clap(long, default_value_t = Season::default())]
    pub season: Season,

    /// League key (or set `YAHOO_FLB_LEAGUE_KEY`); defaults to the first
    /// league of the season.
    #[clap(long, value_name = "LEAGUE_KEY")]
    pub league: Option<String>,
}
