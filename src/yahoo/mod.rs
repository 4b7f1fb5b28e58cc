//! Minimal client for the Yahoo Fantasy Sports v2 API.
//!
//! Only the handful of endpoints the prediction flow needs are covered:
//! league discovery for the logged-in account, the league team list and
//! week metadata, team rosters, and head-to-head matchups. Payload mining
//! is split into plain functions over [`serde_json::Value`] so it can be
//! tested against canned responses.

pub mod json;
pub mod types;

use chrono::NaiveDate;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::cli::{Season, Week};
use crate::error::{FlbError, Result};

use self::json::{find_key, numbered_entities, string_at, u64_at};
use self::types::{PositionType, RosterPlayer, TeamInfo, WeekDates};

pub const BASE_URL: &str = "https://fantasysports.yahooapis.com/fantasy/v2";

async fn get_json(client: &Client, url: &str) -> Result<Value> {
    debug!(%url, "yahoo request");
    let doc = client
        .get(url)
        .query(&[("format", "json")])
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;
    Ok(doc)
}

/// Entry point scoped to one fantasy game code ("mlb").
#[derive(Debug, Clone)]
pub struct Game {
    client: Client,
    code: &'static str,
}

impl Game {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            code: crate::GAME_CODE,
        }
    }

    /// League keys the logged-in account belongs to for one season.
    pub async fn league_ids(&self, season: Season) -> Result<Vec<String>> {
        let url = format!(
            "{}/users;use_login=1/games;game_codes={};seasons={}/leagues",
            BASE_URL, self.code, season
        );
        let doc = get_json(&self.client, &url).await?;
        Ok(parse_league_ids(&doc))
    }

    pub fn league(&self, league_key: &str) -> League {
        League {
            client: self.client.clone(),
            league_key: league_key.to_string(),
        }
    }
}

/// One fantasy league, addressed by its league key.
#[derive(Debug, Clone)]
pub struct League {
    client: Client,
    league_key: String,
}

impl League {
    pub fn league_key(&self) -> &str {
        &self.league_key
    }

    /// All teams in the league, in Yahoo's listing order.
    pub async fn teams(&self) -> Result<Vec<TeamInfo>> {
        let url = format!("{}/league/{}/teams", BASE_URL, self.league_key);
        let doc = get_json(&self.client, &url).await?;
        parse_teams(&doc)
    }

    /// Week the league is currently playing.
    pub async fn current_week(&self) -> Result<Week> {
        let url = format!("{}/league/{}", BASE_URL, self.league_key);
        let doc = get_json(&self.client, &url).await?;
        let week = u64_at(&doc, "current_week")
            .ok_or_else(|| FlbError::payload("league metadata missing current_week"))?;
        Ok(Week(week as u16))
    }

    /// Calendar dates covered by a fantasy week.
    pub async fn week_date_range(&self, week: Week) -> Result<WeekDates> {
        let url = format!(
            "{}/league/{}/scoreboard;week={}",
            BASE_URL, self.league_key, week
        );
        let doc = get_json(&self.client, &url).await?;
        parse_week_dates(&doc)
    }

    pub fn team(&self, team_key: &str) -> Team {
        Team {
            client: self.client.clone(),
            team_key: team_key.to_string(),
        }
    }
}

/// One fantasy team, addressed by its team key.
#[derive(Debug, Clone)]
pub struct Team {
    client: Client,
    team_key: String,
}

impl Team {
    /// Roster for a week, or the live roster when no week is given.
    pub async fn roster(&self, week: Option<Week>) -> Result<Vec<RosterPlayer>> {
        let url = match week {
            Some(week) => format!("{}/team/{}/roster;week={}", BASE_URL, self.team_key, week),
            None => format!("{}/team/{}/roster", BASE_URL, self.team_key),
        };
        let doc = get_json(&self.client, &url).await?;
        parse_roster(&doc)
    }

    /// Key of the opposing team in the given week's matchup.
    pub async fn matchup(&self, week: Week) -> Result<String> {
        let url = format!(
            "{}/team/{}/matchups;weeks={}",
            BASE_URL, self.team_key, week
        );
        let doc = get_json(&self.client, &url).await?;
        parse_matchup_opponent(&doc, &self.team_key)
    }
}

fn parse_league_ids(doc: &Value) -> Vec<String> {
    let Some(leagues) = find_key(doc, "leagues") else {
        return Vec::new();
    };
    numbered_entities(leagues, "league")
        .into_iter()
        .filter_map(|league| string_at(league, "league_key"))
        .collect()
}

fn parse_teams(doc: &Value) -> Result<Vec<TeamInfo>> {
    let teams = find_key(doc, "teams")
        .ok_or_else(|| FlbError::payload("league response missing teams"))?;
    let infos: Vec<TeamInfo> = numbered_entities(teams, "team")
        .into_iter()
        .filter_map(parse_team_info)
        .collect();
    if infos.is_empty() {
        return Err(FlbError::payload("league teams collection was empty"));
    }
    Ok(infos)
}

fn parse_team_info(team: &Value) -> Option<TeamInfo> {
    Some(TeamInfo {
        team_key: string_at(team, "team_key")?,
        name: string_at(team, "name")?,
        is_mine: u64_at(team, "is_owned_by_current_login") == Some(1),
    })
}

fn parse_week_dates(doc: &Value) -> Result<WeekDates> {
    let start = string_at(doc, "week_start")
        .ok_or_else(|| FlbError::payload("scoreboard missing week_start"))?;
    let end = string_at(doc, "week_end")
        .ok_or_else(|| FlbError::payload("scoreboard missing week_end"))?;
    Ok(WeekDates {
        start: NaiveDate::parse_from_str(&start, "%Y-%m-%d")?,
        end: NaiveDate::parse_from_str(&end, "%Y-%m-%d")?,
    })
}

fn parse_roster(doc: &Value) -> Result<Vec<RosterPlayer>> {
    let players = find_key(doc, "players")
        .ok_or_else(|| FlbError::payload("roster response missing players"))?;
    Ok(numbered_entities(players, "player")
        .into_iter()
        .filter_map(parse_roster_player)
        .collect())
}

fn parse_roster_player(player: &Value) -> Option<RosterPlayer> {
    let position_type = PositionType::from_code(&string_at(player, "position_type")?)?;
    Some(RosterPlayer {
        player_id: u64_at(player, "player_id")?,
        name: string_at(player, "full")?,
        team: string_at(player, "editorial_team_abbr")?,
        position_type,
        selected_position: parse_selected_position(player)?,
        status: string_at(player, "status"),
    })
}

// The bare "position" key also appears under eligible_positions, so the
// search has to be scoped to the selected_position block.
fn parse_selected_position(player: &Value) -> Option<String> {
    let slot = find_key(player, "selected_position")?;
    string_at(slot, "position")
}

fn parse_matchup_opponent(doc: &Value, team_key: &str) -> Result<String> {
    let matchups = find_key(doc, "matchups")
        .ok_or_else(|| FlbError::payload("matchup response missing matchups"))?;
    for matchup in numbered_entities(matchups, "matchup") {
        let Some(teams) = find_key(matchup, "teams") else {
            continue;
        };
        let keys: Vec<String> = numbered_entities(teams, "team")
            .into_iter()
            .filter_map(|team| string_at(team, "team_key"))
            .collect();
        if keys.iter().any(|key| key == team_key) {
            if let Some(opponent) = keys.into_iter().find(|key| key != team_key) {
                return Ok(opponent);
            }
        }
    }
    Err(FlbError::MatchupNotFound {
        team_key: team_key.to_string(),
    })
}
