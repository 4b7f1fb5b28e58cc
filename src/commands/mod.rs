//! Command handlers behind the two binaries.

pub mod report;
pub mod roster;

use crate::cli::Season;
use crate::error::{FlbError, Result};
use crate::yahoo::types::TeamInfo;
use crate::yahoo::{Game, League};
use crate::LEAGUE_KEY_ENV_VAR;

/// League key from the explicit flag or the environment, if either is set.
pub fn league_key_override(flag: Option<String>) -> Option<String> {
    flag.or_else(|| std::env::var(LEAGUE_KEY_ENV_VAR).ok())
}

/// Resolve the league to operate on: an explicit key wins, then the
/// environment, then the account's first league of the season.
pub async fn resolve_league(game: &Game, season: Season, flag: Option<String>) -> Result<League> {
    if let Some(key) = league_key_override(flag) {
        return Ok(game.league(&key));
    }
    let ids = game.league_ids(season).await?;
    ids.into_iter()
        .next()
        .map(|key| game.league(&key))
        .ok_or(FlbError::MissingLeague {
            season: season.as_u16(),
        })
}

/// The caller's team in the league team list.
pub(crate) fn my_team(teams: &[TeamInfo]) -> Result<&TeamInfo> {
    teams
        .iter()
        .find(|team| team.is_mine)
        .ok_or_else(|| FlbError::payload("no team owned by the logged-in account"))
}
