//! Single-roster command: hitting projections for the caller's roster in
//! one explicit week. No caching, no comparison, no persistence.

use std::path::PathBuf;

use tracing::info;

use crate::auth;
use crate::cli::{Season, Week};
use crate::error::Result;
use crate::predict::HittingBuilder;
use crate::report;
use crate::yahoo::Game;

use super::{my_team, resolve_league};

/// Parameters for the single-roster command.
#[derive(Debug)]
pub struct RosterParams {
    pub credentials: PathBuf,
    pub week: Week,
    pub season: Season,
    pub league: Option<String>,
}

/// Handle the single-roster command. Returns the table text; the binary
/// prints it.
pub async fn handle_roster(params: RosterParams) -> Result<String> {
    let creds = auth::load_credentials(&params.credentials)?;
    let yahoo_client = auth::authorized_client(&creds)?;
    let feed_client = auth::public_client()?;

    let game = Game::new(yahoo_client);
    let league = resolve_league(&game, params.season, params.league).await?;
    info!(league_key = league.league_key(), week = params.week.as_u16(), "resolved league");

    let teams = league.teams().await?;
    let mine = my_team(&teams)?;
    let players = league
        .team(&mine.team_key)
        .roster(Some(params.week))
        .await?;
    info!(players = players.len(), "roster fetched");

    let builder = HittingBuilder::new(&feed_client).await?;
    let rows = builder.roster_predict(&players);
    Ok(report::render_hitting(&mine.name, &rows))
}
