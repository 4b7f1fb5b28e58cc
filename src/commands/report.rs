//! Full-report command: predict the caller's roster for next week and
//! compare it against one or more opponents.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use reqwest::Client;
use tracing::info;

use crate::auth;
use crate::cache;
use crate::cli::{Season, Week};
use crate::error::{FlbError, Result};
use crate::opponents::{self, OpponentMode};
use crate::predict::Builder;
use crate::report;
use crate::roster::Container;
use crate::score::Scorer;
use crate::sources::{DepthChartProjections, ProbableStarters, TeamSchedule, TeamSummaries};
use crate::yahoo::types::{TeamInfo, WeekDates};
use crate::yahoo::{Game, League};

use super::{my_team, resolve_league};

/// Parameters for the full-report command.
#[derive(Debug)]
pub struct ReportParams {
    pub credentials: PathBuf,
    pub mode: OpponentMode,
    pub cached: bool,
    pub save: bool,
    pub season: Season,
    pub league: Option<String>,
}

/// The three run-independent data sources.
struct SourceSet {
    projections: DepthChartProjections,
    schedule: TeamSchedule,
    summaries: TeamSummaries,
}

/// Handle the full-report command. Returns the report text; the binary
/// prints it.
pub async fn handle_report(params: ReportParams) -> Result<String> {
    let creds = auth::load_credentials(&params.credentials)?;
    let yahoo_client = auth::authorized_client(&creds)?;
    let feed_client = auth::public_client()?;

    let game = Game::new(yahoo_client);
    let league = resolve_league(&game, params.season, params.league.clone()).await?;
    info!(league_key = league.league_key(), "resolved league");

    let teams = league.teams().await?;
    let mine = my_team(&teams)?.clone();
    let week = league.current_week().await?.next();
    let dates = league.week_date_range(week).await?;
    info!(week = week.as_u16(), start = %dates.start, end = %dates.end, "target week");

    let cache_dir = std::env::current_dir()?;
    let builder = acquire_builder(&params, &feed_client, &league, dates, &cache_dir).await?;
    let containers = acquire_containers(params.cached, &league, &teams, &cache_dir).await?;

    let scorer = Scorer::new();
    let my_rows = builder.predict(container_for(&containers, &mine.team_key)?);
    let my_sum = scorer.summarize(&my_rows);

    let mut out = report::render_team(&mine.name, &my_rows, &my_sum);
    for opponent in select_opponents(&params.mode, &league, &teams, &mine.team_key, week).await? {
        let rows = builder.predict(container_for(&containers, &opponent.team_key)?);
        let opp_sum = scorer.summarize(&rows);
        out.push('\n');
        out.push_str(&report::render_team(&opponent.name, &rows, &opp_sum));
        let (wins, losses) = scorer.compare(&my_sum, &opp_sum);
        out.push('\n');
        out.push_str(&report::render_tally(wins, losses));
    }

    if params.save {
        save_run(&cache_dir, &builder, &containers)?;
    }
    Ok(out)
}

/// The teams to compare against, per the selected mode.
async fn select_opponents(
    mode: &OpponentMode,
    league: &League,
    teams: &[TeamInfo],
    my_team_key: &str,
    week: Week,
) -> Result<Vec<TeamInfo>> {
    match mode {
        OpponentMode::All => Ok(opponents::all_opponents(teams, my_team_key)),
        OpponentMode::Named(name) => Ok(vec![opponents::named_opponent(teams, name)?]),
        OpponentMode::NextMatchup => {
            let key = league.team(my_team_key).matchup(week).await?;
            Ok(vec![opponents::opponent_by_key(teams, &key)?])
        }
    }
}

/// Restore the builder from cache, or assemble one from the sources.
///
/// A restored builder carries the sources it was built from, so the source
/// caches are only consulted when building fresh.
async fn acquire_builder(
    params: &ReportParams,
    client: &Client,
    league: &League,
    dates: WeekDates,
    cache_dir: &Path,
) -> Result<Builder> {
    if let Some(builder) =
        cache::load_if::<Builder>(params.cached, &cache::builder_path(cache_dir))?
    {
        info!("prediction builder restored from cache");
        return Ok(builder);
    }

    let sources = acquire_sources(params.cached, client, params.season, cache_dir).await?;
    // Probable starters cover only the target week, never cached on their own.
    let starters = ProbableStarters::fetch(client, dates.start, dates.end).await?;
    info!(
        batters = sources.projections.batter_count(),
        pitchers = sources.projections.pitcher_count(),
        starters = starters.pitcher_count(),
        "prediction builder assembled"
    );
    Ok(Builder::new(
        league.league_key(),
        dates,
        sources.projections,
        sources.schedule,
        sources.summaries,
        starters,
    ))
}

/// Restore or fetch the three shared sources, each gated independently.
async fn acquire_sources(
    cached: bool,
    client: &Client,
    season: Season,
    cache_dir: &Path,
) -> Result<SourceSet> {
    let projections = match cache::load_if(cached, &cache::projections_path(cache_dir))? {
        Some(projections) => projections,
        None => DepthChartProjections::fetch(client).await?,
    };
    let schedule = match cache::load_if(cached, &cache::team_schedule_path(cache_dir))? {
        Some(schedule) => schedule,
        None => TeamSchedule::fetch(client, season.as_u16()).await?,
    };
    let summaries = match cache::load_if(cached, &cache::team_summary_path(cache_dir))? {
        Some(summaries) => summaries,
        None => TeamSummaries::fetch(client, season.as_u16()).await?,
    };
    Ok(SourceSet {
        projections,
        schedule,
        summaries,
    })
}

/// Restore or capture a roster container for every league team.
async fn acquire_containers(
    cached: bool,
    league: &League,
    teams: &[TeamInfo],
    cache_dir: &Path,
) -> Result<BTreeMap<String, Container>> {
    let mut containers = BTreeMap::new();
    let mut restored = 0;
    for team in teams {
        let path = cache::container_path(cache_dir, &team.team_key);
        let container = match cache::load_if(cached, &path)? {
            Some(container) => {
                restored += 1;
                container
            }
            None => Container::fetch(league, &team.team_key).await?,
        };
        containers.insert(team.team_key.clone(), container);
    }
    info!(
        teams = teams.len(),
        restored, "roster containers acquired"
    );
    Ok(containers)
}

fn container_for<'a>(
    containers: &'a BTreeMap<String, Container>,
    team_key: &str,
) -> Result<&'a Container> {
    containers.get(team_key).ok_or_else(|| FlbError::MissingTeam {
        team_key: team_key.to_string(),
    })
}

/// Persist the run's builder, sources, and every roster container.
fn save_run(
    cache_dir: &Path,
    builder: &Builder,
    containers: &BTreeMap<String, Container>,
) -> Result<()> {
    cache::save(&cache::projections_path(cache_dir), &builder.projections)?;
    cache::save(&cache::team_schedule_path(cache_dir), &builder.schedule)?;
    cache::save(&cache::team_summary_path(cache_dir), &builder.summaries)?;
    cache::save(&cache::builder_path(cache_dir), builder)?;
    for (team_key, container) in containers {
        cache::save(&cache::container_path(cache_dir, team_key), container)?;
    }
    info!(dir = %cache_dir.display(), "run state saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::projections::BatterLine;
    use crate::yahoo::types::{PositionType, RosterPlayer};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    fn dates() -> WeekDates {
        WeekDates {
            start: day(6, 29),
            end: day(7, 5),
        }
    }

    fn team(idx: usize, mine: bool) -> TeamInfo {
        TeamInfo {
            team_key: format!("403.l.41177.t.{}", idx),
            name: format!("Team {}", idx),
            is_mine: mine,
        }
    }

    fn trout() -> RosterPlayer {
        RosterPlayer {
            player_id: 8861,
            name: "Mike Trout".to_string(),
            team: "LAA".to_string(),
            position_type: PositionType::Batter,
            selected_position: "CF".to_string(),
            status: None,
        }
    }

    fn fixture_builder() -> Builder {
        let mut games = std::collections::BTreeMap::new();
        games.insert("LAA".to_string(), vec![day(6, 29), day(6, 30), day(7, 1)]);
        let projections = DepthChartProjections::new(
            vec![BatterLine {
                name: "Mike Trout".to_string(),
                team: Some("LAA".to_string()),
                g: 60.0,
                ab: 240.0,
                r: 42.0,
                doubles: 12.0,
                triples: 3.0,
                hr: 18.0,
                rbi: 48.0,
                bb: 36.0,
                so: 54.0,
                sb: 6.0,
                avg: 0.300,
                obp: 0.420,
            }],
            Vec::new(),
        );
        Builder::new(
            "403.l.41177",
            dates(),
            projections,
            TeamSchedule::new(2026, games),
            TeamSummaries::new(2026, Vec::new()),
            ProbableStarters::new(dates().start, dates().end, std::collections::BTreeMap::new()),
        )
    }

    fn offline_league() -> League {
        Game::new(Client::new()).league("403.l.41177")
    }

    #[tokio::test]
    async fn test_acquire_builder_prefers_cache() {
        let dir = tempdir().unwrap();
        let seeded = fixture_builder();
        cache::save(&cache::builder_path(dir.path()), &seeded).unwrap();

        let params = ReportParams {
            credentials: PathBuf::from("creds.json"),
            mode: OpponentMode::NextMatchup,
            cached: true,
            save: false,
            season: Season::new(2026),
            league: None,
        };
        // Cache hit means no feed is contacted; a live fetch would fail here.
        let league = offline_league();
        let builder = acquire_builder(&params, &Client::new(), &league, dates(), dir.path())
            .await
            .unwrap();
        assert_eq!(builder.league_key, "403.l.41177");
        assert_eq!(builder.projections.batter_count(), 1);
    }

    #[tokio::test]
    async fn test_acquire_builder_ignores_cache_without_flag() {
        let dir = tempdir().unwrap();
        cache::save(&cache::builder_path(dir.path()), &fixture_builder()).unwrap();

        let params = ReportParams {
            credentials: PathBuf::from("creds.json"),
            mode: OpponentMode::NextMatchup,
            cached: false,
            save: false,
            season: Season::new(2026),
            league: None,
        };
        // Without the flag the cached builder (league 403.l.41177) must not
        // be used: fresh assembly either reaches the feeds and tags the
        // other league, or fails trying.
        let league = Game::new(Client::new()).league("403.l.99999");
        if let Ok(builder) =
            acquire_builder(&params, &Client::new(), &league, dates(), dir.path()).await
        {
            assert_eq!(builder.league_key, "403.l.99999");
        }
    }

    #[tokio::test]
    async fn test_acquire_sources_from_cache_only() {
        let dir = tempdir().unwrap();
        let seeded = fixture_builder();
        cache::save(&cache::projections_path(dir.path()), &seeded.projections).unwrap();
        cache::save(&cache::team_schedule_path(dir.path()), &seeded.schedule).unwrap();
        cache::save(&cache::team_summary_path(dir.path()), &seeded.summaries).unwrap();

        let sources = acquire_sources(true, &Client::new(), Season::new(2026), dir.path())
            .await
            .unwrap();
        assert_eq!(sources.projections.batter_count(), 1);
        assert_eq!(sources.schedule.club_count(), 1);
        assert_eq!(sources.summaries.club_count(), 0);
    }

    #[tokio::test]
    async fn test_acquire_containers_from_cache_only() {
        let dir = tempdir().unwrap();
        let teams = vec![team(1, true), team(2, false)];
        for info in &teams {
            let container = Container::new(info.team_key.clone(), vec![trout()]);
            cache::save(
                &cache::container_path(dir.path(), &info.team_key),
                &container,
            )
            .unwrap();
        }

        let containers = acquire_containers(true, &offline_league(), &teams, dir.path())
            .await
            .unwrap();
        assert_eq!(containers.len(), 2);
        assert_eq!(
            containers["403.l.41177.t.1"].players[0].name,
            "Mike Trout"
        );
    }

    #[tokio::test]
    async fn test_acquire_containers_uncached_hit_the_live_api() {
        let dir = tempdir().unwrap();
        let teams = vec![team(1, true)];
        // No bearer token on this client, so the roster fetch is rejected.
        let result = acquire_containers(false, &offline_league(), &teams, dir.path()).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_save_run_writes_every_cache_file() {
        let dir = tempdir().unwrap();
        let builder = fixture_builder();
        let mut containers = BTreeMap::new();
        containers.insert(
            "403.l.41177.t.1".to_string(),
            Container::new("403.l.41177.t.1", vec![trout()]),
        );

        save_run(dir.path(), &builder, &containers).unwrap();

        assert!(cache::builder_path(dir.path()).exists());
        assert!(cache::projections_path(dir.path()).exists());
        assert!(cache::team_schedule_path(dir.path()).exists());
        assert!(cache::team_summary_path(dir.path()).exists());
        assert!(cache::container_path(dir.path(), "403.l.41177.t.1").exists());

        let restored: Option<Builder> = cache::load(&cache::builder_path(dir.path())).unwrap();
        assert_eq!(restored.unwrap().league_key, "403.l.41177");
    }

    #[test]
    fn test_save_run_overwrites_existing_files() {
        let dir = tempdir().unwrap();
        let mut builder = fixture_builder();
        let containers = BTreeMap::new();
        save_run(dir.path(), &builder, &containers).unwrap();

        builder.league_key = "403.l.99999".to_string();
        save_run(dir.path(), &builder, &containers).unwrap();

        let restored: Option<Builder> = cache::load(&cache::builder_path(dir.path())).unwrap();
        assert_eq!(restored.unwrap().league_key, "403.l.99999");
    }

    #[tokio::test]
    async fn test_select_opponents_all_and_named_need_no_network() {
        let league = offline_league();
        let teams: Vec<TeamInfo> = (1..=4).map(|i| team(i, i == 1)).collect();

        let all = select_opponents(
            &OpponentMode::All,
            &league,
            &teams,
            "403.l.41177.t.1",
            Week::new(4),
        )
        .await
        .unwrap();
        assert_eq!(all.len(), 3);

        let named = select_opponents(
            &OpponentMode::Named("Team 3".to_string()),
            &league,
            &teams,
            "403.l.41177.t.1",
            Week::new(4),
        )
        .await
        .unwrap();
        assert_eq!(named.len(), 1);
        assert_eq!(named[0].team_key, "403.l.41177.t.3");

        let absent = select_opponents(
            &OpponentMode::Named("Ghost Runners".to_string()),
            &league,
            &teams,
            "403.l.41177.t.1",
            Week::new(4),
        )
        .await;
        assert!(matches!(absent, Err(FlbError::OpponentNotFound { .. })));
    }

    #[test]
    fn test_container_lookup_missing_team_is_error() {
        let containers = BTreeMap::new();
        let result = container_for(&containers, "403.l.41177.t.9");
        assert!(matches!(result, Err(FlbError::MissingTeam { .. })));
    }
}
