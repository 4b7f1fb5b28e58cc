//! Weekly stat lines from rest-of-season projections.
//!
//! Scaling rule: a projection line's counting stats are prorated by the
//! games the club plays in the target week over the line's projected games.
//! Starting pitchers are prorated by scheduled starts over projected starts
//! instead. Rate stats pass through unscaled and are weighted later by the
//! summarizer.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::roster::Container;
use crate::sources::{DepthChartProjections, ProbableStarters, TeamSchedule, TeamSummaries};
use crate::yahoo::types::{PositionType, RosterPlayer, WeekDates};

/// One player's predicted line for the target week.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerWeek {
    pub name: String,
    pub team: String,
    /// Games the player's club plays in the week.
    pub wk_g: u32,
    /// Starts scheduled for the pitcher in the week.
    pub wk_gs: u32,
    /// Rest-of-season projected games, the scaling basis.
    pub g: f64,
    pub ab: f64,
    pub r: f64,
    pub doubles: f64,
    pub triples: f64,
    pub hr: f64,
    pub rbi: f64,
    pub bb: f64,
    pub so: f64,
    pub sb: f64,
    pub avg: f64,
    pub obp: f64,
    pub w: f64,
    pub k: f64,
    pub sv: f64,
    pub hld: f64,
    pub era: f64,
    pub whip: f64,
    /// Scaled innings, the ERA/WHIP weight; not a report column.
    pub ip: f64,
}

impl PlayerWeek {
    fn empty(name: &str, team: &str) -> Self {
        Self {
            name: name.to_string(),
            team: team.to_string(),
            ..Self::default()
        }
    }
}

/// Joins the data sources and turns roster snapshots into weekly lines.
///
/// Cacheable as a whole; a restored builder predicts with the sources it
/// was built from, including its embedded starters table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Builder {
    pub league_key: String,
    pub week: WeekDates,
    pub projections: DepthChartProjections,
    pub schedule: TeamSchedule,
    pub summaries: TeamSummaries,
    pub starters: ProbableStarters,
}

impl Builder {
    pub fn new(
        league_key: impl Into<String>,
        week: WeekDates,
        projections: DepthChartProjections,
        schedule: TeamSchedule,
        summaries: TeamSummaries,
        starters: ProbableStarters,
    ) -> Self {
        Self {
            league_key: league_key.into(),
            week,
            projections,
            schedule,
            summaries,
            starters,
        }
    }

    /// Predict one roster's lines for the builder's week.
    pub fn predict(&self, container: &Container) -> Vec<PlayerWeek> {
        container
            .players
            .iter()
            .map(|player| match player.position_type {
                PositionType::Batter => self.batter_week(player),
                PositionType::Pitcher => self.pitcher_week(player),
            })
            .collect()
    }

    // Club code as the schedule feed spells it, via the directory.
    fn club_code(&self, team: &str) -> String {
        self.summaries
            .resolve(team)
            .map(|row| row.abbreviation.clone())
            .unwrap_or_else(|| team.to_uppercase())
    }

    fn week_games(&self, team: &str) -> u32 {
        self.schedule
            .games_in_range(&self.club_code(team), self.week.start, self.week.end)
    }

    fn batter_week(&self, player: &RosterPlayer) -> PlayerWeek {
        let mut row = PlayerWeek::empty(&player.name, &player.team);
        row.wk_g = self.week_games(&player.team);
        let Some(line) = self.projections.batter(&player.name) else {
            return row;
        };
        let factor = if line.g > 0.0 {
            f64::from(row.wk_g) / line.g
        } else {
            0.0
        };
        row.g = line.g;
        row.ab = line.ab * factor;
        row.r = line.r * factor;
        row.doubles = line.doubles * factor;
        row.triples = line.triples * factor;
        row.hr = line.hr * factor;
        row.rbi = line.rbi * factor;
        row.bb = line.bb * factor;
        row.so = line.so * factor;
        row.sb = line.sb * factor;
        row.avg = line.avg;
        row.obp = line.obp;
        row
    }

    fn pitcher_week(&self, player: &RosterPlayer) -> PlayerWeek {
        let mut row = PlayerWeek::empty(&player.name, &player.team);
        row.wk_g = self.week_games(&player.team);
        row.wk_gs = self.starters.scheduled_starts(&player.name);
        let Some(line) = self.projections.pitcher(&player.name) else {
            return row;
        };
        // Starters scale by scheduled starts, relievers by club games.
        let factor = if line.gs > 0.0 {
            f64::from(row.wk_gs) / line.gs
        } else if line.g > 0.0 {
            f64::from(row.wk_g) / line.g
        } else {
            0.0
        };
        row.g = line.g;
        row.w = line.w * factor;
        row.k = line.so * factor;
        row.sv = line.sv * factor;
        row.hld = line.hld * factor;
        row.ip = line.ip * factor;
        row.era = line.era;
        row.whip = line.whip;
        row
    }
}

/// One batter's rest-of-season line for the single-roster report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HittingRow {
    pub name: String,
    pub team: String,
    pub g: f64,
    pub ab: f64,
    pub r: f64,
    pub doubles: f64,
    pub triples: f64,
    pub hr: f64,
    pub rbi: f64,
    pub bb: f64,
    pub so: f64,
    pub sb: f64,
    pub avg: f64,
    pub obp: f64,
}

/// Hitting-only lookup for the single-roster flow. No scaling; the report
/// shows the rest-of-season lines as projected.
#[derive(Debug, Clone)]
pub struct HittingBuilder {
    projections: DepthChartProjections,
}

impl HittingBuilder {
    /// Build from a fresh projection download.
    pub async fn new(client: &Client) -> Result<Self> {
        Ok(Self {
            projections: DepthChartProjections::fetch(client).await?,
        })
    }

    pub fn with_projections(projections: DepthChartProjections) -> Self {
        Self { projections }
    }

    /// Hitting lines for the batters on a roster, in roster order.
    pub fn roster_predict(&self, players: &[RosterPlayer]) -> Vec<HittingRow> {
        players
            .iter()
            .filter(|player| player.position_type == PositionType::Batter)
            .map(|player| self.batter_row(player))
            .collect()
    }

    fn batter_row(&self, player: &RosterPlayer) -> HittingRow {
        let mut row = HittingRow {
            name: player.name.clone(),
            team: player.team.clone(),
            ..HittingRow::default()
        };
        if let Some(line) = self.projections.batter(&player.name) {
            row.g = line.g;
            row.ab = line.ab;
            row.r = line.r;
            row.doubles = line.doubles;
            row.triples = line.triples;
            row.hr = line.hr;
            row.rbi = line.rbi;
            row.bb = line.bb;
            row.so = line.so;
            row.sb = line.sb;
            row.avg = line.avg;
            row.obp = line.obp;
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::projections::{BatterLine, PitcherLine};
    use crate::sources::summary::TeamSummaryRow;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn week() -> WeekDates {
        WeekDates {
            start: day(2026, 6, 29),
            end: day(2026, 7, 5),
        }
    }

    fn batter_line() -> BatterLine {
        BatterLine {
            name: "Mike Trout".to_string(),
            team: Some("LAA".to_string()),
            g: 80.0,
            ab: 320.0,
            r: 56.0,
            doubles: 16.0,
            triples: 4.0,
            hr: 24.0,
            rbi: 64.0,
            bb: 48.0,
            so: 72.0,
            sb: 8.0,
            avg: 0.300,
            obp: 0.420,
        }
    }

    fn starter_line() -> PitcherLine {
        PitcherLine {
            name: "Gerrit Cole".to_string(),
            team: Some("NYY".to_string()),
            g: 12.0,
            gs: 12.0,
            ip: 72.0,
            w: 6.0,
            so: 90.0,
            sv: 0.0,
            hld: 0.0,
            era: 3.20,
            whip: 1.05,
        }
    }

    fn reliever_line() -> PitcherLine {
        PitcherLine {
            name: "Josh Hader".to_string(),
            team: Some("HOU".to_string()),
            g: 30.0,
            gs: 0.0,
            ip: 30.0,
            w: 2.0,
            so: 45.0,
            sv: 18.0,
            hld: 0.0,
            era: 2.50,
            whip: 0.95,
        }
    }

    fn player(name: &str, club: &str, kind: PositionType) -> RosterPlayer {
        RosterPlayer {
            player_id: 1,
            name: name.to_string(),
            team: club.to_string(),
            position_type: kind,
            selected_position: "BN".to_string(),
            status: None,
        }
    }

    fn builder() -> Builder {
        let mut games = BTreeMap::new();
        // Six games for the Angels and Astros in the target week, five
        // for the Yankees.
        let angels_week = vec![
            day(2026, 6, 29),
            day(2026, 6, 30),
            day(2026, 7, 1),
            day(2026, 7, 2),
            day(2026, 7, 4),
            day(2026, 7, 5),
        ];
        games.insert("LAA".to_string(), angels_week.clone());
        games.insert("HOU".to_string(), angels_week);
        games.insert(
            "NYY".to_string(),
            vec![
                day(2026, 6, 29),
                day(2026, 6, 30),
                day(2026, 7, 1),
                day(2026, 7, 2),
                day(2026, 7, 3),
            ],
        );
        let schedule = TeamSchedule::new(2026, games);

        let summaries = TeamSummaries::new(
            2026,
            vec![
                TeamSummaryRow {
                    id: 108,
                    name: "Los Angeles Angels".to_string(),
                    abbreviation: "LAA".to_string(),
                    league: None,
                    division: None,
                },
                TeamSummaryRow {
                    id: 117,
                    name: "Houston Astros".to_string(),
                    abbreviation: "HOU".to_string(),
                    league: None,
                    division: None,
                },
                TeamSummaryRow {
                    id: 147,
                    name: "New York Yankees".to_string(),
                    abbreviation: "NYY".to_string(),
                    league: None,
                    division: None,
                },
            ],
        );

        let projections =
            DepthChartProjections::new(vec![batter_line()], vec![starter_line(), reliever_line()]);

        let mut starts = BTreeMap::new();
        starts.insert("Gerrit Cole".to_string(), 2);
        let starters = ProbableStarters::new(week().start, week().end, starts);

        Builder::new("403.l.41177", week(), projections, schedule, summaries, starters)
    }

    #[test]
    fn test_batter_counting_stats_scale_by_week_games() {
        let builder = builder();
        let container = Container::new(
            "403.l.41177.t.1",
            vec![player("Mike Trout", "LAA", PositionType::Batter)],
        );
        let rows = builder.predict(&container);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.wk_g, 6);
        assert_eq!(row.g, 80.0);
        // factor = 6 / 80
        assert!((row.ab - 24.0).abs() < 1e-9);
        assert!((row.hr - 1.8).abs() < 1e-9);
        assert!((row.so - 5.4).abs() < 1e-9);
        assert_eq!(row.avg, 0.300);
        assert_eq!(row.obp, 0.420);
        assert_eq!(row.wk_gs, 0);
        assert_eq!(row.w, 0.0);
    }

    #[test]
    fn test_starter_scales_by_scheduled_starts() {
        let builder = builder();
        let container = Container::new(
            "403.l.41177.t.1",
            vec![player("Gerrit Cole", "NYY", PositionType::Pitcher)],
        );
        let row = &builder.predict(&container)[0];

        assert_eq!(row.wk_g, 5);
        assert_eq!(row.wk_gs, 2);
        // factor = 2 / 12
        assert!((row.k - 15.0).abs() < 1e-9);
        assert!((row.w - 1.0).abs() < 1e-9);
        assert!((row.ip - 12.0).abs() < 1e-9);
        assert_eq!(row.era, 3.20);
        assert_eq!(row.ab, 0.0);
    }

    #[test]
    fn test_unscheduled_starter_gets_zero_week() {
        let mut builder = builder();
        builder.starters = ProbableStarters::new(week().start, week().end, BTreeMap::new());
        let container = Container::new(
            "403.l.41177.t.1",
            vec![player("Gerrit Cole", "NYY", PositionType::Pitcher)],
        );
        let row = &builder.predict(&container)[0];

        assert_eq!(row.wk_gs, 0);
        assert_eq!(row.k, 0.0);
        assert_eq!(row.w, 0.0);
        assert_eq!(row.ip, 0.0);
    }

    #[test]
    fn test_reliever_scales_by_club_games() {
        let builder = builder();
        let container = Container::new(
            "403.l.41177.t.1",
            vec![player("Josh Hader", "HOU", PositionType::Pitcher)],
        );
        let row = &builder.predict(&container)[0];

        assert_eq!(row.wk_g, 6);
        assert_eq!(row.wk_gs, 0);
        // factor = 6 / 30
        assert!((row.sv - 3.6).abs() < 1e-9);
        assert!((row.k - 9.0).abs() < 1e-9);
        assert_eq!(row.whip, 0.95);
    }

    #[test]
    fn test_unprojected_player_gets_zero_line_with_schedule() {
        let builder = builder();
        let container = Container::new(
            "403.l.41177.t.1",
            vec![player("Raw Rookie", "LAA", PositionType::Batter)],
        );
        let row = &builder.predict(&container)[0];

        assert_eq!(row.wk_g, 6);
        assert_eq!(row.g, 0.0);
        assert_eq!(row.ab, 0.0);
        assert_eq!(row.avg, 0.0);
    }

    #[test]
    fn test_predict_preserves_roster_order() {
        let builder = builder();
        let container = Container::new(
            "403.l.41177.t.1",
            vec![
                player("Gerrit Cole", "NYY", PositionType::Pitcher),
                player("Mike Trout", "LAA", PositionType::Batter),
            ],
        );
        let rows = builder.predict(&container);
        assert_eq!(rows[0].name, "Gerrit Cole");
        assert_eq!(rows[1].name, "Mike Trout");
    }

    #[test]
    fn test_builder_round_trips_through_json() {
        let builder = builder();
        let container = Container::new(
            "403.l.41177.t.1",
            vec![player("Mike Trout", "LAA", PositionType::Batter)],
        );
        let fresh = builder.predict(&container);

        let raw = serde_json::to_string(&builder).unwrap();
        let restored: Builder = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored.predict(&container), fresh);
        assert_eq!(restored.league_key, "403.l.41177");
    }

    #[test]
    fn test_hitting_builder_keeps_batters_only() {
        let hitting = HittingBuilder::with_projections(DepthChartProjections::new(
            vec![batter_line()],
            vec![starter_line()],
        ));
        let roster = vec![
            player("Mike Trout", "LAA", PositionType::Batter),
            player("Gerrit Cole", "NYY", PositionType::Pitcher),
            player("Raw Rookie", "LAA", PositionType::Batter),
        ];
        let rows = hitting.roster_predict(&roster);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Mike Trout");
        assert_eq!(rows[0].ab, 320.0);
        assert_eq!(rows[0].avg, 0.300);
        assert_eq!(rows[1].name, "Raw Rookie");
        assert_eq!(rows[1].ab, 0.0);
    }
}
