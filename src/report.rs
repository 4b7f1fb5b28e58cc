//! Fixed-width text reports.
//!
//! Rendering returns plain `String`s and the binaries print them, so the
//! layout is testable without capturing stdout.

use crate::predict::{HittingRow, PlayerWeek};
use crate::score::WeekSummary;

const NAME_WIDTH: usize = 20;
const STAT_WIDTH: usize = 5;

const TEAM_COLUMNS: [&str; 22] = [
    "Name", "team", "WK_G", "WK_GS", "G", "AB", "R", "2B", "3B", "HR", "RBI", "BB", "SO", "SB",
    "AVG", "OBP", "W", "K", "SV", "HLD", "ERA", "WHIP",
];

const HITTING_COLUMNS: [&str; 14] = [
    "Name", "team", "G", "AB", "R", "2B", "3B", "HR", "RBI", "BB", "SO", "SB", "AVG", "OBP",
];

const SUMMARY_COLUMNS: [&str; 12] = [
    "R", "HR", "RBI", "SB", "AVG", "OBP", "W", "K", "SV", "HLD", "ERA", "WHIP",
];

fn count(value: f64) -> String {
    format!("{:.1}", value)
}

fn games(value: f64) -> String {
    format!("{:.0}", value)
}

fn rate3(value: f64) -> String {
    format!("{:.3}", value)
}

fn rate2(value: f64) -> String {
    format!("{:.2}", value)
}

/// One line with the first cell padded to `first_width` and the rest to
/// the stat width, single-space separated. Trailing padding is dropped.
fn padded_line(cells: &[String], first_width: usize) -> String {
    let mut line = String::new();
    for (idx, cell) in cells.iter().enumerate() {
        if idx > 0 {
            line.push(' ');
        }
        let width = if idx == 0 { first_width } else { STAT_WIDTH };
        line.push_str(&format!("{:<w$}", cell, w = width));
    }
    line.trim_end().to_string()
}

fn header(columns: &[&str]) -> String {
    let cells: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
    padded_line(&cells, NAME_WIDTH)
}

fn player_cells(row: &PlayerWeek) -> Vec<String> {
    vec![
        row.name.clone(),
        row.team.clone(),
        row.wk_g.to_string(),
        row.wk_gs.to_string(),
        games(row.g),
        count(row.ab),
        count(row.r),
        count(row.doubles),
        count(row.triples),
        count(row.hr),
        count(row.rbi),
        count(row.bb),
        count(row.so),
        count(row.sb),
        rate3(row.avg),
        rate3(row.obp),
        count(row.w),
        count(row.k),
        count(row.sv),
        count(row.hld),
        rate2(row.era),
        rate2(row.whip),
    ]
}

fn hitting_cells(row: &HittingRow) -> Vec<String> {
    vec![
        row.name.clone(),
        row.team.clone(),
        games(row.g),
        count(row.ab),
        count(row.r),
        count(row.doubles),
        count(row.triples),
        count(row.hr),
        count(row.rbi),
        count(row.bb),
        count(row.so),
        count(row.sb),
        rate3(row.avg),
        rate3(row.obp),
    ]
}

fn summary_values(summary: &WeekSummary) -> Vec<String> {
    vec![
        count(summary.r),
        count(summary.hr),
        count(summary.rbi),
        count(summary.sb),
        rate3(summary.avg),
        rate3(summary.obp),
        count(summary.w),
        count(summary.k),
        count(summary.sv),
        count(summary.hld),
        rate2(summary.era),
        rate2(summary.whip),
    ]
}

/// One team's table plus its weekly summary block, preceded by a blank
/// separator line.
pub fn render_team(team_name: &str, rows: &[PlayerWeek], summary: &WeekSummary) -> String {
    let mut lines = vec![
        String::new(),
        format!("Team Name: {}", team_name),
        header(&TEAM_COLUMNS),
    ];
    for row in rows {
        lines.push(padded_line(&player_cells(row), NAME_WIDTH));
    }
    lines.push(String::new());
    lines.push("Stat prediction for week".to_string());
    let summary_header: Vec<String> = SUMMARY_COLUMNS.iter().map(|c| c.to_string()).collect();
    lines.push(padded_line(&summary_header, STAT_WIDTH));
    lines.push(padded_line(&summary_values(summary), STAT_WIDTH));
    lines.join("\n")
}

/// Head-to-head category tally against one opponent.
pub fn render_tally(wins: u32, losses: u32) -> String {
    format!("Prediction result: {} - {}", wins, losses)
}

/// Rest-of-season hitting table for the single-roster flow.
pub fn render_hitting(team_name: &str, rows: &[HittingRow]) -> String {
    let mut lines = vec![
        String::new(),
        format!("Team Name: {}", team_name),
        header(&HITTING_COLUMNS),
    ];
    for row in rows {
        lines.push(padded_line(&hitting_cells(row), NAME_WIDTH));
    }
    lines.join("\n")
}
