//! Weekly category totals and head-to-head comparison.
//!
//! The league scores twelve categories: R, HR, RBI, SB, AVG and OBP for
//! batting, W, K, SV, HLD, ERA and WHIP for pitching. Counting stats sum
//! across the roster; the rates are weighted means (AVG by at-bats, OBP by
//! times to the plate, ERA and WHIP by projected innings).

use crate::predict::PlayerWeek;

/// Category totals for one roster's predicted week.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeekSummary {
    pub r: f64,
    pub hr: f64,
    pub rbi: f64,
    pub sb: f64,
    pub avg: f64,
    pub obp: f64,
    pub w: f64,
    pub k: f64,
    pub sv: f64,
    pub hld: f64,
    pub era: f64,
    pub whip: f64,
}

/// Rolls predicted lines up into [`WeekSummary`] totals and tallies
/// category wins between two summaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer;

impl Scorer {
    pub fn new() -> Self {
        Self
    }

    /// Total one roster's predicted lines into weekly categories.
    pub fn summarize(&self, rows: &[PlayerWeek]) -> WeekSummary {
        let mut summary = WeekSummary::default();
        let mut ab = 0.0;
        let mut plate = 0.0;
        let mut innings = 0.0;
        let mut avg_sum = 0.0;
        let mut obp_sum = 0.0;
        let mut era_sum = 0.0;
        let mut whip_sum = 0.0;

        for row in rows {
            summary.r += row.r;
            summary.hr += row.hr;
            summary.rbi += row.rbi;
            summary.sb += row.sb;
            summary.w += row.w;
            summary.k += row.k;
            summary.sv += row.sv;
            summary.hld += row.hld;

            ab += row.ab;
            plate += row.ab + row.bb;
            innings += row.ip;
            avg_sum += row.avg * row.ab;
            obp_sum += row.obp * (row.ab + row.bb);
            era_sum += row.era * row.ip;
            whip_sum += row.whip * row.ip;
        }

        if ab > 0.0 {
            summary.avg = avg_sum / ab;
        }
        if plate > 0.0 {
            summary.obp = obp_sum / plate;
        }
        if innings > 0.0 {
            summary.era = era_sum / innings;
            summary.whip = whip_sum / innings;
        }
        summary
    }

    /// Category win/loss tally for `mine` against `theirs`.
    ///
    /// Higher wins everywhere except ERA and WHIP, where lower wins. A tied
    /// category counts for neither side.
    pub fn compare(&self, mine: &WeekSummary, theirs: &WeekSummary) -> (u32, u32) {
        let mut wins = 0;
        let mut losses = 0;

        let higher_wins = [
            (mine.r, theirs.r),
            (mine.hr, theirs.hr),
            (mine.rbi, theirs.rbi),
            (mine.sb, theirs.sb),
            (mine.avg, theirs.avg),
            (mine.obp, theirs.obp),
            (mine.w, theirs.w),
            (mine.k, theirs.k),
            (mine.sv, theirs.sv),
            (mine.hld, theirs.hld),
        ];
        for (m, t) in higher_wins {
            if m > t {
                wins += 1;
            } else if m < t {
                losses += 1;
            }
        }

        let lower_wins = [(mine.era, theirs.era), (mine.whip, theirs.whip)];
        for (m, t) in lower_wins {
            if m < t {
                wins += 1;
            } else if m > t {
                losses += 1;
            }
        }

        (wins, losses)
    }
}
