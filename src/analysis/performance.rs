//! Recent-performance analysis over weekly stat lines.

use serde::Serialize;

use crate::{
    analysis::{Player, PlayerDirectory},
    sleeper::types::WeekStats,
    PlayerId, Week,
};

/// Weekly points below this count as a poor week.
pub const POOR_PERFORMANCE_THRESHOLD: f64 = 8.0;

/// Weeks looked at by the performance command.
pub const WEEKS_TO_ANALYZE: u16 = 3;

/// Points scored in one week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekPoints {
    pub week: Week,
    pub points: f64,
}

/// A roster player with weeks below the threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoorPerformer {
    pub player: Player,
    pub poor_weeks: Vec<WeekPoints>,
}

impl PoorPerformer {
    pub fn total_poor_weeks(&self) -> usize {
        self.poor_weeks.len()
    }
}

/// Points for every analyzed week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSeries {
    pub player: Player,
    pub weeks: Vec<WeekPoints>,
}

/// The `weeks_back` weeks ending at `current`, never before week 1.
pub fn week_window(current: Week, weeks_back: u16) -> Vec<Week> {
    if weeks_back == 0 {
        return Vec::new();
    }
    let end = current.as_u16();
    let start = end.saturating_sub(weeks_back - 1).max(1);
    (start..=end).map(Week::new).collect()
}

/// Find roster players who scored below `threshold` in any analyzed week.
///
/// Weeks without stats are skipped. Players missing from a week's stats are
/// not counted for that week (bye or not yet played). Results are ordered by
/// number of poor weeks, most first; ties keep first-seen order.
pub fn find_poor_performers(
    player_ids: &[PlayerId],
    directory: &PlayerDirectory,
    weekly_stats: &[(Week, WeekStats)],
    threshold: f64,
) -> Vec<PoorPerformer> {
    let mut performers: Vec<PoorPerformer> = Vec::new();

    for (week, stats) in weekly_stats.iter().filter(|(_, s)| !s.is_empty()) {
        for id in player_ids {
            let (Some(player), Some(points)) = (directory.get(id), stats.points_for(id)) else {
                continue;
            };
            if points >= threshold {
                continue;
            }

            let entry = WeekPoints {
                week: *week,
                points,
            };
            match performers.iter_mut().find(|p| &p.player.id == id) {
                Some(existing) => existing.poor_weeks.push(entry),
                None => performers.push(PoorPerformer {
                    player: player.clone(),
                    poor_weeks: vec![entry],
                }),
            }
        }
    }

    performers.sort_by(|a, b| b.total_poor_weeks().cmp(&a.total_poor_weeks()));
    performers
}

/// Week-by-week points for each roster player, 0 when absent from a week.
///
/// Only weeks with stats contribute; with no stats at all the result is empty.
pub fn weekly_series(
    player_ids: &[PlayerId],
    directory: &PlayerDirectory,
    weekly_stats: &[(Week, WeekStats)],
) -> Vec<PlayerSeries> {
    let weeks_with_data: Vec<&(Week, WeekStats)> =
        weekly_stats.iter().filter(|(_, s)| !s.is_empty()).collect();
    if weeks_with_data.is_empty() {
        return Vec::new();
    }

    player_ids
        .iter()
        .filter_map(|id| directory.get(id))
        .map(|player| PlayerSeries {
            player: player.clone(),
            weeks: weeks_with_data
                .iter()
                .map(|(week, stats)| WeekPoints {
                    week: *week,
                    points: stats.points_for(&player.id).unwrap_or(0.0),
                })
                .collect(),
        })
        .collect()
}
