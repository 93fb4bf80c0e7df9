//! Weekly game plan: a prioritized list of roster moves.

use serde::Serialize;
use std::fmt;

use crate::analysis::{
    performance::PoorPerformer,
    waiver::{AvailablePlayer, DroppingPlayer},
    Player,
};

/// Poor weeks that make an underperformer a drop candidate.
pub const CRITICAL_POOR_WEEKS: usize = 2;
/// Drops a player must exceed to raise a trend alert.
pub const TREND_ALERT_DROPS: u64 = 10_000;

const MAX_CRITICAL_DROPS: usize = 3;
const MAX_TRENDING_DROPS: usize = 2;
const MAX_ADDS: usize = 3;

/// Why a move is on the list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ActionReason {
    Underperforming { poor_weeks: usize },
    TrendingDown { drop_count: u64 },
    TrendingUp { add_count: u64 },
}

/// A single roster move.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum GameplanAction {
    Drop {
        player: Player,
        #[serde(flatten)]
        reason: ActionReason,
    },
    Add {
        player: Player,
        #[serde(flatten)]
        reason: ActionReason,
    },
}

impl GameplanAction {
    pub fn player(&self) -> &Player {
        match self {
            GameplanAction::Drop { player, .. } | GameplanAction::Add { player, .. } => player,
        }
    }

    pub fn reason(&self) -> &ActionReason {
        match self {
            GameplanAction::Drop { reason, .. } | GameplanAction::Add { reason, .. } => reason,
        }
    }

    pub fn is_drop(&self) -> bool {
        matches!(self, GameplanAction::Drop { .. })
    }
}

/// Overall state of the roster, from the number of critical underperformers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RosterHealth {
    Excellent,
    Good,
    Poor,
}

impl RosterHealth {
    pub fn from_critical_count(count: usize) -> Self {
        match count {
            0 => RosterHealth::Excellent,
            1..=2 => RosterHealth::Good,
            _ => RosterHealth::Poor,
        }
    }
}

impl fmt::Display for RosterHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RosterHealth::Excellent => "EXCELLENT",
            RosterHealth::Good => "GOOD",
            RosterHealth::Poor => "POOR",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GamePlan {
    /// Moves in priority order: underperformer drops, trending drops, adds.
    pub actions: Vec<GameplanAction>,
    pub critical_count: usize,
    pub roster_health: RosterHealth,
    /// My players dropped by more than [`TREND_ALERT_DROPS`] managers.
    pub trend_alerts: usize,
}

/// Build the weekly plan from the performance and waiver analyses.
pub fn build_gameplan(
    poor: &[PoorPerformer],
    dropping: &[DroppingPlayer],
    available: &[AvailablePlayer],
) -> GamePlan {
    let critical: Vec<&PoorPerformer> = poor
        .iter()
        .filter(|p| p.total_poor_weeks() >= CRITICAL_POOR_WEEKS)
        .collect();

    let mut actions: Vec<GameplanAction> = critical
        .iter()
        .take(MAX_CRITICAL_DROPS)
        .map(|p| GameplanAction::Drop {
            player: p.player.clone(),
            reason: ActionReason::Underperforming {
                poor_weeks: p.total_poor_weeks(),
            },
        })
        .collect();

    actions.extend(dropping.iter().take(MAX_TRENDING_DROPS).map(|d| {
        GameplanAction::Drop {
            player: d.player.clone(),
            reason: ActionReason::TrendingDown {
                drop_count: d.drop_count,
            },
        }
    }));

    actions.extend(available.iter().take(MAX_ADDS).map(|a| GameplanAction::Add {
        player: a.player.clone(),
        reason: ActionReason::TrendingUp {
            add_count: a.trend_count,
        },
    }));

    GamePlan {
        actions,
        critical_count: critical.len(),
        roster_health: RosterHealth::from_critical_count(critical.len()),
        trend_alerts: dropping
            .iter()
            .filter(|d| d.drop_count > TREND_ALERT_DROPS)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analysis::performance::WeekPoints, Position, Week};

    fn poor(id: &str, weeks: usize) -> PoorPerformer {
        PoorPerformer {
            player: Player::new(id, Some(Position::WR)),
            poor_weeks: (1..=weeks as u16)
                .map(|w| WeekPoints {
                    week: Week::new(w),
                    points: 2.0,
                })
                .collect(),
        }
    }

    fn dropping(id: &str, drop_count: u64) -> DroppingPlayer {
        DroppingPlayer {
            player: Player::new(id, Some(Position::RB)),
            drop_count,
        }
    }

    fn available(id: &str, trend_count: u64) -> AvailablePlayer {
        AvailablePlayer {
            player: Player::new(id, Some(Position::TE)),
            trend_count,
        }
    }

    #[test]
    fn test_roster_health_thresholds() {
        assert_eq!(RosterHealth::from_critical_count(0), RosterHealth::Excellent);
        assert_eq!(RosterHealth::from_critical_count(1), RosterHealth::Good);
        assert_eq!(RosterHealth::from_critical_count(2), RosterHealth::Good);
        assert_eq!(RosterHealth::from_critical_count(3), RosterHealth::Poor);
    }

    #[test]
    fn test_actions_in_priority_order_and_capped() {
        let poor_list: Vec<PoorPerformer> = vec![
            poor("p1", 3),
            poor("p2", 2),
            poor("p3", 2),
            poor("p4", 2),
            poor("p5", 1),
        ];
        let drops = vec![dropping("d1", 20_000), dropping("d2", 500), dropping("d3", 11_000)];
        let adds: Vec<AvailablePlayer> =
            (0..5).map(|i| available(&format!("a{i}"), 1_000)).collect();

        let plan = build_gameplan(&poor_list, &drops, &adds);

        let ids: Vec<&str> = plan.actions.iter().map(|a| a.player().id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3", "d1", "d2", "a0", "a1", "a2"]);
        assert_eq!(plan.actions.iter().filter(|a| a.is_drop()).count(), 5);
        assert_eq!(
            plan.actions[0].reason(),
            &ActionReason::Underperforming { poor_weeks: 3 }
        );
        assert_eq!(plan.critical_count, 4);
        assert_eq!(plan.roster_health, RosterHealth::Poor);
        assert_eq!(plan.trend_alerts, 2);
    }

    #[test]
    fn test_empty_inputs_give_clean_plan() {
        let plan = build_gameplan(&[], &[], &[]);
        assert!(plan.actions.is_empty());
        assert_eq!(plan.roster_health, RosterHealth::Excellent);
        assert_eq!(plan.trend_alerts, 0);
    }

    #[test]
    fn test_serializes_with_action_tag() {
        let plan = build_gameplan(&[], &[], &[available("a0", 42)]);
        let value = serde_json::to_value(&plan.actions[0]).unwrap();
        assert_eq!(value["action"], "add");
        assert_eq!(value["reason"], "trending_up");
        assert_eq!(value["add_count"], 42);
    }
}
