//! Trade packages, trade grading and trade-target search.

use serde::Serialize;
use std::fmt;

use crate::{
    analysis::{
        valuation::{Player, ValuationContext, ValueScore},
        OwnedRoster, PlayerDirectory,
    },
    error::{Result, SleeperError},
    Position, UserId,
};


/// Maximum number of packages returned by [`suggest_packages`].
pub const MAX_PACKAGES: usize = 5;

/// Maximum number of trade targets returned by [`find_trade_targets`].
pub const MAX_TARGETS: usize = 20;

/// Targets must be worth more than this to be listed.
pub const TARGET_MIN_VALUE: f64 = 1.0;

const ACCEPTABLE_LOW: f64 = 0.8;
const ACCEPTABLE_HIGH: f64 = 1.2;
const FAIR_LOW: f64 = 0.9;
const FAIR_HIGH: f64 = 1.1;

/// How close a package's value is to the target's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Fairness {
    Fair,
    Acceptable,
    Unfair,
}

impl Fairness {
    /// Classify a package-to-target value ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        if (FAIR_LOW..=FAIR_HIGH).contains(&ratio) {
            Fairness::Fair
        } else if (ACCEPTABLE_LOW..=ACCEPTABLE_HIGH).contains(&ratio) {
            Fairness::Acceptable
        } else {
            Fairness::Unfair
        }
    }
}

impl fmt::Display for Fairness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Fairness::Fair => "Fair",
            Fairness::Acceptable => "Acceptable",
            Fairness::Unfair => "Unfair",
        };
        write!(f, "{}", s)
    }
}

/// A player paired with its value score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPlayer {
    pub player: Player,
    pub value: ValueScore,
}

/// One or two players offered for a target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradePackage {
    pub players: Vec<ScoredPlayer>,
    pub total_value: f64,
    pub fairness: Fairness,
    /// Absolute difference between `total_value` and the target value.
    pub distance: f64,
}

impl TradePackage {
    fn new(players: Vec<ScoredPlayer>, fairness: Fairness, target_value: f64) -> Self {
        let total_value = players.iter().map(|p| p.value.as_f64()).sum::<f64>();
        Self {
            players,
            total_value,
            fairness,
            distance: (total_value - target_value).abs(),
        }
    }
}

/// Score every player and sort by value, highest first.
///
/// The sort is stable: equal values keep their input order.
pub fn score_roster(players: &[Player], ctx: &ValuationContext) -> Vec<ScoredPlayer> {
    let mut scored: Vec<ScoredPlayer> = players
        .iter()
        .map(|player| ScoredPlayer {
            player: player.clone(),
            value: ctx.score_player(player),
        })
        .collect();

    scored.sort_by(|a, b| b.value.as_f64().total_cmp(&a.value.as_f64()));
    scored
}

/// Find one- and two-player packages worth 80-120% of `target_value`.
///
/// Packages are ranked Fair before Acceptable, then by closeness to the
/// target, and at most [`MAX_PACKAGES`] are returned. Single players inside
/// the band are always labeled Fair.
///
/// # Errors
///
/// [`SleeperError::InvalidTarget`] when `target_value` is not positive.
pub fn suggest_packages(
    target_value: f64,
    candidates: &[Player],
    ctx: &ValuationContext,
) -> Result<Vec<TradePackage>> {
    if target_value.is_nan() || target_value <= 0.0 {
        return Err(SleeperError::InvalidTarget {
            target: target_value,
        });
    }

    let scored = score_roster(candidates, ctx);
    let in_band = |ratio: f64| (ACCEPTABLE_LOW..=ACCEPTABLE_HIGH).contains(&ratio);

    let mut packages = Vec::new();

    for candidate in &scored {
        if in_band(candidate.value.as_f64() / target_value) {
            packages.push(TradePackage::new(
                vec![candidate.clone()],
                Fairness::Fair,
                target_value,
            ));
        }
    }

    for (i, first) in scored.iter().enumerate() {
        for second in &scored[i + 1..] {
            let combined = first.value.as_f64() + second.value.as_f64();
            let ratio = combined / target_value;
            if in_band(ratio) {
                packages.push(TradePackage::new(
                    vec![first.clone(), second.clone()],
                    Fairness::from_ratio(ratio),
                    target_value,
                ));
            }
        }
    }

    packages.sort_by(|a, b| {
        (a.fairness != Fairness::Fair)
            .cmp(&(b.fairness != Fairness::Fair))
            .then_with(|| a.distance.total_cmp(&b.distance))
    });
    packages.truncate(MAX_PACKAGES);

    Ok(packages)
}

/// Packages from `roster` for `target`, valued with `ctx`.
///
/// The target is never offered for itself, so asking about one of your own
/// players only pairs up the rest of the roster.
pub fn packages_for_target(
    target: &Player,
    roster: &[Player],
    ctx: &ValuationContext,
) -> Result<Vec<TradePackage>> {
    let candidates: Vec<Player> = roster
        .iter()
        .filter(|p| p.id != target.id)
        .cloned()
        .collect();
    suggest_packages(ctx.score_player(target).as_f64(), &candidates, ctx)
}

/// Letter grade for a proposed trade, from the receiving side's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TradeGrade {
    A,
    BPlus,
    B,
    C,
    D,
}

impl TradeGrade {
    /// Grade the value gained (`get - give`).
    pub fn from_difference(difference: f64) -> Self {
        if difference > 0.5 {
            TradeGrade::A
        } else if difference > 0.2 {
            TradeGrade::BPlus
        } else if difference > -0.2 {
            TradeGrade::B
        } else if difference > -0.5 {
            TradeGrade::C
        } else {
            TradeGrade::D
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            TradeGrade::A => "ACCEPT - Great value!",
            TradeGrade::BPlus => "ACCEPT - Good trade",
            TradeGrade::B => "NEUTRAL - Fair trade",
            TradeGrade::C => "DECLINE - Slightly unfavorable",
            TradeGrade::D => "DECLINE - Bad trade for you",
        }
    }
}

impl fmt::Display for TradeGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TradeGrade::A => "A",
            TradeGrade::BPlus => "B+",
            TradeGrade::B => "B",
            TradeGrade::C => "C",
            TradeGrade::D => "D",
        };
        write!(f, "{}", s)
    }
}

/// Both sides of a proposed trade, valued and graded.
#[derive(Debug, Clone, Serialize)]
pub struct TradeAnalysis {
    pub give: Vec<ScoredPlayer>,
    pub get: Vec<ScoredPlayer>,
    pub give_value: f64,
    pub get_value: f64,
    pub value_difference: f64,
    pub grade: TradeGrade,
    pub recommendation: &'static str,
}

/// Value a trade where you send `give` and receive `get`.
pub fn analyze_trade(give: &[Player], get: &[Player], ctx: &ValuationContext) -> TradeAnalysis {
    let value_side = |players: &[Player]| -> Vec<ScoredPlayer> {
        players
            .iter()
            .map(|player| ScoredPlayer {
                player: player.clone(),
                value: ctx.score_player(player),
            })
            .collect()
    };

    let give = value_side(give);
    let get = value_side(get);
    let give_value = give.iter().map(|p| p.value.as_f64()).sum::<f64>();
    let get_value = get.iter().map(|p| p.value.as_f64()).sum::<f64>();
    let value_difference = get_value - give_value;
    let grade = TradeGrade::from_difference(value_difference);

    TradeAnalysis {
        give,
        get,
        give_value,
        get_value,
        value_difference,
        grade,
        recommendation: grade.recommendation(),
    }
}

/// A player on another team worth pursuing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeTarget {
    pub player: Player,
    pub value: ValueScore,
    pub owner_id: Option<UserId>,
}

/// Rank players on other teams by value.
///
/// Skips rosters owned by `my_user_id`, ids missing from the directory and
/// players worth [`TARGET_MIN_VALUE`] or less. When `position` is given only
/// that position is considered.
pub fn find_trade_targets(
    rosters: &[OwnedRoster],
    my_user_id: &UserId,
    directory: &PlayerDirectory,
    ctx: &ValuationContext,
    position: Option<Position>,
) -> Vec<TradeTarget> {
    let mut targets: Vec<TradeTarget> = rosters
        .iter()
        .filter(|roster| !roster.is_owned_by(my_user_id))
        .flat_map(|roster| {
            roster
                .player_ids
                .iter()
                .filter_map(|id| directory.get(id))
                .filter(|player| position.is_none() || player.position == position)
                .map(|player| TradeTarget {
                    player: player.clone(),
                    value: ctx.score_player(player),
                    owner_id: roster.owner_id.clone(),
                })
        })
        .filter(|target| target.value.as_f64() > TARGET_MIN_VALUE)
        .collect();

    targets.sort_by(|a, b| b.value.as_f64().total_cmp(&a.value.as_f64()));
    targets.truncate(MAX_TARGETS);
    targets
}
