//! Player valuation heuristic.
//!
//! A player's value is a fixed-weight sum of positional scarcity, recent
//! scoring, net trending adds and youth, scaled down by an injury penalty:
//!
//! ```text
//! value = (base + points / 20 + max(0, (adds - drops) / 1e6) + max(0, (32 - age) / 10))
//!         * (1 - penalty)
//! ```
//!
//! Every input has a default, so scoring never fails. The result is clamped
//! at zero.

use serde::Serialize;
use std::collections::HashMap;

use crate::{InjuryStatus, PlayerId, Position};


/// Age assumed when the player database has none.
pub const DEFAULT_AGE: u32 = 27;

/// Weekly fantasy points that map to a performance value of 1.0.
pub const POINTS_CEILING: f64 = 20.0;

/// Net trending adds that map to a trending value of 1.0.
pub const TREND_SCALE: f64 = 1_000_000.0;

/// Age at which the youth bonus reaches zero.
pub const AGE_CUTOFF: u32 = 32;

/// A player as seen by the analyses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    /// First and last name joined; empty when the database has neither.
    pub name: String,
    /// `None` for positions this tool does not value (IDP, OL, unknown).
    pub position: Option<Position>,
    pub team: Option<String>,
    pub age: Option<u32>,
    pub injury_status: InjuryStatus,
    pub injury_body_part: Option<String>,
    /// Whether the player is on an active NFL roster.
    pub active: bool,
}

impl Player {
    pub fn new(id: impl Into<String>, position: Option<Position>) -> Self {
        Self {
            id: PlayerId::new(id),
            name: String::new(),
            position,
            team: None,
            age: None,
            injury_status: InjuryStatus::Healthy,
            injury_body_part: None,
            active: true,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_injury(mut self, status: InjuryStatus) -> Self {
        self.injury_status = status;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Name for display, falling back to the id.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.id.as_str()
        } else {
            &self.name
        }
    }

    pub fn position_label(&self) -> String {
        self.position
            .map(|p| p.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn team_label(&self) -> &str {
        self.team.as_deref().unwrap_or("N/A")
    }
}

/// A non-negative player value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct ValueScore(f64);

impl ValueScore {
    /// Wrap a raw value, clamping negatives (and NaN) to zero.
    pub fn new(value: f64) -> Self {
        Self(value.max(0.0))
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

/// Positional scarcity weight. Unknown positions weigh like a QB.
pub fn position_base_value(position: Option<Position>) -> f64 {
    match position {
        Some(Position::QB) => 1.0,
        Some(Position::RB) => 1.5,
        Some(Position::WR) => 1.3,
        Some(Position::TE) => 1.2,
        Some(Position::K) => 0.3,
        Some(Position::DEF) => 0.4,
        None => 1.0,
    }
}

/// Recent scoring normalized against a 20-point week. Not capped.
pub fn performance_value(recent_points: f64) -> f64 {
    recent_points / POINTS_CEILING
}

/// Net platform adds, only rewarded when positive.
pub fn trending_value(trend_adds: u64, trend_drops: u64) -> f64 {
    ((trend_adds as f64 - trend_drops as f64) / TREND_SCALE).max(0.0)
}

/// Youth bonus, zero from age 32 on.
pub fn age_factor(age: Option<u32>) -> f64 {
    let age = age.unwrap_or(DEFAULT_AGE);
    ((AGE_CUTOFF as f64 - age as f64) / 10.0).max(0.0)
}

/// Fraction of value lost to the injury designation.
pub fn injury_penalty(status: InjuryStatus) -> f64 {
    match status {
        InjuryStatus::Out | InjuryStatus::InjuredReserve | InjuryStatus::Suspended => 0.5,
        InjuryStatus::Doubtful | InjuryStatus::Questionable => 0.2,
        InjuryStatus::Healthy
        | InjuryStatus::Probable
        | InjuryStatus::Limited
        | InjuryStatus::Unknown => 0.0,
    }
}

/// Score one player from its static attributes and dynamic signals.
pub fn score(player: &Player, recent_points: f64, trend_adds: u64, trend_drops: u64) -> ValueScore {
    let raw = position_base_value(player.position)
        + performance_value(recent_points)
        + trending_value(trend_adds, trend_drops)
        + age_factor(player.age);

    ValueScore::new(raw * (1.0 - injury_penalty(player.injury_status)))
}

/// Recent points and trending counts for the evaluation window.
///
/// Lookups for players missing from a map read as zero.
#[derive(Debug, Clone, Default)]
pub struct ValuationContext {
    pub recent_points: HashMap<PlayerId, f64>,
    pub trend_adds: HashMap<PlayerId, u64>,
    pub trend_drops: HashMap<PlayerId, u64>,
}

impl ValuationContext {
    pub fn new(
        recent_points: HashMap<PlayerId, f64>,
        trend_adds: HashMap<PlayerId, u64>,
        trend_drops: HashMap<PlayerId, u64>,
    ) -> Self {
        Self {
            recent_points,
            trend_adds,
            trend_drops,
        }
    }

    pub fn recent_points_for(&self, id: &PlayerId) -> f64 {
        self.recent_points.get(id).copied().unwrap_or(0.0)
    }

    pub fn adds_for(&self, id: &PlayerId) -> u64 {
        self.trend_adds.get(id).copied().unwrap_or(0)
    }

    pub fn drops_for(&self, id: &PlayerId) -> u64 {
        self.trend_drops.get(id).copied().unwrap_or(0)
    }

    pub fn score_player(&self, player: &Player) -> ValueScore {
        score(
            player,
            self.recent_points_for(&player.id),
            self.adds_for(&player.id),
            self.drops_for(&player.id),
        )
    }
}
