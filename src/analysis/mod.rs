//! Deterministic analyses over already-fetched league data.
//!
//! Nothing in this module performs I/O. Commands fetch rosters, the player
//! database, weekly stats and trending counts through the Sleeper client and
//! hand plain data to these functions.
//!
//! - `valuation`: single-player value score
//! - `trade`: trade packages, trade grading and trade targets
//! - `injury`: injury risk buckets
//! - `performance`: underperformers and weekly point series
//! - `waiver`: available trending players and swap suggestions
//! - `gameplan`: weekly action list built from the analyses above

pub mod gameplan;
pub mod injury;
pub mod performance;
pub mod trade;
pub mod valuation;
pub mod waiver;

use std::collections::HashMap;

use crate::{PlayerId, UserId};

pub use valuation::{Player, ValuationContext, ValueScore};

/// Player records keyed by Sleeper id.
pub type PlayerDirectory = HashMap<PlayerId, Player>;

/// The player ids held by one fantasy team.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OwnedRoster {
    pub owner_id: Option<UserId>,
    pub player_ids: Vec<PlayerId>,
}

impl OwnedRoster {
    pub fn new(owner_id: Option<UserId>, player_ids: Vec<PlayerId>) -> Self {
        Self {
            owner_id,
            player_ids,
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.owner_id.as_ref() == Some(user_id)
    }
}

/// Resolve roster ids against the directory, dropping ids it does not know.
pub fn resolve_players<'a>(ids: &[PlayerId], directory: &'a PlayerDirectory) -> Vec<&'a Player> {
    ids.iter().filter_map(|id| directory.get(id)).collect()
}
