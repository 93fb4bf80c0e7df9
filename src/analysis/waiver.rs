//! Waiver-wire analysis: who is available, who is leaving your roster.

use serde::Serialize;
use std::collections::HashSet;

use crate::{
    analysis::{OwnedRoster, Player, PlayerDirectory},
    sleeper::types::TrendingPlayer,
    PlayerId, Position,
};

/// Trending players considered for swap suggestions.
pub const SWAP_POOL_SIZE: usize = 15;
/// Options listed per position.
pub const SWAP_OPTIONS_PER_POSITION: usize = 3;
/// Own players listed per position for comparison.
pub const SWAP_MY_PLAYERS_SHOWN: usize = 2;

/// A trending add nobody in the league has rostered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailablePlayer {
    pub player: Player,
    pub trend_count: u64,
}

/// One of my players that managers are dropping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroppingPlayer {
    pub player: Player,
    pub drop_count: u64,
}

/// Waiver options at one position next to what I already have there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionSwap {
    pub position: Option<Position>,
    pub options: Vec<AvailablePlayer>,
    pub my_players: Vec<Player>,
}

/// Every player id on any roster in the league.
pub fn rostered_ids(rosters: &[OwnedRoster]) -> HashSet<PlayerId> {
    rosters
        .iter()
        .flat_map(|roster| roster.player_ids.iter().cloned())
        .collect()
}

/// Trending adds that are unrostered, known and active, in trending order.
pub fn find_available_players(
    rostered: &HashSet<PlayerId>,
    directory: &PlayerDirectory,
    trending_adds: &[TrendingPlayer],
) -> Vec<AvailablePlayer> {
    trending_adds
        .iter()
        .filter(|trend| !rostered.contains(&trend.player_id))
        .filter_map(|trend| {
            directory
                .get(&trend.player_id)
                .filter(|player| player.active)
                .map(|player| AvailablePlayer {
                    player: player.clone(),
                    trend_count: trend.count,
                })
        })
        .collect()
}

/// My players that show up in the trending drops, in roster order.
pub fn players_trending_down(
    my_player_ids: &[PlayerId],
    directory: &PlayerDirectory,
    trending_drops: &[TrendingPlayer],
) -> Vec<DroppingPlayer> {
    my_player_ids
        .iter()
        .filter_map(|id| {
            let trend = trending_drops.iter().find(|t| &t.player_id == id)?;
            let player = directory.get(id)?;
            Some(DroppingPlayer {
                player: player.clone(),
                drop_count: trend.count,
            })
        })
        .collect()
}

/// Group the top trending available players by position.
///
/// Positions appear in the order they are first seen in `available`.
pub fn swap_suggestions(
    my_player_ids: &[PlayerId],
    directory: &PlayerDirectory,
    available: &[AvailablePlayer],
) -> Vec<PositionSwap> {
    let mut swaps: Vec<PositionSwap> = Vec::new();

    for candidate in available.iter().take(SWAP_POOL_SIZE) {
        let position = candidate.player.position;
        match swaps.iter_mut().find(|s| s.position == position) {
            Some(swap) => {
                if swap.options.len() < SWAP_OPTIONS_PER_POSITION {
                    swap.options.push(candidate.clone());
                }
            }
            None => swaps.push(PositionSwap {
                position,
                options: vec![candidate.clone()],
                my_players: Vec::new(),
            }),
        }
    }

    for swap in &mut swaps {
        swap.my_players = my_player_ids
            .iter()
            .filter_map(|id| directory.get(id))
            .filter(|player| player.position == swap.position)
            .take(SWAP_MY_PLAYERS_SHOWN)
            .cloned()
            .collect();
    }

    swaps
}
