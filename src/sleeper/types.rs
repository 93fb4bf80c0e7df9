use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::{
    analysis::{OwnedRoster, Player, PlayerDirectory},
    InjuryStatus, LeagueId, PlayerId, Position, UserId, Week,
};

/// Stat keys holding fantasy points, in order of preference.
pub const POINTS_KEYS: [&str; 3] = ["pts_ppr", "pts_std", "pts_half_ppr"];

/// `GET /user/{username}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub user_id: UserId,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// One entry of `GET /user/{user_id}/leagues/nfl/{season}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct League {
    pub league_id: LeagueId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub total_rosters: Option<u32>,
    #[serde(default)]
    pub scoring_settings: Option<HashMap<String, f64>>,
}

impl League {
    /// Scoring format derived from the points awarded per reception.
    pub fn scoring_type(&self) -> &'static str {
        let rec = self
            .scoring_settings
            .as_ref()
            .and_then(|s| s.get("rec").copied())
            .unwrap_or(0.0);

        if rec >= 1.0 {
            "ppr"
        } else if rec > 0.0 {
            "half_ppr"
        } else {
            "std"
        }
    }
}

/// One entry of `GET /league/{league_id}/rosters`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Roster {
    pub roster_id: u32,
    #[serde(default)]
    pub owner_id: Option<UserId>,
    /// `null` for empty rosters.
    #[serde(default)]
    pub players: Option<Vec<PlayerId>>,
}

impl Roster {
    pub fn player_ids(&self) -> &[PlayerId] {
        self.players.as_deref().unwrap_or(&[])
    }

    pub fn to_owned_roster(&self) -> OwnedRoster {
        OwnedRoster::new(self.owner_id.clone(), self.player_ids().to_vec())
    }
}

/// One value of `GET /players/nfl`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NflPlayer {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    /// Occasionally `null` in the database.
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub injury_status: Option<String>,
    #[serde(default)]
    pub injury_body_part: Option<String>,
}

impl NflPlayer {
    /// First and last name joined and trimmed.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }

    pub fn to_player(&self, id: &PlayerId) -> Player {
        Player {
            id: id.clone(),
            name: self.full_name(),
            position: self
                .position
                .as_deref()
                .and_then(|p| p.parse::<Position>().ok()),
            team: self.team.clone(),
            age: self.age,
            injury_status: InjuryStatus::parse(self.injury_status.as_deref()),
            injury_body_part: self.injury_body_part.clone().filter(|s| !s.is_empty()),
            active: self.active.unwrap_or(false),
        }
    }
}

/// The full player database keyed by player id.
pub type PlayerDatabase = HashMap<PlayerId, NflPlayer>;

/// Convert the raw database into analysis records.
pub fn build_directory(db: &PlayerDatabase) -> PlayerDirectory {
    db.iter()
        .map(|(id, raw)| (id.clone(), raw.to_player(id)))
        .collect()
}

/// Trending direction for `GET /players/nfl/trending/{type}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendType {
    Add,
    Drop,
}

impl TrendType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendType::Add => "add",
            TrendType::Drop => "drop",
        }
    }
}

/// One entry of the trending endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrendingPlayer {
    pub player_id: PlayerId,
    /// Managers who added (or dropped) the player in the lookback window.
    #[serde(default)]
    pub count: u64,
}

/// Index trending entries by player id.
pub fn trend_counts(trending: &[TrendingPlayer]) -> HashMap<PlayerId, u64> {
    trending
        .iter()
        .map(|t| (t.player_id.clone(), t.count))
        .collect()
}

/// `GET /state/nfl`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NflState {
    #[serde(default)]
    pub week: u16,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub season_type: Option<String>,
}

impl NflState {
    /// Current week, never below week 1.
    pub fn current_week(&self) -> Week {
        Week::new(self.week.max(1))
    }
}

/// `GET /stats/nfl/regular/{season}/{week}`: stat maps keyed by player id.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct WeekStats(pub HashMap<PlayerId, HashMap<String, Value>>);

impl WeekStats {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, id: &PlayerId) -> bool {
        self.0.contains_key(id)
    }

    /// Fantasy points for a player, `None` when the player has no stat line.
    pub fn points_for(&self, id: &PlayerId) -> Option<f64> {
        self.0.get(id).map(fantasy_points)
    }

    /// Fantasy points for every player with a stat line.
    pub fn points_by_player(&self) -> HashMap<PlayerId, f64> {
        self.0
            .iter()
            .map(|(id, stats)| (id.clone(), fantasy_points(stats)))
            .collect()
    }
}

/// Read fantasy points from a stat line: PPR, then standard, then half-PPR.
pub fn fantasy_points(stats: &HashMap<String, Value>) -> f64 {
    POINTS_KEYS
        .iter()
        .find_map(|key| stats.get(*key).and_then(Value::as_f64))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_name_trims_missing_parts() {
        let p = NflPlayer {
            first_name: Some("Josh".to_string()),
            last_name: None,
            ..Default::default()
        };
        assert_eq!(p.full_name(), "Josh");
        assert_eq!(NflPlayer::default().full_name(), "");
    }

    #[test]
    fn test_to_player_maps_fields() {
        let raw: NflPlayer = serde_json::from_value(json!({
            "first_name": "Breece",
            "last_name": "Hall",
            "position": "RB",
            "team": "NYJ",
            "age": 24,
            "active": true,
            "injury_status": "Questionable",
            "injury_body_part": "Knee"
        }))
        .unwrap();

        let player = raw.to_player(&PlayerId::new("8155"));
        assert_eq!(player.name, "Breece Hall");
        assert_eq!(player.position, Some(Position::RB));
        assert_eq!(player.team.as_deref(), Some("NYJ"));
        assert_eq!(player.age, Some(24));
        assert_eq!(player.injury_status, InjuryStatus::Questionable);
        assert_eq!(player.injury_body_part.as_deref(), Some("Knee"));
        assert!(player.active);
    }

    #[test]
    fn test_to_player_tolerates_unvalued_position() {
        let raw: NflPlayer = serde_json::from_value(json!({
            "first_name": "Fred",
            "last_name": "Warner",
            "position": "LB",
            "age": null
        }))
        .unwrap();

        let player = raw.to_player(&PlayerId::new("4"));
        assert_eq!(player.position, None);
        assert_eq!(player.age, None);
        assert!(!player.active);
        assert_eq!(player.injury_status, InjuryStatus::Healthy);
    }

    #[test]
    fn test_fantasy_points_preference_order() {
        let stats: HashMap<String, Value> =
            serde_json::from_value(json!({"pts_std": 9.0, "pts_ppr": 14.5})).unwrap();
        assert_eq!(fantasy_points(&stats), 14.5);

        let stats: HashMap<String, Value> =
            serde_json::from_value(json!({"pts_half_ppr": 7.5, "pts_std": 6.0})).unwrap();
        assert_eq!(fantasy_points(&stats), 6.0);

        let stats: HashMap<String, Value> =
            serde_json::from_value(json!({"pts_half_ppr": 7.5})).unwrap();
        assert_eq!(fantasy_points(&stats), 7.5);

        let stats: HashMap<String, Value> =
            serde_json::from_value(json!({"rush_yd": 80.0})).unwrap();
        assert_eq!(fantasy_points(&stats), 0.0);
    }

    #[test]
    fn test_league_scoring_type() {
        let league: League = serde_json::from_value(json!({
            "league_id": "1",
            "scoring_settings": {"rec": 0.5}
        }))
        .unwrap();
        assert_eq!(league.scoring_type(), "half_ppr");

        let league: League = serde_json::from_value(json!({"league_id": "2"})).unwrap();
        assert_eq!(league.scoring_type(), "std");
    }

    #[test]
    fn test_nfl_state_current_week_floor() {
        let state: NflState = serde_json::from_value(json!({"week": 0, "season": "2025"})).unwrap();
        assert_eq!(state.current_week(), Week::new(1));
    }
}
