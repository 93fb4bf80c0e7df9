//! ID types for Sleeper Fantasy Football.
//!
//! Sleeper hands out every identifier as a string (player ids are numeric
//! strings for people and team abbreviations for defenses), so the wrappers
//! here are string newtypes rather than integers.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Sleeper player IDs.
///
/// # Examples
///
/// ```rust
/// use sleeper_ffl::PlayerId;
///
/// let id = PlayerId::new("4046");
/// assert_eq!(id.as_str(), "4046");
/// assert_eq!(id.to_string(), "4046");
///
/// // Team defenses use the team abbreviation
/// let def = PlayerId::new("BUF");
/// assert_eq!(def.as_str(), "BUF");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s.trim()))
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Type-safe wrapper for Sleeper user IDs (roster `owner_id`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for Sleeper league IDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(pub String);

impl LeagueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_from_str_trims() {
        let id: PlayerId = " 4046 ".parse().unwrap();
        assert_eq!(id, PlayerId::new("4046"));
    }

    #[test]
    fn test_player_id_serializes_as_plain_string() {
        let id = PlayerId::new("6794");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"6794\"");

        let back: PlayerId = serde_json::from_str("\"6794\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_league_id_display() {
        let id = LeagueId::new("1048294372190912512");
        assert_eq!(format!("{}", id), "1048294372190912512");
    }

    #[test]
    fn test_user_id_as_str() {
        let id = UserId::new("73628184");
        assert_eq!(id.as_str(), "73628184");
    }
}
