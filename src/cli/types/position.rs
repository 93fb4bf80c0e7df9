//! Fantasy football position types.

use crate::error::SleeperError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fantasy football player positions as reported by Sleeper.
///
/// # Examples
///
/// ```rust
/// use sleeper_ffl::Position;
///
/// let rb: Position = "rb".parse().unwrap();
/// assert_eq!(rb, Position::RB);
/// assert_eq!("D/ST".parse::<Position>().unwrap(), Position::DEF);
/// assert_eq!(Position::DEF.to_string(), "DEF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
}

impl Position {
    /// All positions in roster display order.
    pub const ALL: [Position; 6] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::K,
        Position::DEF,
    ];
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" => Ok(Position::K),
            "DEF" | "D/ST" | "DST" => Ok(Position::DEF),
            _ => Err(SleeperError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
