//! Injury designations reported on Sleeper player records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A player's injury designation.
///
/// Parsing never fails: designations this tool does not recognize
/// (`PUP`, `NA`, `COV`, ...) become [`InjuryStatus::Unknown`].
///
/// # Examples
///
/// ```rust
/// use sleeper_ffl::InjuryStatus;
///
/// assert_eq!(InjuryStatus::parse(Some("Questionable")), InjuryStatus::Questionable);
/// assert_eq!(InjuryStatus::parse(Some("Sus")), InjuryStatus::Suspended);
/// assert_eq!(InjuryStatus::parse(None), InjuryStatus::Healthy);
/// assert_eq!(InjuryStatus::parse(Some("PUP")), InjuryStatus::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InjuryStatus {
    #[default]
    Healthy,
    Probable,
    Questionable,
    Limited,
    Doubtful,
    Out,
    InjuredReserve,
    Suspended,
    Unknown,
}

impl InjuryStatus {
    /// Parse the raw `injury_status` string from a Sleeper player record.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return InjuryStatus::Healthy;
        };

        match raw.trim().to_lowercase().as_str() {
            "" | "healthy" => InjuryStatus::Healthy,
            "probable" | "gtd" => InjuryStatus::Probable,
            "questionable" => InjuryStatus::Questionable,
            "limited" => InjuryStatus::Limited,
            "doubtful" => InjuryStatus::Doubtful,
            "out" => InjuryStatus::Out,
            "ir" | "injured reserve" => InjuryStatus::InjuredReserve,
            "sus" | "suspended" => InjuryStatus::Suspended,
            _ => InjuryStatus::Unknown,
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, InjuryStatus::Healthy)
    }
}

impl fmt::Display for InjuryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InjuryStatus::Healthy => "Healthy",
            InjuryStatus::Probable => "Probable",
            InjuryStatus::Questionable => "Questionable",
            InjuryStatus::Limited => "Limited",
            InjuryStatus::Doubtful => "Doubtful",
            InjuryStatus::Out => "Out",
            InjuryStatus::InjuredReserve => "IR",
            InjuryStatus::Suspended => "Suspended",
            InjuryStatus::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}
