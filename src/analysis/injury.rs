//! Injury risk buckets for roster and team injury reports.

use serde::Serialize;
use std::fmt;

use crate::{
    analysis::{Player, PlayerDirectory},
    InjuryStatus,
};

/// How worried to be about an injury designation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InjuryRisk {
    /// Out, IR, doubtful or suspended.
    High,
    /// Questionable, limited or an unrecognized designation.
    Medium,
    /// Probable or healthy.
    Monitor,
}

impl InjuryStatus {
    pub fn risk(&self) -> InjuryRisk {
        match self {
            InjuryStatus::Out
            | InjuryStatus::InjuredReserve
            | InjuryStatus::Doubtful
            | InjuryStatus::Suspended => InjuryRisk::High,
            InjuryStatus::Questionable | InjuryStatus::Limited | InjuryStatus::Unknown => {
                InjuryRisk::Medium
            }
            InjuryStatus::Probable | InjuryStatus::Healthy => InjuryRisk::Monitor,
        }
    }
}

impl fmt::Display for InjuryRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InjuryRisk::High => "HIGH RISK",
            InjuryRisk::Medium => "MEDIUM RISK",
            InjuryRisk::Monitor => "MONITOR",
        };
        write!(f, "{}", s)
    }
}

/// Injured players split by risk, each bucket in input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InjuryReport {
    pub high_risk: Vec<Player>,
    pub medium_risk: Vec<Player>,
    pub monitor: Vec<Player>,
}

impl InjuryReport {
    pub fn is_empty(&self) -> bool {
        self.high_risk.is_empty() && self.medium_risk.is_empty() && self.monitor.is_empty()
    }

    pub fn len(&self) -> usize {
        self.high_risk.len() + self.medium_risk.len() + self.monitor.len()
    }
}

/// Bucket every player carrying an injury designation.
pub fn injury_report<'a>(players: impl IntoIterator<Item = &'a Player>) -> InjuryReport {
    let mut report = InjuryReport::default();

    for player in players {
        if player.injury_status.is_healthy() {
            continue;
        }
        let bucket = match player.injury_status.risk() {
            InjuryRisk::High => &mut report.high_risk,
            InjuryRisk::Medium => &mut report.medium_risk,
            InjuryRisk::Monitor => &mut report.monitor,
        };
        bucket.push(player.clone());
    }

    report
}

/// Injured players on one NFL team, sorted by name.
///
/// Useful for spotting handcuffs when a starter goes down.
pub fn team_injuries(directory: &PlayerDirectory, team: &str) -> Vec<Player> {
    let mut injured: Vec<Player> = directory
        .values()
        .filter(|p| p.team.as_deref().is_some_and(|t| t.eq_ignore_ascii_case(team)))
        .filter(|p| !p.injury_status.is_healthy())
        .cloned()
        .collect();

    injured.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    injured
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn player(id: &str, status: InjuryStatus) -> Player {
        Player::new(id, Some(Position::WR))
            .with_name(format!("Player {id}"))
            .with_team("NYJ")
            .with_injury(status)
    }

    #[test]
    fn test_risk_buckets() {
        assert_eq!(InjuryStatus::Out.risk(), InjuryRisk::High);
        assert_eq!(InjuryStatus::InjuredReserve.risk(), InjuryRisk::High);
        assert_eq!(InjuryStatus::Doubtful.risk(), InjuryRisk::High);
        assert_eq!(InjuryStatus::Suspended.risk(), InjuryRisk::High);
        assert_eq!(InjuryStatus::Questionable.risk(), InjuryRisk::Medium);
        assert_eq!(InjuryStatus::Limited.risk(), InjuryRisk::Medium);
        assert_eq!(InjuryStatus::Unknown.risk(), InjuryRisk::Medium);
        assert_eq!(InjuryStatus::Probable.risk(), InjuryRisk::Monitor);
        assert_eq!(InjuryStatus::Healthy.risk(), InjuryRisk::Monitor);
    }

    #[test]
    fn test_report_skips_healthy_and_keeps_order() {
        let players = vec![
            player("1", InjuryStatus::Healthy),
            player("2", InjuryStatus::Questionable),
            player("3", InjuryStatus::Out),
            player("4", InjuryStatus::Unknown),
            player("5", InjuryStatus::Probable),
            player("6", InjuryStatus::InjuredReserve),
        ];

        let report = injury_report(&players);

        let ids = |bucket: &[Player]| -> Vec<String> {
            bucket.iter().map(|p| p.id.to_string()).collect()
        };
        assert_eq!(ids(&report.high_risk), vec!["3", "6"]);
        assert_eq!(ids(&report.medium_risk), vec!["2", "4"]);
        assert_eq!(ids(&report.monitor), vec!["5"]);
        assert_eq!(report.len(), 5);
    }

    #[test]
    fn test_report_empty_for_healthy_roster() {
        let players = vec![player("1", InjuryStatus::Healthy)];
        assert!(injury_report(&players).is_empty());
    }

    #[test]
    fn test_team_injuries_filters_team_case_insensitively() {
        let mut directory = PlayerDirectory::new();
        for p in [
            player("b", InjuryStatus::Out),
            player("a", InjuryStatus::Questionable),
            player("c", InjuryStatus::Healthy),
            player("d", InjuryStatus::Out).with_team("BUF"),
        ] {
            directory.insert(p.id.clone(), p);
        }

        let injured = team_injuries(&directory, "nyj");
        let names: Vec<&str> = injured.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Player a", "Player b"]);
    }
}
