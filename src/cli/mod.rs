//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{LeagueId, PlayerId, Position, Season, Week};

/// Arguments shared by every command that reads a league
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Sleeper username (or set `SLEEPER_USERNAME`). A leading `@` is ignored.
    #[clap(long, short)]
    pub username: Option<String>,

    /// League ID (or set `SLEEPER_LEAGUE_ID`). Defaults to your first league.
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Season year (e.g. 2025).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Evaluation week. Defaults to the current NFL week.
    #[clap(long, short)]
    pub week: Option<Week>,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,

    /// Ignore cached player and stats data.
    #[clap(long)]
    pub refresh: bool,

    /// Pause before each API request, in milliseconds (default 100).
    #[clap(long)]
    pub api_delay_ms: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Top trending pickups available in your league, and your players being dropped
    Quick {
        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Roster by position, drop alerts, recent poor performers and swap suggestions
    Full {
        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Players on your roster scoring below a points threshold
    Performance {
        #[clap(flatten)]
        common: CommonArgs,

        /// Number of weeks to look back, ending at the evaluation week.
        #[clap(long, default_value_t = 3)]
        weeks_back: u16,

        /// Weekly points below this count as a poor week.
        #[clap(long, default_value_t = 8.0)]
        threshold: f64,

        /// Also print every player's points week by week.
        #[clap(long)]
        series: bool,
    },

    /// Prioritized drops and adds for the coming week
    Gameplan {
        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Injury report for your roster
    Injuries {
        #[clap(flatten)]
        common: CommonArgs,

        /// Also list injured players on an NFL team (e.g. `KC`).
        #[clap(long)]
        team: Option<String>,
    },

    /// Value score for one or more players
    Value {
        #[clap(flatten)]
        common: CommonArgs,

        /// Sleeper player IDs: `-p 4046 6794` or `-p 4046 -p 6794`.
        #[clap(short = 'p', long = "player", required = true, num_args = 1..)]
        players: Vec<PlayerId>,
    },

    /// Grade a trade: players you give against players you get
    Trade {
        #[clap(flatten)]
        common: CommonArgs,

        /// Player IDs you send.
        #[clap(long, required = true, num_args = 1..)]
        give: Vec<PlayerId>,

        /// Player IDs you receive.
        #[clap(long, required = true, num_args = 1..)]
        get: Vec<PlayerId>,
    },

    /// Most valuable players on other rosters
    Targets {
        #[clap(flatten)]
        common: CommonArgs,

        /// Only consider one position (QB, RB, WR, TE, K, DEF).
        #[clap(long)]
        position: Option<Position>,
    },

    /// Packages from your roster worth about as much as a target player
    Packages {
        #[clap(flatten)]
        common: CommonArgs,

        /// Player ID of the player you want.
        #[clap(long)]
        target: PlayerId,
    },

    /// Your Sleeper account and leagues for the season
    Leagues {
        #[clap(flatten)]
        common: CommonArgs,
    },

    /// List cached Sleeper data, or delete it
    Cache {
        /// Delete every cached file.
        #[clap(long)]
        clear: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "sleeper-ffl",
    version,
    about = "Sleeper Fantasy Football assistant"
)]
pub struct SleeperFfl {
    /// Log debug output to stderr (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        SleeperFfl::command().debug_assert();
    }

    #[test]
    fn test_common_args_defaults() {
        let cli = SleeperFfl::try_parse_from(["sleeper-ffl", "quick"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Quick { common } => {
                assert_eq!(common.username, None);
                assert_eq!(common.season, Season::default());
                assert_eq!(common.week, None);
                assert!(!common.json);
            }
            other => panic!("Expected Quick, got {other:?}"),
        }
    }

    #[test]
    fn test_common_args_flags() {
        let cli = SleeperFfl::try_parse_from([
            "sleeper-ffl",
            "injuries",
            "-u",
            "@guru",
            "-l",
            "98765",
            "-s",
            "2024",
            "-w",
            "9",
            "--json",
            "--api-delay-ms",
            "0",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Commands::Injuries { common, team } = cli.command else {
            panic!("Expected Injuries");
        };
        assert_eq!(common.username.as_deref(), Some("@guru"));
        assert_eq!(common.league_id, Some(LeagueId::new("98765")));
        assert_eq!(common.season, Season::new(2024));
        assert_eq!(common.week, Some(Week::new(9)));
        assert!(common.json);
        assert_eq!(common.api_delay_ms, Some(0));
        assert_eq!(team, None);
    }

    #[test]
    fn test_value_accepts_multiple_players() {
        let cli = SleeperFfl::try_parse_from(["sleeper-ffl", "value", "-p", "4046", "6794"]).unwrap();
        let Commands::Value { players, .. } = cli.command else {
            panic!("Expected Value");
        };
        assert_eq!(players, vec![PlayerId::new("4046"), PlayerId::new("6794")]);
    }

    #[test]
    fn test_trade_requires_both_sides() {
        assert!(SleeperFfl::try_parse_from(["sleeper-ffl", "trade", "--give", "1"]).is_err());

        let cli = SleeperFfl::try_parse_from([
            "sleeper-ffl", "trade", "--give", "1", "2", "--get", "3",
        ])
        .unwrap();
        let Commands::Trade { give, get, .. } = cli.command else {
            panic!("Expected Trade");
        };
        assert_eq!(give.len(), 2);
        assert_eq!(get, vec![PlayerId::new("3")]);
    }

    #[test]
    fn test_targets_position_parsing() {
        let cli =
            SleeperFfl::try_parse_from(["sleeper-ffl", "targets", "--position", "rb"]).unwrap();
        let Commands::Targets { position, .. } = cli.command else {
            panic!("Expected Targets");
        };
        assert_eq!(position, Some(Position::RB));

        assert!(
            SleeperFfl::try_parse_from(["sleeper-ffl", "targets", "--position", "LB"]).is_err()
        );
    }

    #[test]
    fn test_performance_defaults() {
        let cli = SleeperFfl::try_parse_from(["sleeper-ffl", "performance", "--series"]).unwrap();
        let Commands::Performance {
            weeks_back,
            threshold,
            series,
            ..
        } = cli.command
        else {
            panic!("Expected Performance");
        };
        assert_eq!(weeks_back, 3);
        assert_eq!(threshold, 8.0);
        assert!(series);
    }

    #[test]
    fn test_cache_needs_no_username() {
        let cli = SleeperFfl::try_parse_from(["sleeper-ffl", "cache", "--clear"]).unwrap();
        match cli.command {
            Commands::Cache { clear, json } => {
                assert!(clear);
                assert!(!json);
            }
            other => panic!("Expected Cache, got {other:?}"),
        }

        assert!(SleeperFfl::try_parse_from(["sleeper-ffl", "cache", "-u", "guru"]).is_err());
    }
}
