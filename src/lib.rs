//! Sleeper Fantasy Football assistant library
//!
//! Fetches league, roster, player and trending data from the public Sleeper
//! API and runs deterministic analyses over it.
//!
//! ## Features
//!
//! - **Player Valuation**: A fixed-weight value score per player
//! - **Trade Matching**: One- and two-player packages for a trade target
//! - **Trade Grading**: Letter grade for a proposed give/get trade
//! - **Waiver Analysis**: Trending pickups still available in your league
//! - **Performance Checks**: Roster players scoring below a threshold
//! - **Weekly Game Plan**: Prioritized drops and adds
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sleeper_ffl::analysis::{trade::suggest_packages, Player, ValuationContext};
//! use sleeper_ffl::Position;
//!
//! # fn example() -> sleeper_ffl::Result<()> {
//! let roster = vec![
//!     Player::new("4866", Some(Position::RB)).with_age(27),
//!     Player::new("6794", Some(Position::WR)).with_age(25),
//! ];
//! let ctx = ValuationContext::default();
//!
//! for package in suggest_packages(3.0, &roster, &ctx)? {
//!     println!("{} players, total {:.2}", package.players.len(), package.total_value);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your Sleeper username to avoid passing it in every command:
//! ```bash
//! export SLEEPER_USERNAME=your_name
//! ```

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod sleeper;

// Re-export commonly used types
pub use cli::types::{InjuryStatus, LeagueId, PlayerId, Position, Season, UserId, Week};
pub use config::{CACHE_DIR_ENV_VAR, LEAGUE_ID_ENV_VAR, USERNAME_ENV_VAR};
pub use error::{Result, SleeperError};
