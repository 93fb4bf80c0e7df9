//! Sleeper API client and payload types.

pub mod http;
pub mod types;

pub use http::{SleeperClient, SLEEPER_BASE_URL};
