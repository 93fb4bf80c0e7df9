//! Error types for the Sleeper Fantasy Football CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SleeperError>;

#[derive(Error, Debug)]
pub enum SleeperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Username not provided and {env_var} environment variable not set")]
    MissingUsername { env_var: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Sleeper user not found: {username}")]
    UserNotFound { username: String },

    #[error("No leagues found for the {season} season")]
    NoLeagues { season: String },

    #[error("League not found: {league_id}")]
    LeagueNotFound { league_id: String },

    #[error("No roster owned by user {owner_id} in this league")]
    RosterNotFound { owner_id: String },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Target value must be positive, got {target}")]
    InvalidTarget { target: f64 },

    #[error("Empty response from {endpoint}")]
    EmptyResponse { endpoint: String },

    #[error("Cache error: {message}")]
    Cache { message: String },
}

impl From<anyhow::Error> for SleeperError {
    fn from(err: anyhow::Error) -> Self {
        SleeperError::Cache {
            message: format!("{err:#}"),
        }
    }
}
