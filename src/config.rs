//! Runtime configuration resolved from CLI flags and environment variables.

use std::{path::PathBuf, time::Duration};

use crate::{
    core::cache_root,
    error::{Result, SleeperError},
    sleeper::SLEEPER_BASE_URL,
    LeagueId,
};

pub const USERNAME_ENV_VAR: &str = "SLEEPER_USERNAME";
pub const LEAGUE_ID_ENV_VAR: &str = "SLEEPER_LEAGUE_ID";
pub const CACHE_DIR_ENV_VAR: &str = "SLEEPER_FFL_CACHE_DIR";

/// Pause before each Sleeper request.
pub const DEFAULT_API_DELAY_MS: u64 = 100;

/// Settings for [`crate::sleeper::SleeperClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_delay: Duration,
    pub cache_dir: PathBuf,
    /// Skip cache reads (results are still written back).
    pub refresh: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: SLEEPER_BASE_URL.to_string(),
            api_delay: Duration::from_millis(DEFAULT_API_DELAY_MS),
            cache_dir: cache_root(),
            refresh: false,
        }
    }
}

impl ClientConfig {
    /// Build from CLI flags, honoring `SLEEPER_FFL_CACHE_DIR`.
    pub fn from_flags(api_delay_ms: Option<u64>, refresh: bool) -> Self {
        Self {
            api_delay: Duration::from_millis(api_delay_ms.unwrap_or(DEFAULT_API_DELAY_MS)),
            cache_dir: resolve_cache_dir(std::env::var(CACHE_DIR_ENV_VAR).ok()),
            refresh,
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Trim whitespace and a single leading `@`.
pub fn normalize_username(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_prefix('@').unwrap_or(trimmed).to_string()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Username from the flag, falling back to `SLEEPER_USERNAME`.
pub fn resolve_username(username: Option<String>) -> Result<String> {
    resolve_username_from(username, std::env::var(USERNAME_ENV_VAR).ok())
}

fn resolve_username_from(flag: Option<String>, env: Option<String>) -> Result<String> {
    non_empty(flag)
        .or_else(|| non_empty(env))
        .map(|s| normalize_username(&s))
        .ok_or_else(|| SleeperError::MissingUsername {
            env_var: USERNAME_ENV_VAR.to_string(),
        })
}

/// League id from the flag, then `SLEEPER_LEAGUE_ID`. `None` means "first league".
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Option<LeagueId> {
    resolve_league_id_from(league_id, std::env::var(LEAGUE_ID_ENV_VAR).ok())
}

fn resolve_league_id_from(flag: Option<LeagueId>, env: Option<String>) -> Option<LeagueId> {
    flag.filter(|id| !id.as_str().is_empty())
        .or_else(|| non_empty(env).map(|s| LeagueId::new(s.trim())))
}

fn resolve_cache_dir(env: Option<String>) -> PathBuf {
    non_empty(env).map(PathBuf::from).unwrap_or_else(cache_root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_username() {
        assert_eq!(normalize_username("@fantasy_guru"), "fantasy_guru");
        assert_eq!(normalize_username("  fantasy_guru "), "fantasy_guru");
        assert_eq!(normalize_username("@@odd"), "@odd");
    }

    #[test]
    fn test_username_flag_overrides_env() {
        let name = resolve_username_from(Some("@flag".into()), Some("env".into())).unwrap();
        assert_eq!(name, "flag");
    }

    #[test]
    fn test_username_from_env() {
        let name = resolve_username_from(None, Some("@env_user".into())).unwrap();
        assert_eq!(name, "env_user");
    }

    #[test]
    fn test_username_missing() {
        match resolve_username_from(None, Some("   ".into())).unwrap_err() {
            SleeperError::MissingUsername { env_var } => assert_eq!(env_var, USERNAME_ENV_VAR),
            _ => panic!("Expected MissingUsername error"),
        }
    }

    #[test]
    fn test_league_id_resolution() {
        let flag = Some(LeagueId::new("111"));
        assert_eq!(
            resolve_league_id_from(flag, Some("222".into())),
            Some(LeagueId::new("111"))
        );
        assert_eq!(
            resolve_league_id_from(None, Some(" 222 ".into())),
            Some(LeagueId::new("222"))
        );
        assert_eq!(resolve_league_id_from(None, None), None);
    }

    #[test]
    fn test_cache_dir_override() {
        assert_eq!(
            resolve_cache_dir(Some("/tmp/sleeper".into())),
            PathBuf::from("/tmp/sleeper")
        );
        assert_eq!(resolve_cache_dir(None), cache_root());
    }

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::default().with_base_url("http://localhost:1234");
        assert_eq!(config.base_url, "http://localhost:1234");
        assert_eq!(config.api_delay, Duration::from_millis(100));
        assert!(!config.refresh);

        let config = ClientConfig::from_flags(Some(0), true);
        assert_eq!(config.api_delay, Duration::ZERO);
        assert!(config.refresh);
        assert_eq!(config.base_url, SLEEPER_BASE_URL);
    }
}
