//! Async client for the public Sleeper API.
//!
//! Requests are issued one at a time with a fixed pause before each call.
//! The player database and weekly stats are cached (see [`crate::core::cache`]).

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::{sync::OnceLock, time::Duration};
use tracing::{debug, info, warn};

use crate::{
    config::{normalize_username, ClientConfig},
    core::{
        cache::{PlayerDatabaseKey, WeekStatsKey},
        default_headers, CacheManager,
    },
    error::{Result, SleeperError},
    sleeper::types::{
        League, NflState, PlayerDatabase, Roster, TrendType, TrendingPlayer, User, WeekStats,
    },
    LeagueId, Season, UserId, Week,
};

/// Base path for the Sleeper v1 API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

pub struct SleeperClient {
    client: Client,
    base_url: String,
    api_delay: Duration,
    refresh: bool,
    caches: CacheManager,
    nfl_state: OnceLock<NflState>,
}

impl SleeperClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_headers()?)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_delay: config.api_delay,
            refresh: config.refresh,
            caches: CacheManager::new(config.cache_dir.clone()),
            nfl_state: OnceLock::new(),
        })
    }

    /// GET `{base_url}{path}` and decode the body. A `null` body decodes to `None`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>> {
        if !self.api_delay.is_zero() {
            tokio::time::sleep(self.api_delay).await;
        }

        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "GET");

        let res = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json::<Option<T>>()
            .await?;

        Ok(res)
    }

    /// `GET /user/{username}`; `None` when Sleeper does not know the name.
    pub async fn get_user(&self, username: &str) -> Result<Option<User>> {
        let username = normalize_username(username);
        self.get_json(&format!("/user/{username}"), &[]).await
    }

    /// Like [`Self::get_user`] but an unknown name is an error.
    pub async fn require_user(&self, username: &str) -> Result<User> {
        self.get_user(username)
            .await?
            .ok_or_else(|| SleeperError::UserNotFound {
                username: normalize_username(username),
            })
    }

    pub async fn get_user_leagues(&self, user_id: &UserId, season: Season) -> Result<Vec<League>> {
        let path = format!("/user/{user_id}/leagues/nfl/{season}");
        Ok(self.get_json(&path, &[]).await?.unwrap_or_default())
    }

    pub async fn get_rosters(&self, league_id: &LeagueId) -> Result<Vec<Roster>> {
        let path = format!("/league/{league_id}/rosters");
        Ok(self.get_json(&path, &[]).await?.unwrap_or_default())
    }

    /// The full NFL player database, served from cache when younger than 24 h.
    pub async fn get_players(&self) -> Result<PlayerDatabase> {
        let key = PlayerDatabaseKey;
        if !self.refresh {
            if let Some(db) = self.caches.players.get(&key) {
                return Ok(db);
            }
        }

        info!("fetching NFL player database");
        let db: PlayerDatabase = self
            .get_json("/players/nfl", &[])
            .await?
            .unwrap_or_default();
        info!(players = db.len(), "player database fetched");

        self.caches.players.put(key, db.clone());
        Ok(db)
    }

    pub async fn get_trending(
        &self,
        trend: TrendType,
        lookback_hours: u32,
        limit: u32,
    ) -> Result<Vec<TrendingPlayer>> {
        let path = format!("/players/nfl/trending/{}", trend.as_str());
        let query = [
            ("lookback_hours", lookback_hours.to_string()),
            ("limit", limit.to_string()),
        ];
        Ok(self.get_json(&path, &query).await?.unwrap_or_default())
    }

    /// Regular-season stats for one week. Failures yield empty stats.
    pub async fn get_week_stats(&self, season: Season, week: Week) -> WeekStats {
        let key = WeekStatsKey { season, week };
        if !self.refresh {
            if let Some(stats) = self.caches.week_stats.get(&key) {
                return stats;
            }
        }

        let path = format!("/stats/nfl/regular/{season}/{week}");
        match self.get_json::<WeekStats>(&path, &[]).await {
            Ok(Some(stats)) if !stats.is_empty() => {
                self.caches.week_stats.put(key, stats.clone());
                stats
            }
            Ok(_) => {
                warn!(%season, %week, "no stats available");
                WeekStats::default()
            }
            Err(e) => {
                warn!(%season, %week, error = %e, "failed to fetch week stats");
                WeekStats::default()
            }
        }
    }

    /// Stats for each week, paired with the week number.
    pub async fn get_weeks_stats(&self, season: Season, weeks: &[Week]) -> Vec<(Week, WeekStats)> {
        let mut out = Vec::with_capacity(weeks.len());
        for week in weeks {
            out.push((*week, self.get_week_stats(season, *week).await));
        }
        out
    }

    /// `GET /state/nfl`, fetched at most once per client.
    pub async fn get_nfl_state(&self) -> Result<NflState> {
        if let Some(state) = self.nfl_state.get() {
            return Ok(state.clone());
        }

        let state = self
            .get_json::<NflState>("/state/nfl", &[])
            .await?
            .ok_or_else(|| SleeperError::EmptyResponse {
                endpoint: "/state/nfl".to_string(),
            })?;
        Ok(self.nfl_state.get_or_init(|| state).clone())
    }
}
