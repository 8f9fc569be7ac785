//! HTTP client for the Sleeper public API.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use super::{
    types::{
        records_from_players_response, PlayerRecord, PlayersResponse, StatsResponse,
        WeeklyStatsTable,
    },
    StatsProvider,
};
use crate::{
    cli::types::{Season, SeasonType, Week},
    core::{
        cache::PLAYERS_MAX_AGE,
        http::{json_header_map, USER_AGENT},
        PlayersCacheKey, UnifiedCache,
    },
    Result,
};

/// Base path for the Sleeper v1 API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Stats provider backed by Sleeper.
///
/// The full player listing is large and changes slowly, so it is served from
/// [`UnifiedCache`] when a fresh copy exists. Weekly stats always hit the API.
pub struct SleeperClient {
    http: Client,
    base_url: String,
    players_cache: Option<UnifiedCache<PlayersCacheKey, Vec<PlayerRecord>>>,
    refresh: bool,
}

impl SleeperClient {
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(json_header_map())
            .build()?;
        Ok(Self {
            http,
            base_url: SLEEPER_BASE_URL.to_string(),
            players_cache: Some(UnifiedCache::new(1, PLAYERS_MAX_AGE)),
            refresh: false,
        })
    }

    /// Point the client at another host (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Replace the player cache, or disable it with `None`.
    pub fn with_players_cache(
        mut self,
        cache: Option<UnifiedCache<PlayersCacheKey, Vec<PlayerRecord>>>,
    ) -> Self {
        self.players_cache = cache;
        self
    }

    /// Drop any cached players and re-download (the cache is then rewritten).
    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    async fn download_players(&self) -> Result<Vec<PlayerRecord>> {
        let url = format!("{}/players/nfl", self.base_url);
        info!("Fetching player directory from {}", url);

        let raw = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<PlayersResponse>()
            .await?;

        Ok(records_from_players_response(raw))
    }
}

#[async_trait]
impl StatsProvider for SleeperClient {
    async fn fetch_player_directory(&self) -> Result<Vec<PlayerRecord>> {
        let key = PlayersCacheKey::nfl();

        if let Some(cache) = &self.players_cache {
            if self.refresh {
                if let Err(e) = cache.invalidate(&key) {
                    warn!("Could not remove cached players: {}", e);
                }
            } else if let Some(records) = cache.get(&key) {
                info!("Loaded {} players from cache", records.len());
                return Ok(records);
            }
        }

        let records = self.download_players().await?;

        if let Some(cache) = &self.players_cache {
            if let Err(e) = cache.put(key, records.clone()) {
                warn!("Could not write player cache: {}", e);
            }
        }

        Ok(records)
    }

    async fn fetch_weekly_stats(
        &self,
        season: Season,
        season_type: SeasonType,
        week: Week,
    ) -> Result<WeeklyStatsTable> {
        let url = format!(
            "{}/stats/nfl/{}/{}/{}",
            self.base_url, season_type, season, week
        );
        info!("Fetching stats from: {}", url);

        let response = self.http.get(&url).send().await?;
        debug!("Response status: {}", response.status());

        let parsed = response
            .error_for_status()?
            .json::<StatsResponse>()
            .await?;

        Ok(WeeklyStatsTable::from_response(
            season,
            season_type,
            week,
            parsed,
        ))
    }
}
