//! Stats collaborator: provider trait, Sleeper client and wire types.

pub mod http;
pub mod types;

use async_trait::async_trait;

use crate::{
    cli::types::{Season, SeasonType, Week},
    Result,
};

pub use http::SleeperClient;
pub use types::{PlayerRecord, StatRecord, WeeklyStatsTable};

/// Source of the player listing and per-week player statistics.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Every player the provider knows about, any position.
    async fn fetch_player_directory(&self) -> Result<Vec<PlayerRecord>>;

    /// Raw stat records for every player with stats in the given week.
    async fn fetch_weekly_stats(
        &self,
        season: Season,
        season_type: SeasonType,
        week: Week,
    ) -> Result<WeeklyStatsTable>;
}
