//! Common utilities and helper functions shared across commands.

use tracing::info;

use super::resolve_spreadsheet_id;
use crate::{
    cli::types::Position,
    config::Settings,
    core::http::access_token_from_env,
    scoring::{PlayerDirectory, ScoreResolver},
    sheets::{GoogleSheetsClient, InMemoryWorkbook, SpreadsheetService},
    sleeper::{SleeperClient, StatsProvider},
    Result,
};

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub settings: Settings,
    pub stats: SleeperClient,
    /// Write to an in-memory copy of the spreadsheet instead of the real one.
    pub dry_run: bool,
}

impl CommandContext {
    pub fn new(settings: Settings, refresh: bool) -> Result<Self> {
        let stats = SleeperClient::new()?.with_refresh(refresh);
        Ok(Self {
            settings,
            stats,
            dry_run: false,
        })
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Sheets client for the configured spreadsheet.
    ///
    /// Fails before any network call when the spreadsheet id or access token
    /// is missing.
    pub fn sheets(&self) -> Result<GoogleSheetsClient> {
        let spreadsheet_id = resolve_spreadsheet_id(self.settings.spreadsheet_id.as_ref())?;
        let token = access_token_from_env()?;
        GoogleSheetsClient::new(spreadsheet_id, &token)
    }

    /// Spreadsheet the commands write to.
    ///
    /// On a dry run every sheet is copied into memory first, so the real
    /// spreadsheet is only read.
    pub async fn workbook(&self) -> Result<Box<dyn SpreadsheetService>> {
        let remote = self.sheets()?;
        if !self.dry_run {
            return Ok(Box::new(remote));
        }
        let copy = InMemoryWorkbook::snapshot(&remote).await?;
        info!("Dry run: writes go to an in-memory copy of the spreadsheet");
        Ok(Box::new(copy))
    }

    pub fn resolver(&self) -> ScoreResolver {
        ScoreResolver::new(self.settings.score_fields.iter().cloned())
    }

    pub async fn load_directory(&self) -> Result<PlayerDirectory> {
        load_directory(&self.stats, &self.settings.eligible_positions).await
    }
}

/// Fetch the player listing and index it by name.
pub async fn load_directory<S: StatsProvider + ?Sized>(
    stats: &S,
    eligible: &[Position],
) -> Result<PlayerDirectory> {
    let records = stats.fetch_player_directory().await?;
    let directory = PlayerDirectory::build(&records, eligible);
    info!(
        "Player directory ready: {} eligible of {} players",
        directory.len(),
        records.len()
    );
    Ok(directory)
}
