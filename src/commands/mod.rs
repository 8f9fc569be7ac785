//! Command implementations for the playoffs CLI

pub mod common;
pub mod lookup;
pub mod menu;
pub mod score_round;
pub mod top_performers;
pub mod update_totals;

#[cfg(test)]
mod tests;

use crate::{cli::types::SpreadsheetId, PlayoffsError, Result, SPREADSHEET_ID_ENV_VAR};

/// The spreadsheet every sheet command reads and writes.
///
/// `Settings` has already merged the flag, environment and config file;
/// `None` here means none of them supplied one.
pub fn resolve_spreadsheet_id(spreadsheet_id: Option<&SpreadsheetId>) -> Result<SpreadsheetId> {
    spreadsheet_id
        .cloned()
        .ok_or_else(|| PlayoffsError::MissingSpreadsheetId {
            env_var: SPREADSHEET_ID_ENV_VAR.to_string(),
        })
}
