//! ID types for players and spreadsheets.

use crate::error::{PlayoffsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for stats-provider player IDs.
///
/// Sleeper keys players by string (numeric for most players, team
/// abbreviations for defenses), so the ID is kept as text.
///
/// # Examples
///
/// ```rust
/// use ffl_playoffs::PlayerId;
///
/// let id = PlayerId::new("4046");
/// assert_eq!(id.as_str(), "4046");
/// assert_eq!(id.to_string(), "4046");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Type-safe wrapper for Google Sheets spreadsheet IDs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpreadsheetId(pub String);

impl SpreadsheetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpreadsheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SpreadsheetId {
    type Err = PlayoffsError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PlayoffsError::MissingSpreadsheetId {
                env_var: crate::SPREADSHEET_ID_ENV_VAR.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}
