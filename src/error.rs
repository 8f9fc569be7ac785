//! Error types for the fantasy playoffs calculator

use thiserror::Error;


pub type Result<T> = std::result::Result<T, PlayoffsError>;

#[derive(Error, Debug)]
pub enum PlayoffsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Config file could not be parsed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Config file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Spreadsheet ID not provided and {env_var} environment variable not set")]
    MissingSpreadsheetId { env_var: String },

    #[error("Google Sheets access token not found in {env_var} environment variable")]
    MissingAccessToken { env_var: String },

    #[error("Invalid playoff round: {input} (expected 1-4)")]
    InvalidRound { input: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid season type: {input} (expected post or regular)")]
    InvalidSeasonType { input: String },

    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },

    #[error("Google Sheets API returned {status}: {message}")]
    SheetsApi { status: u16, message: String },

    #[error("No weekly stats available for weeks {weeks:?}")]
    NoWeeklyStats { weeks: Vec<u16> },

    #[error("No roster data found in range {range}")]
    EmptyRoster { range: String },
}
