//! Run settings: CLI flags, then environment, then `config.toml`, then defaults.
//!
//! ```toml
//! spreadsheet_id = "1AbC..."
//! season = 2025
//! season_type = "post"
//! week_offset = 0
//! roster_range = "A1:Z50"
//! eligible_positions = ["QB", "RB", "WR", "TE", "K", "FB"]
//! score_fields = ["pts_ppr", "fantasy_points_ppr", "fantasy_points"]
//! top = 10
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{
    cli::types::{Position, Season, SeasonType, SpreadsheetId, Week},
    scoring::DEFAULT_SCORE_FIELDS,
    PlayoffsError, Result, SPREADSHEET_ID_ENV_VAR,
};

pub const DEFAULT_ROSTER_RANGE: &str = "A1:Z50";
pub const DEFAULT_TOP: usize = 10;

/// Location of the config file when `--config` is not given.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ffl-playoffs").join("config.toml"))
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub spreadsheet_id: Option<String>,
    pub season: Option<Season>,
    pub season_type: Option<SeasonType>,
    pub week_offset: Option<u16>,
    pub roster_range: Option<String>,
    pub eligible_positions: Option<Vec<Position>>,
    pub score_fields: Option<Vec<String>>,
    pub top: Option<usize>,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => PlayoffsError::ConfigNotFound {
                path: path.display().to_string(),
            },
            _ => PlayoffsError::Io(e),
        })?;
        Ok(toml::from_str(&text)?)
    }

    /// Load an explicit config file, or the default one if it exists.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => match default_config_path() {
                Some(path) if path.exists() => {
                    debug!("Using config file {}", path.display());
                    Self::from_path(&path)
                }
                _ => Ok(Self::default()),
            },
        }
    }
}

/// Values supplied on the command line, which beat every other source.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub spreadsheet_id: Option<SpreadsheetId>,
    pub season: Option<Season>,
    pub season_type: Option<SeasonType>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub spreadsheet_id: Option<SpreadsheetId>,
    pub season: Season,
    pub season_type: SeasonType,
    pub week_offset: u16,
    pub roster_range: String,
    pub eligible_positions: Vec<Position>,
    pub score_fields: Vec<String>,
    pub top: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(FileConfig::default(), CliOverrides::default(), None)
    }
}

impl Settings {
    /// Merge the sources without touching the environment or filesystem.
    pub fn resolve(file: FileConfig, cli: CliOverrides, env_spreadsheet_id: Option<String>) -> Self {
        let parse_id = |s: String| s.parse::<SpreadsheetId>().ok();
        let spreadsheet_id = cli
            .spreadsheet_id
            .or_else(|| env_spreadsheet_id.and_then(parse_id))
            .or_else(|| file.spreadsheet_id.and_then(parse_id));

        let score_fields = file
            .score_fields
            .filter(|fields| !fields.is_empty())
            .unwrap_or_else(|| DEFAULT_SCORE_FIELDS.iter().map(|f| f.to_string()).collect());

        Self {
            spreadsheet_id,
            season: cli.season.or(file.season).unwrap_or_default(),
            season_type: cli.season_type.or(file.season_type).unwrap_or_default(),
            week_offset: file.week_offset.unwrap_or(0),
            roster_range: file
                .roster_range
                .unwrap_or_else(|| DEFAULT_ROSTER_RANGE.to_string()),
            eligible_positions: file
                .eligible_positions
                .unwrap_or_else(|| Position::DEFAULT_ELIGIBLE.to_vec()),
            score_fields,
            top: file.top.unwrap_or(DEFAULT_TOP),
        }
    }

    /// Read the config file and `FFL_PLAYOFFS_SPREADSHEET_ID`, then merge.
    pub fn load(config_path: Option<&Path>, cli: CliOverrides) -> Result<Self> {
        let file = FileConfig::load(config_path)?;
        let env_id = std::env::var(SPREADSHEET_ID_ENV_VAR).ok();
        Ok(Self::resolve(file, cli, env_id))
    }

    /// Stats week for a playoff round.
    pub fn stats_week(&self, round: u16) -> Week {
        Week::new(round.saturating_add(self.week_offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.spreadsheet_id, None);
        assert_eq!(settings.season, Season::new(2025));
        assert_eq!(settings.season_type, SeasonType::Post);
        assert_eq!(settings.week_offset, 0);
        assert_eq!(settings.roster_range, "A1:Z50");
        assert_eq!(settings.eligible_positions, Position::DEFAULT_ELIGIBLE.to_vec());
        assert_eq!(
            settings.score_fields,
            vec!["pts_ppr", "fantasy_points_ppr", "fantasy_points"]
        );
        assert_eq!(settings.top, 10);
    }

    #[test]
    fn test_parse_full_file() {
        let file = write_config(
            r#"
spreadsheet_id = "sheet-from-file"
season = 2024
season_type = "regular"
week_offset = 18
roster_range = "A1:H20"
eligible_positions = ["QB", "DEF"]
score_fields = ["fantasy_points"]
top = 5
"#,
        );
        let config = FileConfig::from_path(file.path()).unwrap();
        let settings = Settings::resolve(config, CliOverrides::default(), None);

        assert_eq!(settings.spreadsheet_id, Some(SpreadsheetId::new("sheet-from-file")));
        assert_eq!(settings.season, Season::new(2024));
        assert_eq!(settings.season_type, SeasonType::Regular);
        assert_eq!(settings.stats_week(2), Week::new(20));
        assert_eq!(settings.roster_range, "A1:H20");
        assert_eq!(settings.eligible_positions, vec![Position::QB, Position::DEF]);
        assert_eq!(settings.score_fields, vec!["fantasy_points"]);
        assert_eq!(settings.top, 5);
    }

    #[test]
    fn test_precedence_cli_env_file() {
        let file = FileConfig {
            spreadsheet_id: Some("file".to_string()),
            season: Some(Season::new(2023)),
            ..FileConfig::default()
        };

        let from_file = Settings::resolve(file.clone(), CliOverrides::default(), None);
        assert_eq!(from_file.spreadsheet_id, Some(SpreadsheetId::new("file")));

        let from_env = Settings::resolve(file.clone(), CliOverrides::default(), Some("env".into()));
        assert_eq!(from_env.spreadsheet_id, Some(SpreadsheetId::new("env")));

        let cli = CliOverrides {
            spreadsheet_id: Some(SpreadsheetId::new("cli")),
            season: Some(Season::new(2025)),
            season_type: None,
        };
        let from_cli = Settings::resolve(file, cli, Some("env".into()));
        assert_eq!(from_cli.spreadsheet_id, Some(SpreadsheetId::new("cli")));
        assert_eq!(from_cli.season, Season::new(2025));
    }

    #[test]
    fn test_blank_env_id_falls_through() {
        let file = FileConfig {
            spreadsheet_id: Some("file".to_string()),
            ..FileConfig::default()
        };
        let settings = Settings::resolve(file, CliOverrides::default(), Some("  ".into()));
        assert_eq!(settings.spreadsheet_id, Some(SpreadsheetId::new("file")));
    }

    #[test]
    fn test_empty_score_fields_use_defaults() {
        let file = FileConfig {
            score_fields: Some(vec![]),
            ..FileConfig::default()
        };
        let settings = Settings::resolve(file, CliOverrides::default(), None);
        assert_eq!(settings.score_fields.len(), 3);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = FileConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, PlayoffsError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let file = write_config("spreadsheet = \"typo\"\n");
        let err = FileConfig::from_path(file.path()).unwrap_err();
        assert!(matches!(err, PlayoffsError::Toml(_)));
    }

    #[test]
    fn test_bad_position_is_rejected() {
        let file = write_config("eligible_positions = [\"QB\", \"LB\"]\n");
        assert!(FileConfig::from_path(file.path()).is_err());
    }
}
