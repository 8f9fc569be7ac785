//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{PlayoffRound, Season, SeasonType, SpreadsheetId, Week};

use crate::config::CliOverrides;

/// Flags accepted before or after any subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Path to config.toml (defaults to the user config directory).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Spreadsheet ID (or set `FFL_PLAYOFFS_SPREADSHEET_ID` env var).
    #[clap(long, global = true)]
    pub spreadsheet_id: Option<SpreadsheetId>,

    /// Season year (e.g. 2025).
    #[clap(long, short, global = true)]
    pub season: Option<Season>,

    /// `post` or `regular`.
    #[clap(long, global = true)]
    pub season_type: Option<SeasonType>,

    /// Re-download the player directory instead of using the daily cache.
    #[clap(long, global = true)]
    pub refresh: bool,

    /// Read the spreadsheet but keep every write in memory.
    #[clap(long, global = true)]
    pub dry_run: bool,

    /// Log request URLs and raw stat records.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            spreadsheet_id: self.spreadsheet_id.clone(),
            season: self.season,
            season_type: self.season_type,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactive round menu (the default).
    Menu,

    /// Score one playoff round, write its sheet, and rebuild running totals.
    Score {
        /// Playoff round: 1-3, or 4 for the championship.
        #[clap(long, short)]
        round: PlayoffRound,
    },

    /// Rebuild the "Running Totals" sheet from every round sheet.
    Totals,

    /// Rank players by PPR points for the first week with stats available.
    TopPerformers {
        /// Candidate weeks, tried in order (repeatable): `-w 18 -w 17`.
        #[clap(long = "week", short = 'w', required = true)]
        weeks: Vec<Week>,

        /// Number of players to show (defaults to `top` from config, else 10).
        #[clap(long, short)]
        limit: Option<usize>,

        /// Also write the full ranking to this CSV file.
        #[clap(long)]
        csv: Option<PathBuf>,
    },

    /// Look up player IDs by name, to check roster spelling.
    Lookup {
        /// Player names as written on the roster sheet.
        #[clap(required = true)]
        names: Vec<String>,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "ffl-playoffs",
    version,
    about = "Fantasy football playoff scores from Sleeper to Google Sheets"
)]
pub struct PlayoffsCli {
    #[clap(flatten)]
    pub global: GlobalArgs,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = PlayoffsCli::try_parse_from(["ffl-playoffs"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.global.refresh);
        assert!(!cli.global.dry_run);
    }

    #[test]
    fn test_dry_run_after_subcommand() {
        let cli = PlayoffsCli::try_parse_from(["ffl-playoffs", "totals", "--dry-run"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Totals)));
        assert!(cli.global.dry_run);
    }

    #[test]
    fn test_score_with_global_flags() {
        let cli = PlayoffsCli::try_parse_from([
            "ffl-playoffs",
            "score",
            "--round",
            "4",
            "--season",
            "2024",
            "--spreadsheet-id",
            "abc",
            "-v",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Score { round }) => assert_eq!(round.as_u16(), 4),
            other => panic!("Expected Score, got {other:?}"),
        }
        let overrides = cli.global.overrides();
        assert_eq!(overrides.season, Some(Season::new(2024)));
        assert_eq!(overrides.spreadsheet_id, Some(SpreadsheetId::new("abc")));
        assert!(cli.global.verbose);
    }

    #[test]
    fn test_score_rejects_round_out_of_range() {
        assert!(PlayoffsCli::try_parse_from(["ffl-playoffs", "score", "--round", "5"]).is_err());
    }

    #[test]
    fn test_top_performers_weeks_in_order() {
        let cli = PlayoffsCli::try_parse_from([
            "ffl-playoffs",
            "--season-type",
            "regular",
            "top-performers",
            "-w",
            "18",
            "-w",
            "17",
            "--limit",
            "3",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::TopPerformers { weeks, limit, csv }) => {
                assert_eq!(weeks, vec![Week::new(18), Week::new(17)]);
                assert_eq!(limit, Some(3));
                assert!(csv.is_none());
            }
            other => panic!("Expected TopPerformers, got {other:?}"),
        }
        assert_eq!(cli.global.season_type, Some(SeasonType::Regular));
    }

    #[test]
    fn test_lookup_requires_a_name() {
        assert!(PlayoffsCli::try_parse_from(["ffl-playoffs", "lookup"]).is_err());
        let cli = PlayoffsCli::try_parse_from(["ffl-playoffs", "lookup", "Josh Allen"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Lookup { names }) if names == ["Josh Allen"]));
    }
}
