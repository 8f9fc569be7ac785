//! Integration tests for command handlers

use super::*;

#[cfg(test)]
mod command_tests {
    use super::*;
    use crate::{
        cli::types::{PlayerId, PlayoffRound, Position, Season, SeasonType, Week},
        config::Settings,
        scoring::{PlayerDirectory, ScoreResolver},
        sheets::{Cell, Grid, InMemoryWorkbook},
        sleeper::{PlayerRecord, StatsProvider, WeeklyStatsTable},
    };
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;

    /// Stats provider serving fixed weeks; any other week is an error.
    struct FixedStats {
        players: Vec<PlayerRecord>,
        weeks: HashMap<u16, WeeklyStatsTable>,
    }

    #[async_trait]
    impl StatsProvider for FixedStats {
        async fn fetch_player_directory(&self) -> Result<Vec<PlayerRecord>> {
            Ok(self.players.clone())
        }

        async fn fetch_weekly_stats(
            &self,
            _season: Season,
            _season_type: SeasonType,
            week: Week,
        ) -> Result<WeeklyStatsTable> {
            self.weeks
                .get(&week.as_u16())
                .cloned()
                .ok_or_else(|| PlayoffsError::SheetsApi {
                    status: 404,
                    message: format!("no stats for week {week}"),
                })
        }
    }

    fn fixture() -> FixedStats {
        let players = vec![PlayerRecord {
            id: PlayerId::new("4984"),
            first_name: "Josh".to_string(),
            last_name: "Allen".to_string(),
            position: Some(Position::QB),
            team: Some("BUF".to_string()),
        }];
        let record = serde_json::from_value(json!({"pts_ppr": 21.5})).unwrap();
        let week = WeeklyStatsTable::new(Season::new(2024), SeasonType::Post, Week::new(3))
            .with_record("4984", record);
        FixedStats {
            players,
            weeks: HashMap::from([(3, week)]),
        }
    }

    fn roster() -> Grid {
        vec![
            vec![Cell::from("Position"), Cell::from("Alice")],
            vec![Cell::from("QB"), Cell::from("Josh Allen")],
        ]
    }

    #[test]
    fn test_resolve_spreadsheet_id_present() {
        let id = SpreadsheetId::new("1AbC");
        assert_eq!(resolve_spreadsheet_id(Some(&id)).unwrap(), id);
    }

    #[test]
    fn test_resolve_spreadsheet_id_missing() {
        match resolve_spreadsheet_id(None).unwrap_err() {
            PlayoffsError::MissingSpreadsheetId { env_var } => {
                assert_eq!(env_var, SPREADSHEET_ID_ENV_VAR);
            }
            other => panic!("Expected MissingSpreadsheetId error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_process_round_uses_week_offset() {
        let stats = fixture();
        let workbook = InMemoryWorkbook::new().with_sheet("Rosters", roster());
        let settings = Settings {
            week_offset: 2,
            ..Settings::default()
        };
        let directory = common::load_directory(&stats, &settings.eligible_positions)
            .await
            .unwrap();

        let outcome = score_round::process_round(
            &stats,
            &workbook,
            &directory,
            &ScoreResolver::default(),
            &settings,
            PlayoffRound::new(1).unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(outcome.sheet_title, "Round 1 Scores");
        assert_eq!(outcome.scored.grid.totals, vec![21.5]);
        assert!(workbook.sheet("Round 1 Scores").is_some());
    }

    #[tokio::test]
    async fn test_process_round_stats_failure_aborts_round() {
        let stats = fixture();
        let workbook = InMemoryWorkbook::new().with_sheet("Rosters", roster());

        let result = score_round::process_round(
            &stats,
            &workbook,
            &PlayerDirectory::default(),
            &ScoreResolver::default(),
            &Settings::default(),
            PlayoffRound::new(2).unwrap(),
        )
        .await;

        assert!(result.is_err());
        assert!(workbook.sheet("Round 2 Scores").is_none());
    }

    #[tokio::test]
    async fn test_process_round_empty_roster() {
        let stats = fixture();
        let workbook = InMemoryWorkbook::new().with_sheet("Rosters", Grid::new());
        let settings = Settings {
            week_offset: 2,
            ..Settings::default()
        };

        let result = score_round::process_round(
            &stats,
            &workbook,
            &PlayerDirectory::default(),
            &ScoreResolver::default(),
            &settings,
            PlayoffRound::new(1).unwrap(),
        )
        .await;

        assert!(matches!(result, Err(PlayoffsError::EmptyRoster { range }) if range == "A1:Z50"));
    }

    #[tokio::test]
    async fn test_top_performers_falls_back_to_next_week() {
        let stats = fixture();
        let (week, rows) = top_performers::find_top_performers(
            &stats,
            Season::new(2024),
            SeasonType::Post,
            &[Week::new(4), Week::new(3)],
            &ScoreResolver::default(),
        )
        .await
        .unwrap();

        assert_eq!(week, Week::new(3));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Josh Allen");
    }

    #[tokio::test]
    async fn test_top_performers_no_weeks_available() {
        let stats = fixture();
        let err = top_performers::find_top_performers(
            &stats,
            Season::new(2024),
            SeasonType::Post,
            &[Week::new(1), Week::new(2)],
            &ScoreResolver::default(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, PlayoffsError::NoWeeklyStats { weeks } if weeks == vec![1, 2]));
    }
}
