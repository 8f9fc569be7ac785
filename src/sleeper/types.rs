use crate::cli::types::{PlayerId, Position, Season, SeasonType, Week};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Raw stat fields for one player and week, keyed by field name.
///
/// Values are kept as JSON so a stray non-numeric field cannot fail the
/// whole week's payload.
pub type StatRecord = BTreeMap<String, Value>;

/// Player object as served by `/players/nfl`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlayer {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}

/// Directory entry for one player
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    /// `None` for positions outside the offensive fantasy set
    pub position: Option<Position>,
    pub team: Option<String>,
}

impl PlayerRecord {
    pub fn from_raw(id: impl Into<String>, raw: RawPlayer) -> Self {
        Self {
            id: PlayerId::new(id),
            first_name: raw.first_name.unwrap_or_default(),
            last_name: raw.last_name.unwrap_or_default(),
            position: raw.position.and_then(|p| p.parse().ok()),
            team: raw.team,
        }
    }

    /// "First Last", trimmed
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// The `/players/nfl` payload, keyed by player id in response order.
pub type PlayersResponse = IndexMap<String, Option<RawPlayer>>;

/// Convert the `/players/nfl` payload, skipping null entries.
///
/// Records keep the provider's order, which decides name collisions in
/// the player directory.
pub fn records_from_players_response(raw: PlayersResponse) -> Vec<PlayerRecord> {
    raw.into_iter()
        .filter_map(|(id, player)| player.map(|p| PlayerRecord::from_raw(id, p)))
        .collect()
}

/// Row shape of the list form of the stats endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct StatsRow {
    pub player_id: String,
    #[serde(default)]
    pub stats: StatRecord,
}

/// The stats endpoint answers either with an id-keyed object or a list of rows.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StatsResponse {
    Map(BTreeMap<String, Option<StatRecord>>),
    List(Vec<StatsRow>),
    Null(()),
}

/// Per-player stat records for one week
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyStatsTable {
    pub season: Season,
    pub season_type: SeasonType,
    pub week: Week,
    pub records: HashMap<PlayerId, StatRecord>,
}

impl WeeklyStatsTable {
    pub fn new(season: Season, season_type: SeasonType, week: Week) -> Self {
        Self {
            season,
            season_type,
            week,
            records: HashMap::new(),
        }
    }

    pub fn from_response(
        season: Season,
        season_type: SeasonType,
        week: Week,
        response: StatsResponse,
    ) -> Self {
        let records = match response {
            StatsResponse::Map(map) => map
                .into_iter()
                .filter_map(|(id, record)| record.map(|r| (PlayerId::new(id), r)))
                .collect(),
            StatsResponse::List(rows) => rows
                .into_iter()
                .map(|row| (PlayerId::new(row.player_id), row.stats))
                .collect(),
            StatsResponse::Null(()) => HashMap::new(),
        };
        Self {
            season,
            season_type,
            week,
            records,
        }
    }

    /// Builder-style insert, mostly for tests and fixtures
    pub fn with_record(mut self, id: impl Into<String>, record: StatRecord) -> Self {
        self.records.insert(PlayerId::new(id), record);
        self
    }

    pub fn get(&self, id: &PlayerId) -> Option<&StatRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::PlayerDirectory;
    use serde_json::json;

    #[test]
    fn test_records_from_players_response() {
        let raw: PlayersResponse = serde_json::from_str(
            r#"{
                "4046": {
                    "first_name": "Patrick",
                    "last_name": "Mahomes",
                    "position": "QB",
                    "team": "KC",
                    "age": 29
                },
                "9999": null,
                "DET": {
                    "first_name": "Detroit",
                    "last_name": "Lions",
                    "position": "DEF",
                    "team": "DET"
                },
                "1234": {
                    "first_name": "Some",
                    "last_name": "Linebacker",
                    "position": "LB",
                    "team": null
                }
            }"#,
        )
        .unwrap();

        let records = records_from_players_response(raw);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].full_name(), "Patrick Mahomes");
        assert_eq!(records[0].position, Some(Position::QB));
        assert_eq!(records[0].team.as_deref(), Some("KC"));
        assert_eq!(records[1].position, Some(Position::DEF));
        assert_eq!(records[2].id, PlayerId::new("1234"));
        assert_eq!(records[2].position, None);
    }

    #[test]
    fn test_name_collision_follows_response_order() {
        let raw: PlayersResponse = serde_json::from_str(
            r#"{
                "9001": {"first_name": "Mike", "last_name": "Williams", "position": "WR"},
                "4037": {"first_name": "Mike", "last_name": "Williams", "position": "WR"}
            }"#,
        )
        .unwrap();

        let records = records_from_players_response(raw);
        let directory = PlayerDirectory::build(&records, &[Position::WR]);
        assert_eq!(directory.lookup("mike williams"), Some(&PlayerId::new("4037")));
    }

    #[test]
    fn test_full_name_tolerates_missing_parts() {
        let record = PlayerRecord::from_raw(
            "1",
            RawPlayer {
                first_name: None,
                last_name: Some("Mononym".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(record.full_name(), "Mononym");
        assert_eq!(PlayerRecord::from_raw("2", RawPlayer::default()).full_name(), "");
    }

    #[test]
    fn test_stats_response_map_form() {
        let response: StatsResponse = serde_json::from_value(json!({
            "4046": {"pts_ppr": 24.6, "pass_yd": 320},
            "5000": null
        }))
        .unwrap();
        let table = WeeklyStatsTable::from_response(
            Season::new(2024),
            SeasonType::Post,
            Week::new(1),
            response,
        );
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get(&PlayerId::new("4046")).unwrap()["pts_ppr"],
            json!(24.6)
        );
    }

    #[test]
    fn test_stats_response_list_form() {
        let response: StatsResponse = serde_json::from_value(json!([
            {"player_id": "4046", "stats": {"pts_ppr": 10.0}},
            {"player_id": "4047"}
        ]))
        .unwrap();
        let table = WeeklyStatsTable::from_response(
            Season::new(2024),
            SeasonType::Regular,
            Week::new(13),
            response,
        );
        assert_eq!(table.len(), 2);
        assert!(table.get(&PlayerId::new("4047")).unwrap().is_empty());
    }

    #[test]
    fn test_stats_response_null_is_empty() {
        let response: StatsResponse = serde_json::from_value(json!(null)).unwrap();
        let table = WeeklyStatsTable::from_response(
            Season::new(2024),
            SeasonType::Post,
            Week::new(5),
            response,
        );
        assert!(table.is_empty());
    }

    #[test]
    fn test_player_record_cache_round_trip() {
        let record = PlayerRecord::from_raw(
            "4046",
            RawPlayer {
                first_name: Some("Patrick".to_string()),
                last_name: Some("Mahomes".to_string()),
                position: Some("QB".to_string()),
                team: Some("KC".to_string()),
            },
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: PlayerRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
