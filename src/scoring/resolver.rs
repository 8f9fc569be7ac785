//! Fantasy point extraction from raw stat records.

use serde_json::Value;
use tracing::debug;

use crate::{
    cli::types::PlayerId,
    sleeper::{StatRecord, WeeklyStatsTable},
};

/// Scoring fields consulted in order; providers fill different subsets.
pub const DEFAULT_SCORE_FIELDS: [&str; 3] = ["pts_ppr", "fantasy_points_ppr", "fantasy_points"];

/// Outcome of resolving one player's points.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Scored { points: f64, field: String },
    PlayerNotFound,
    NoScoringField { present_fields: Vec<String> },
}

impl Resolution {
    /// Points to record; every unresolved outcome counts as zero.
    pub fn points(&self) -> f64 {
        match self {
            Resolution::Scored { points, .. } => *points,
            Resolution::PlayerNotFound | Resolution::NoScoringField { .. } => 0.0,
        }
    }
}

/// Picks a player's fantasy score from the first scoring field present.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResolver {
    fields: Vec<String>,
}

impl Default for ScoreResolver {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_FIELDS)
    }
}

impl ScoreResolver {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// First configured field present in `record` with a numeric value.
    pub fn points_from_record(&self, record: &StatRecord) -> Option<(&str, f64)> {
        self.fields.iter().find_map(|field| {
            record
                .get(field)
                .and_then(coerce_points)
                .map(|points| (field.as_str(), points))
        })
    }

    /// Resolve a player's points for the week.
    ///
    /// A player without a record in `stats` is scored like an empty record.
    pub fn resolve(&self, stats: &WeeklyStatsTable, player_id: Option<&PlayerId>) -> Resolution {
        let Some(player_id) = player_id else {
            return Resolution::PlayerNotFound;
        };

        let empty = StatRecord::new();
        let record = stats.get(player_id).unwrap_or(&empty);
        debug!("Stats for {}: {:?}", player_id, record);

        match self.points_from_record(record) {
            Some((field, points)) => Resolution::Scored {
                points,
                field: field.to_string(),
            },
            None => Resolution::NoScoringField {
                present_fields: record.keys().cloned().collect(),
            },
        }
    }
}

fn coerce_points(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}
