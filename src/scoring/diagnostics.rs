//! Recoverable scoring problems.
//!
//! None of these stop a round from being scored; each one stands in for a
//! zero or placeholder value and is reported to the operator.

use std::fmt;
use tracing::warn;

use crate::cli::types::PlayerId;

#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A roster name did not match any eligible player.
    PlayerNotFound {
        name: String,
        owner: String,
        position: String,
    },
    /// The player's stat record had none of the configured scoring fields.
    NoScoringField {
        name: String,
        player_id: PlayerId,
        present_fields: Vec<String>,
    },
    /// The roster had no player for this owner and position.
    MissingCell { owner: String, position: String },
    /// A weekly TOTAL cell could not be read as a number.
    MalformedTotal {
        owner: String,
        round: u16,
        cell: Option<String>,
    },
    /// An owner known from earlier rounds has no column in this round.
    OwnerMissingFromRound { owner: String, round: u16 },
    /// A weekly sheet had no row to read totals from.
    MissingTotalRow { round: u16 },
    /// A weekly sheet names the same owner in more than one column; only the
    /// first column counts.
    DuplicateOwner {
        owner: String,
        round: u16,
        column: String,
    },
}

impl Diagnostic {
    /// Log through `tracing` at warn level.
    pub fn emit(&self) {
        warn!("{}", self);
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::PlayerNotFound {
                name,
                owner,
                position,
            } => write!(
                f,
                "Could not find player ID for {name} ({owner}, {position})"
            ),
            Diagnostic::NoScoringField {
                name,
                player_id,
                present_fields,
            } => write!(
                f,
                "No fantasy points for {name} (ID: {player_id}); available stat keys: {present_fields:?}"
            ),
            Diagnostic::MissingCell { owner, position } => {
                write!(f, "No player listed at {position} for {owner}")
            }
            Diagnostic::MalformedTotal { owner, round, cell } => match cell {
                Some(cell) => write!(
                    f,
                    "Could not process total for {owner} in round {round}: {cell:?} is not a number"
                ),
                None => write!(
                    f,
                    "Could not process total for {owner} in round {round}: cell is missing"
                ),
            },
            Diagnostic::OwnerMissingFromRound { owner, round } => {
                write!(f, "{owner} has no column in round {round}; counting 0")
            }
            Diagnostic::MissingTotalRow { round } => {
                write!(f, "No TOTAL row found for round {round}")
            }
            Diagnostic::DuplicateOwner {
                owner,
                round,
                column,
            } => write!(
                f,
                "{owner} appears more than once in round {round}; ignoring column {column}"
            ),
        }
    }
}
