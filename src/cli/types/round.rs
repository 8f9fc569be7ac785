//! Playoff round numbering and the sheet titles derived from it.

use crate::error::{PlayoffsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Title of the sheet holding cumulative standings.
pub const TOTALS_SHEET_TITLE: &str = "Running Totals";

/// Display label for a round number.
///
/// Rounds 1-3 are "Round N", round 4 is the "Championship"; any other number
/// falls back to "Week N".
pub fn round_label(round: u16) -> String {
    match round {
        1..=3 => format!("Round {round}"),
        4 => "Championship".to_string(),
        n => format!("Week {n}"),
    }
}

/// Title of the sheet a round's scores are written to.
pub fn round_sheet_title(round: u16) -> String {
    format!("{} Scores", round_label(round))
}

/// A playoff round the operator can ask to process (1-4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayoffRound(u16);

impl PlayoffRound {
    pub const FIRST: u16 = 1;
    pub const LAST: u16 = 4;

    /// Create a round, rejecting numbers outside 1-4.
    pub fn new(round: u16) -> Result<Self> {
        if (Self::FIRST..=Self::LAST).contains(&round) {
            Ok(Self(round))
        } else {
            Err(PlayoffsError::InvalidRound {
                input: round.to_string(),
            })
        }
    }

    /// All rounds in bracket order.
    pub fn all() -> impl Iterator<Item = PlayoffRound> {
        (Self::FIRST..=Self::LAST).map(PlayoffRound)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn label(&self) -> String {
        round_label(self.0)
    }

    pub fn sheet_title(&self) -> String {
        round_sheet_title(self.0)
    }
}

impl fmt::Display for PlayoffRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for PlayoffRound {
    type Err = PlayoffsError;

    fn from_str(s: &str) -> Result<Self> {
        let round = s
            .trim()
            .parse::<u16>()
            .map_err(|_| PlayoffsError::InvalidRound {
                input: s.trim().to_string(),
            })?;
        Self::new(round)
    }
}
