//! Roster position categories.

use crate::error::PlayoffsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Offensive fantasy positions as reported by the stats provider.
///
/// Only these categories are ever placed in the player directory; anything
/// else the provider reports (LB, OL, P, ...) is treated as ineligible.
///
/// # Examples
///
/// ```rust
/// use ffl_playoffs::Position;
///
/// let qb: Position = "qb".parse().unwrap();
/// assert_eq!(qb, Position::QB);
/// assert_eq!(Position::DEF.to_string(), "DEF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    FB,
    DEF,
}

impl Position {
    /// Positions a roster slot may be filled from unless configured otherwise.
    pub const DEFAULT_ELIGIBLE: [Position; 6] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::K,
        Position::FB,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::FB => "FB",
            Position::DEF => "DEF",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = PlayoffsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" | "PK" => Ok(Position::K),
            "FB" => Ok(Position::FB),
            "DEF" | "D/ST" | "DST" => Ok(Position::DEF),
            _ => Err(PlayoffsError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Position {
    type Error = PlayoffsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(p: Position) -> String {
        p.as_str().to_string()
    }
}
