//! Time-related types for NFL seasons and weeks.

use crate::error::{PlayoffsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = PlayoffsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for stats week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = PlayoffsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Which part of the NFL calendar a stats request targets.
///
/// Sleeper numbers postseason weeks from 1, so playoff round N is postseason
/// week N unless a week offset is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonType {
    #[default]
    Post,
    Regular,
}

impl SeasonType {
    /// Path segment used by the stats endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonType::Post => "post",
            SeasonType::Regular => "regular",
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeasonType {
    type Err = PlayoffsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "post" | "postseason" | "playoffs" => Ok(SeasonType::Post),
            "regular" | "reg" => Ok(SeasonType::Regular),
            _ => Err(PlayoffsError::InvalidSeasonType {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_and_week_parsing() {
        assert_eq!("2024".parse::<Season>().unwrap(), Season::new(2024));
        assert_eq!(" 13 ".parse::<Week>().unwrap(), Week::new(13));
        assert!("twenty".parse::<Season>().is_err());
        assert!("-1".parse::<Week>().is_err());
    }

    #[test]
    fn test_season_type_parsing() {
        assert_eq!("post".parse::<SeasonType>().unwrap(), SeasonType::Post);
        assert_eq!("Regular".parse::<SeasonType>().unwrap(), SeasonType::Regular);
        assert_eq!("playoffs".parse::<SeasonType>().unwrap(), SeasonType::Post);
        assert!(matches!(
            "preseason".parse::<SeasonType>(),
            Err(PlayoffsError::InvalidSeasonType { .. })
        ));
    }

    #[test]
    fn test_season_type_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            season_type: SeasonType,
        }
        let w: Wrapper = toml::from_str("season_type = \"regular\"").unwrap();
        assert_eq!(w.season_type, SeasonType::Regular);
        assert_eq!(SeasonType::default().to_string(), "post");
    }
}
