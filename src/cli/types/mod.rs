//! Type-safe wrappers and enums for playoff scoring data.

pub mod ids;
pub mod position;
pub mod round;
pub mod time;

pub use ids::{PlayerId, SpreadsheetId};
pub use position::Position;
pub use round::{round_label, round_sheet_title, PlayoffRound, TOTALS_SHEET_TITLE};
pub use time::{Season, SeasonType, Week};
