//! Scoring pipeline: names to ids, ids to points, rosters to grids, grids to totals.
//!
//! Everything here is synchronous and side-effect free apart from `tracing`
//! output; fetching and persisting belong to [`crate::commands`].

pub mod diagnostics;
pub mod directory;
pub mod resolver;
pub mod roster;
pub mod totals;

pub use diagnostics::Diagnostic;
pub use directory::{normalize_name, PlayerDirectory};
pub use resolver::{Resolution, ScoreResolver, DEFAULT_SCORE_FIELDS};
pub use roster::{
    score_roster, RosterGrid, RosterRow, ScoreRow, ScoredCell, ScoredRoster, ScoresGrid,
    MISSING_PLAYER, POSITION_HEADER, TOTAL_LABEL,
};
pub use totals::{accumulate, Accumulated, RoundSheet, RoundTotals, RunningTotalsTable};
