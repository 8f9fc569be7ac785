//! Roster grid parsing and per-round scoring.

use tracing::{debug, info};

use super::{
    diagnostics::Diagnostic,
    directory::PlayerDirectory,
    resolver::{Resolution, ScoreResolver},
};
use crate::{
    cli::types::Week,
    sheets::{Cell, Grid},
    sleeper::WeeklyStatsTable,
};

/// Placeholder recorded for a roster slot with no player.
pub const MISSING_PLAYER: &str = "MISSING";
/// First-column label of the synthesized sum row.
pub const TOTAL_LABEL: &str = "TOTAL";
/// Top-left header cell of a round sheet.
pub const POSITION_HEADER: &str = "Position";

/// One position row: the player each owner started there, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRow {
    pub position: String,
    /// Aligned with [`RosterGrid::owners`]
    pub players: Vec<Option<String>>,
}

/// Owners across the top, positions down the side, player names inside.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterGrid {
    owners: Vec<String>,
    rows: Vec<RosterRow>,
}

impl RosterGrid {
    pub fn new(owners: Vec<String>, rows: Vec<RosterRow>) -> Self {
        Self { owners, rows }
    }

    /// Read a roster from raw sheet cells.
    ///
    /// Owner columns with a blank header and rows with a blank position are
    /// skipped. Short rows and blank cells become `None`. Returns `None` when
    /// there is no header row or no owner in it.
    pub fn from_values(values: &Grid) -> Option<Self> {
        let (header, body) = values.split_first()?;

        let owner_columns: Vec<(usize, String)> = header
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, cell)| !cell.is_blank())
            .map(|(col, cell)| (col, cell.to_label()))
            .collect();
        if owner_columns.is_empty() {
            return None;
        }

        let rows = body
            .iter()
            .filter_map(|row| {
                let position = row.first().filter(|c| !c.is_blank())?.to_label();
                let players = owner_columns
                    .iter()
                    .map(|(col, _)| {
                        row.get(*col)
                            .filter(|c| !c.is_blank())
                            .map(Cell::to_label)
                    })
                    .collect();
                Some(RosterRow { position, players })
            })
            .collect();

        let owners = owner_columns.into_iter().map(|(_, name)| name).collect();
        Some(Self { owners, rows })
    }

    pub fn owners(&self) -> &[String] {
        &self.owners
    }

    pub fn rows(&self) -> &[RosterRow] {
        &self.rows
    }
}

/// A player and the points credited to them.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCell {
    pub player: String,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub position: String,
    /// Aligned with [`ScoresGrid::owners`]
    pub cells: Vec<ScoredCell>,
}

/// Scored roster for one week, with a per-owner TOTAL.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoresGrid {
    pub week: Week,
    pub owners: Vec<String>,
    pub rows: Vec<ScoreRow>,
    pub totals: Vec<f64>,
}

impl ScoresGrid {
    /// Total for one owner by name.
    pub fn owner_total(&self, owner: &str) -> Option<f64> {
        self.owners
            .iter()
            .position(|o| o == owner)
            .and_then(|i| self.totals.get(i).copied())
    }

    /// Sheet layout: header, one row of points per position, then TOTAL.
    pub fn to_values(&self) -> Grid {
        let mut values = Vec::with_capacity(self.rows.len() + 2);

        let mut header = vec![Cell::from(POSITION_HEADER)];
        header.extend(self.owners.iter().map(|o| Cell::from(o.as_str())));
        values.push(header);

        for row in &self.rows {
            let mut out = vec![Cell::from(row.position.as_str())];
            out.extend(row.cells.iter().map(|c| Cell::Number(c.points)));
            values.push(out);
        }

        let mut total = vec![Cell::from(TOTAL_LABEL)];
        total.extend(self.totals.iter().map(|t| Cell::Number(*t)));
        values.push(total);

        values
    }
}

/// Scores plus everything that had to be defaulted along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRoster {
    pub grid: ScoresGrid,
    pub diagnostics: Vec<Diagnostic>,
}

/// Score every roster slot for the stats table's week.
///
/// A slot without a player is recorded as [`MISSING_PLAYER`] with 0 points,
/// and unresolvable players score 0; neither stops the remaining slots.
pub fn score_roster(
    roster: &RosterGrid,
    stats: &WeeklyStatsTable,
    resolver: &ScoreResolver,
    directory: &PlayerDirectory,
) -> ScoredRoster {
    let owners = roster.owners().to_vec();
    let mut diagnostics = Vec::new();
    let mut rows: Vec<ScoreRow> = roster
        .rows()
        .iter()
        .map(|row| ScoreRow {
            position: row.position.clone(),
            cells: Vec::with_capacity(owners.len()),
        })
        .collect();

    for (owner_idx, owner) in owners.iter().enumerate() {
        info!("Processing roster for {}...", owner);

        for (row_idx, roster_row) in roster.rows().iter().enumerate() {
            let position = &roster_row.position;
            let cell = match roster_row.players.get(owner_idx).cloned().flatten() {
                None => {
                    let diagnostic = Diagnostic::MissingCell {
                        owner: owner.clone(),
                        position: position.clone(),
                    };
                    diagnostic.emit();
                    diagnostics.push(diagnostic);
                    ScoredCell {
                        player: MISSING_PLAYER.to_string(),
                        points: 0.0,
                    }
                }
                Some(player) => {
                    let player_id = directory.lookup(&player);
                    let resolution = resolver.resolve(stats, player_id);
                    let diagnostic = match (&resolution, player_id) {
                        (Resolution::PlayerNotFound, _) => Some(Diagnostic::PlayerNotFound {
                            name: player.clone(),
                            owner: owner.clone(),
                            position: position.clone(),
                        }),
                        (Resolution::NoScoringField { present_fields }, Some(id)) => {
                            Some(Diagnostic::NoScoringField {
                                name: player.clone(),
                                player_id: id.clone(),
                                present_fields: present_fields.clone(),
                            })
                        }
                        _ => None,
                    };
                    if let Some(diagnostic) = diagnostic {
                        diagnostic.emit();
                        diagnostics.push(diagnostic);
                    }
                    let points = resolution.points();
                    debug!("{}: {} - {} points", position, player, points);
                    ScoredCell { player, points }
                }
            };
            rows[row_idx].cells.push(cell);
        }
    }

    let totals = (0..owners.len())
        .map(|owner_idx| rows.iter().map(|r| r.cells[owner_idx].points).sum())
        .collect();

    ScoredRoster {
        grid: ScoresGrid {
            week: stats.week,
            owners,
            rows,
            totals,
        },
        diagnostics,
    }
}
