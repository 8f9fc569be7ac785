//! Running totals across persisted round sheets.

use indexmap::IndexMap;
use tracing::debug;

use super::{diagnostics::Diagnostic, roster::TOTAL_LABEL};
use crate::{
    cli::types::round_label,
    core::col_to_label,
    sheets::{Cell, Grid},
};

/// Top-left header cell of the running totals sheet.
pub const ROUND_HEADER: &str = "Round";

/// Raw cells of one persisted round sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSheet {
    pub round: u16,
    pub values: Grid,
}

impl RoundSheet {
    pub fn new(round: u16, values: Grid) -> Self {
        Self { round, values }
    }
}

/// One round's weekly total per owner.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTotals {
    pub round: u16,
    pub label: String,
    /// Aligned with [`RunningTotalsTable::owners`]
    pub scores: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunningTotalsTable {
    pub owners: Vec<String>,
    pub rounds: Vec<RoundTotals>,
    pub totals: Vec<f64>,
}

impl RunningTotalsTable {
    /// Sheet layout: header, one row per round, then TOTAL.
    pub fn to_values(&self) -> Grid {
        let mut values = Vec::with_capacity(self.rounds.len() + 2);

        let mut header = vec![Cell::from(ROUND_HEADER)];
        header.extend(self.owners.iter().map(|o| Cell::from(o.as_str())));
        values.push(header);

        for round in &self.rounds {
            let mut row = vec![Cell::from(round.label.as_str())];
            row.extend(round.scores.iter().map(|s| Cell::Number(*s)));
            values.push(row);
        }

        let mut total = vec![Cell::from(TOTAL_LABEL)];
        total.extend(self.totals.iter().map(|t| Cell::Number(*t)));
        values.push(total);

        values
    }

    /// Owners by cumulative total, highest first; ties keep header order.
    pub fn ranking(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .owners
            .iter()
            .map(String::as_str)
            .zip(self.totals.iter().copied())
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Accumulated {
    pub table: RunningTotalsTable,
    pub diagnostics: Vec<Diagnostic>,
}

/// Owner names from a sheet header, with their column index.
fn header_owners(values: &Grid) -> Vec<(usize, String)> {
    values
        .first()
        .map(|header| {
            header
                .iter()
                .enumerate()
                .skip(1)
                .filter(|(_, cell)| !cell.is_blank())
                .map(|(col, cell)| (col, cell.to_label()))
                .collect()
        })
        .unwrap_or_default()
}

/// The row labelled TOTAL, or the last data row when none is labelled.
fn total_row(values: &Grid) -> Option<&[Cell]> {
    let body = values.get(1..)?;
    body.iter()
        .find(|row| {
            row.first()
                .is_some_and(|c| c.to_label().trim().eq_ignore_ascii_case(TOTAL_LABEL))
        })
        .or_else(|| body.last())
        .map(Vec::as_slice)
}

/// Recompute running totals from every round sheet.
///
/// Owners are matched by header name. An owner first seen in a later round
/// counts 0 for the rounds before it; an owner missing from a round, or
/// whose total cell is not a number, counts 0 for that round.
pub fn accumulate(sheets: &[RoundSheet]) -> Accumulated {
    let mut ordered: Vec<&RoundSheet> = sheets.iter().collect();
    ordered.sort_by_key(|s| s.round);

    let mut diagnostics = Vec::new();
    let mut weekly: IndexMap<String, Vec<f64>> = IndexMap::new();
    let mut rounds = Vec::with_capacity(ordered.len());

    for (idx, sheet) in ordered.iter().enumerate() {
        let owners = header_owners(&sheet.values);
        let totals = total_row(&sheet.values);
        if totals.is_none() {
            let diagnostic = Diagnostic::MissingTotalRow { round: sheet.round };
            diagnostic.emit();
            diagnostics.push(diagnostic);
        }

        for (col, owner) in &owners {
            if weekly.get(owner).is_some_and(|scores| scores.len() > idx) {
                let diagnostic = Diagnostic::DuplicateOwner {
                    owner: owner.clone(),
                    round: sheet.round,
                    column: col_to_label(*col),
                };
                diagnostic.emit();
                diagnostics.push(diagnostic);
                continue;
            }

            let cell = totals.and_then(|row| row.get(*col));
            let score = match cell.and_then(Cell::as_number) {
                Some(score) => score,
                None => {
                    if totals.is_some() {
                        let diagnostic = Diagnostic::MalformedTotal {
                            owner: owner.clone(),
                            round: sheet.round,
                            cell: cell.filter(|c| !c.is_blank()).map(Cell::to_label),
                        };
                        diagnostic.emit();
                        diagnostics.push(diagnostic);
                    }
                    0.0
                }
            };
            debug!("{} round {}: {}", owner, sheet.round, score);

            let scores = weekly.entry(owner.clone()).or_default();
            scores.resize(idx, 0.0);
            scores.push(score);
        }

        for (owner, scores) in weekly.iter_mut() {
            if scores.len() <= idx {
                if !owners.is_empty() {
                    let diagnostic = Diagnostic::OwnerMissingFromRound {
                        owner: owner.clone(),
                        round: sheet.round,
                    };
                    diagnostic.emit();
                    diagnostics.push(diagnostic);
                }
                scores.resize(idx + 1, 0.0);
            }
        }

        rounds.push(RoundTotals {
            round: sheet.round,
            label: round_label(sheet.round),
            scores: Vec::new(),
        });
    }

    for (idx, round) in rounds.iter_mut().enumerate() {
        round.scores = weekly
            .values()
            .map(|scores| scores.get(idx).copied().unwrap_or(0.0))
            .collect();
    }
    let totals = weekly.values().map(|scores| scores.iter().sum()).collect();

    Accumulated {
        table: RunningTotalsTable {
            owners: weekly.into_keys().collect(),
            rounds,
            totals,
        },
        diagnostics,
    }
}
