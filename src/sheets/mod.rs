//! Spreadsheet collaborator: cell values, the service trait, and its backends.
//!
//! - `google`: Google Sheets v4 REST client
//! - `memory`: In-process workbook used by tests and dry runs
//! - `range`: A1 range building and parsing

pub mod google;
pub mod memory;
pub mod range;

use async_trait::async_trait;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::Result;

pub use google::GoogleSheetsClient;
pub use memory::InMemoryWorkbook;

/// Rows of cells as returned by a range read. Rows may be ragged.
pub type Grid = Vec<Vec<Cell>>;

/// A single spreadsheet value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Bool(bool),
    Text(String),
    Empty,
}

impl Cell {
    /// Numeric value of the cell, accepting numbers and numeric text.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            Cell::Number(n) => *n,
            Cell::Text(s) => s.trim().parse::<f64>().ok()?,
            Cell::Bool(_) | Cell::Empty => return None,
        };
        n.is_finite().then_some(n)
    }

    /// Trimmed text form of the cell, as used for names and labels.
    pub fn to_label(&self) -> String {
        match self {
            Cell::Text(s) => s.trim().to_string(),
            other => other.to_string(),
        }
    }

    /// True for empty cells and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) | Cell::Bool(_) => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            Cell::Text(s) => f.write_str(s),
            Cell::Empty => Ok(()),
        }
    }
}

// Empty cells are written as "" so an overwrite clears stale values.
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Cell::Number(n) => serializer.serialize_f64(*n),
            Cell::Bool(b) => serializer.serialize_bool(*b),
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Empty => serializer.serialize_str(""),
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

/// Result of asking for a sheet to be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    AlreadyExists,
}

/// A spreadsheet holding named grids, bound to one document.
#[async_trait]
pub trait SpreadsheetService: Send + Sync {
    /// Read a rectangular range. Missing trailing cells are simply absent.
    async fn get_grid(&self, range: &str) -> Result<Grid>;

    /// Add a sheet; an existing sheet with that title is not an error.
    async fn create_sheet(&self, title: &str) -> Result<CreateOutcome>;

    /// Overwrite a range starting at its top-left cell.
    async fn set_grid(&self, range: &str, values: &Grid) -> Result<()>;

    /// Blank every cell in a range. A bare sheet title clears the whole sheet.
    async fn clear_range(&self, range: &str) -> Result<()>;

    /// Titles of every sheet, in document order.
    async fn list_sheet_titles(&self) -> Result<Vec<String>>;

    /// Make `values` the entire content of an existing sheet.
    ///
    /// Cells outside `values` are cleared first, so a smaller grid never
    /// leaves rows or columns from an earlier write behind.
    async fn replace_sheet(&self, title: &str, values: &Grid) -> Result<()> {
        self.clear_range(&range::sheet_range(title)).await?;
        self.set_grid(&range::range_for_values(title, values), values)
            .await
    }
}
