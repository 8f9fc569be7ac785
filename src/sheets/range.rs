//! A1-notation ranges.

use super::Grid;
use crate::core::{col_from_label, col_to_label};

/// Quote a sheet title for use in a range, doubling embedded quotes.
pub fn quote_sheet_title(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

/// Range covering a whole sheet.
pub fn sheet_range(title: &str) -> String {
    quote_sheet_title(title)
}

/// Range starting at `A1` spanning `columns` x `rows` cells.
///
/// ```rust
/// use ffl_playoffs::sheets::range::grid_range;
///
/// assert_eq!(grid_range("Round 1 Scores", 5, 8), "'Round 1 Scores'!A1:E8");
/// ```
pub fn grid_range(title: &str, columns: usize, rows: usize) -> String {
    format!(
        "{}!A1:{}{}",
        quote_sheet_title(title),
        col_to_label(columns.max(1) - 1),
        rows.max(1)
    )
}

/// Range exactly covering `values` when written at `A1`.
pub fn range_for_values(title: &str, values: &Grid) -> String {
    let columns = values.iter().map(Vec::len).max().unwrap_or(0);
    grid_range(title, columns, values.len())
}

/// Zero-based (column, row) of a cell reference.
pub type CellRef = (usize, usize);

/// A parsed A1 range. Missing parts mean "the first sheet" or "the whole
/// sheet".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Range {
    pub sheet: Option<String>,
    pub start: Option<CellRef>,
    pub end: Option<CellRef>,
}

/// Parse `A1`, `A1:F10`, `Sheet!A1:F10`, `'My Sheet'!A1:F10` or a bare title.
pub fn parse_range(range: &str) -> Option<A1Range> {
    let range = range.trim();
    if range.is_empty() {
        return None;
    }

    let (sheet, cells) = if let Some(rest) = range.strip_prefix('\'') {
        let (title, after) = split_quoted(rest)?;
        match after {
            "" => (Some(title), None),
            _ => (Some(title), Some(after.strip_prefix('!')?)),
        }
    } else if let Some((title, cells)) = range.rsplit_once('!') {
        (Some(title.to_string()), Some(cells))
    } else if parse_cells(range).is_some() {
        (None, Some(range))
    } else {
        (Some(range.to_string()), None)
    };

    let (start, end) = match cells {
        Some(cells) => {
            let (start, end) = parse_cells(cells)?;
            (Some(start), Some(end))
        }
        None => (None, None),
    };

    Some(A1Range { sheet, start, end })
}

// Reads a quoted title body up to its closing quote; `''` is an escaped quote.
fn split_quoted(s: &str) -> Option<(String, &str)> {
    let mut title = String::new();
    let mut chars = s.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c == '\'' {
            if let Some((_, '\'')) = chars.peek() {
                title.push('\'');
                chars.next();
            } else {
                return Some((title, &s[i + 1..]));
            }
        } else {
            title.push(c);
        }
    }
    None
}

fn parse_cells(cells: &str) -> Option<(CellRef, CellRef)> {
    match cells.split_once(':') {
        Some((a, b)) => Some((parse_cell(a)?, parse_cell(b)?)),
        None => {
            let cell = parse_cell(cells)?;
            Some((cell, cell))
        }
    }
}

fn parse_cell(cell: &str) -> Option<CellRef> {
    let split = cell.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = cell.split_at(split);
    let col = col_from_label(letters)?;
    let row = digits.parse::<usize>().ok()?.checked_sub(1)?;
    Some((col, row))
}
