//! In-process workbook implementing [`SpreadsheetService`].

use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Mutex, MutexGuard};

use super::{
    range::{parse_range, sheet_range, A1Range},
    Cell, CreateOutcome, Grid, SpreadsheetService,
};
use crate::{PlayoffsError, Result};

/// Named grids kept in memory, in creation order.
///
/// Reads behave like the Sheets API: trailing blank cells and rows are
/// dropped, and a range without a sheet name targets the first sheet.
#[derive(Debug, Default)]
pub struct InMemoryWorkbook {
    sheets: Mutex<IndexMap<String, Grid>>,
}

impl InMemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper adding a populated sheet.
    pub fn with_sheet(self, title: &str, values: Grid) -> Self {
        self.lock().insert(title.to_string(), values);
        self
    }

    /// Copy every sheet of `source`, in document order.
    pub async fn snapshot<W: SpreadsheetService + ?Sized>(source: &W) -> Result<Self> {
        let workbook = Self::new();
        for title in source.list_sheet_titles().await? {
            let values = source.get_grid(&sheet_range(&title)).await?;
            workbook.lock().insert(title, values);
        }
        Ok(workbook)
    }

    /// Snapshot of a sheet's cells.
    pub fn sheet(&self, title: &str) -> Option<Grid> {
        self.lock().get(title).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, IndexMap<String, Grid>> {
        self.sheets
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn resolve(&self, range: &str) -> Result<(String, A1Range)> {
        let parsed = parse_range(range).ok_or_else(|| bad_range(range))?;
        let title = match &parsed.sheet {
            Some(title) => title.clone(),
            None => self
                .lock()
                .keys()
                .next()
                .cloned()
                .ok_or_else(|| bad_range(range))?,
        };
        if !self.lock().contains_key(&title) {
            return Err(bad_range(range));
        }
        Ok((title, parsed))
    }
}

fn bad_range(range: &str) -> PlayoffsError {
    PlayoffsError::SheetsApi {
        status: 400,
        message: format!("Unable to parse range: {range}"),
    }
}

fn trim_grid(mut grid: Grid) -> Grid {
    for row in grid.iter_mut() {
        while row.last().is_some_and(Cell::is_blank) {
            row.pop();
        }
    }
    while grid.last().is_some_and(Vec::is_empty) {
        grid.pop();
    }
    grid
}

#[async_trait]
impl SpreadsheetService for InMemoryWorkbook {
    async fn get_grid(&self, range: &str) -> Result<Grid> {
        let (title, parsed) = self.resolve(range)?;
        let sheets = self.lock();
        let source = sheets.get(&title).cloned().unwrap_or_default();

        let (start_col, start_row) = parsed.start.unwrap_or((0, 0));
        let (end_col, end_row) = parsed.end.unwrap_or((usize::MAX, usize::MAX));

        let grid = source
            .into_iter()
            .enumerate()
            .filter(|(r, _)| (start_row..=end_row).contains(r))
            .map(|(_, row)| {
                row.into_iter()
                    .enumerate()
                    .filter(|(c, _)| (start_col..=end_col).contains(c))
                    .map(|(_, cell)| cell)
                    .collect::<Vec<_>>()
            })
            .collect();
        Ok(trim_grid(grid))
    }

    async fn create_sheet(&self, title: &str) -> Result<CreateOutcome> {
        let mut sheets = self.lock();
        if sheets.contains_key(title) {
            return Ok(CreateOutcome::AlreadyExists);
        }
        sheets.insert(title.to_string(), Grid::new());
        Ok(CreateOutcome::Created)
    }

    async fn set_grid(&self, range: &str, values: &Grid) -> Result<()> {
        let (title, parsed) = self.resolve(range)?;
        let (start_col, start_row) = parsed.start.unwrap_or((0, 0));
        let mut sheets = self.lock();
        let grid = sheets.entry(title).or_default();

        for (r, row) in values.iter().enumerate() {
            let target_row = start_row + r;
            if grid.len() <= target_row {
                grid.resize(target_row + 1, Vec::new());
            }
            let target = &mut grid[target_row];
            for (c, cell) in row.iter().enumerate() {
                let target_col = start_col + c;
                if target.len() <= target_col {
                    target.resize(target_col + 1, Cell::Empty);
                }
                target[target_col] = cell.clone();
            }
        }
        Ok(())
    }

    async fn clear_range(&self, range: &str) -> Result<()> {
        let (title, parsed) = self.resolve(range)?;
        let mut sheets = self.lock();
        let grid = sheets.entry(title).or_default();

        let (Some((start_col, start_row)), Some((end_col, end_row))) = (parsed.start, parsed.end)
        else {
            grid.clear();
            return Ok(());
        };
        for row in grid.iter_mut().take(end_row + 1).skip(start_row) {
            for cell in row.iter_mut().take(end_col + 1).skip(start_col) {
                *cell = Cell::Empty;
            }
        }
        Ok(())
    }

    async fn list_sheet_titles(&self) -> Result<Vec<String>> {
        Ok(self.lock().keys().cloned().collect())
    }
}
