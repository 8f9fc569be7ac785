//! Rebuild the "Running Totals" sheet from the persisted round sheets.

use tracing::{info, warn};

use super::common::CommandContext;
use crate::{
    cli::types::{PlayoffRound, TOTALS_SHEET_TITLE},
    scoring::{accumulate, Accumulated, RoundSheet, RunningTotalsTable},
    sheets::{range::sheet_range, CreateOutcome, SpreadsheetService},
    Result,
};

/// Read every round sheet present in the spreadsheet, in round order.
pub async fn collect_round_sheets<W: SpreadsheetService + ?Sized>(
    sheets: &W,
) -> Result<Vec<RoundSheet>> {
    let titles = sheets.list_sheet_titles().await?;
    let mut found = Vec::new();

    for round in PlayoffRound::all() {
        let title = round.sheet_title();
        if !titles.iter().any(|t| *t == title) {
            continue;
        }
        info!("Processing {}...", title);
        let values = sheets.get_grid(&sheet_range(&title)).await?;
        found.push(RoundSheet::new(round.as_u16(), values));
    }

    Ok(found)
}

/// Recompute running totals and overwrite the totals sheet.
///
/// Returns `None` without writing anything when no round sheet exists yet.
pub async fn rebuild_totals<W: SpreadsheetService + ?Sized>(
    sheets: &W,
) -> Result<Option<Accumulated>> {
    let round_sheets = collect_round_sheets(sheets).await?;
    if round_sheets.is_empty() {
        warn!("No weekly score sheets found!");
        return Ok(None);
    }

    let accumulated = accumulate(&round_sheets);

    if sheets.create_sheet(TOTALS_SHEET_TITLE).await? == CreateOutcome::Created {
        info!("Created sheet {}", TOTALS_SHEET_TITLE);
    }
    sheets
        .replace_sheet(TOTALS_SHEET_TITLE, &accumulated.table.to_values())
        .await?;

    println!("Successfully updated running totals!");
    Ok(Some(accumulated))
}

pub fn print_standings(table: &RunningTotalsTable) {
    println!("\nCurrent Standings:");
    for (owner, total) in table.ranking() {
        println!("{}: {:.2} points", owner, total);
    }
}

/// Handle the totals command
pub async fn handle_totals(ctx: &CommandContext) -> Result<()> {
    let sheets = ctx.workbook().await?;
    if let Some(accumulated) = rebuild_totals(sheets.as_ref()).await? {
        print_standings(&accumulated.table);
    }
    Ok(())
}
