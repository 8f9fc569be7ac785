//! Score one playoff round end to end.

use tracing::info;

use super::{
    common::CommandContext,
    update_totals::{print_standings, rebuild_totals},
};
use crate::{
    cli::types::PlayoffRound,
    config::Settings,
    scoring::{score_roster, Accumulated, PlayerDirectory, RosterGrid, ScoreResolver, ScoredRoster},
    sheets::{CreateOutcome, SpreadsheetService},
    sleeper::StatsProvider,
    PlayoffsError, Result,
};

/// What a processed round produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOutcome {
    pub sheet_title: String,
    pub scored: ScoredRoster,
    pub totals: Option<Accumulated>,
}

/// Fetch the week's stats, score the roster sheet, write the round sheet,
/// then rebuild running totals.
///
/// Failing to get the stats or the roster aborts the round; per-player
/// problems only produce diagnostics.
pub async fn process_round<S, W>(
    stats: &S,
    sheets: &W,
    directory: &PlayerDirectory,
    resolver: &ScoreResolver,
    settings: &Settings,
    round: PlayoffRound,
) -> Result<RoundOutcome>
where
    S: StatsProvider + ?Sized,
    W: SpreadsheetService + ?Sized,
{
    let week = settings.stats_week(round.as_u16());
    println!("\nProcessing {}", round.label());

    let week_stats = stats
        .fetch_weekly_stats(settings.season, settings.season_type, week)
        .await?;
    info!("Loaded stats for {} players in week {}", week_stats.len(), week);

    let roster_values = sheets.get_grid(&settings.roster_range).await?;
    let roster = RosterGrid::from_values(&roster_values).ok_or_else(|| {
        PlayoffsError::EmptyRoster {
            range: settings.roster_range.clone(),
        }
    })?;

    let scored = score_roster(&roster, &week_stats, resolver, directory);

    let sheet_title = round.sheet_title();
    match sheets.create_sheet(&sheet_title).await? {
        CreateOutcome::Created => info!("Created sheet {}", sheet_title),
        CreateOutcome::AlreadyExists => info!("Sheet {} already exists, overwriting", sheet_title),
    }
    sheets
        .replace_sheet(&sheet_title, &scored.grid.to_values())
        .await?;
    println!("\nSuccessfully updated {}!", sheet_title);

    let totals = rebuild_totals(sheets).await?;

    Ok(RoundOutcome {
        sheet_title,
        scored,
        totals,
    })
}

/// Handle the score command
pub async fn handle_score(ctx: &CommandContext, round: PlayoffRound) -> Result<()> {
    let sheets = ctx.workbook().await?;
    let directory = ctx.load_directory().await?;
    let outcome = process_round(
        &ctx.stats,
        sheets.as_ref(),
        &directory,
        &ctx.resolver(),
        &ctx.settings,
        round,
    )
    .await?;

    report(&outcome);
    Ok(())
}

/// Print the diagnostic count and current standings for a processed round.
pub fn report(outcome: &RoundOutcome) {
    if !outcome.scored.diagnostics.is_empty() {
        println!(
            "{} roster issue(s) scored as 0; see warnings above",
            outcome.scored.diagnostics.len()
        );
    }
    if let Some(totals) = &outcome.totals {
        print_standings(&totals.table);
    }
}
