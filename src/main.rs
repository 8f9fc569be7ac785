//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use ffl_playoffs::{
    cli::{Commands, PlayoffsCli},
    commands::{
        common::CommandContext, lookup::handle_lookup, menu::handle_menu,
        score_round::handle_score, top_performers::handle_top_performers,
        update_totals::handle_totals,
    },
    config::Settings,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = PlayoffsCli::parse();
    init_tracing(app.global.verbose);

    let settings = Settings::load(app.global.config.as_deref(), app.global.overrides())
        .context("failed to load configuration")?;
    let ctx = CommandContext::new(settings, app.global.refresh)
        .context("failed to initialize HTTP client")?
        .with_dry_run(app.global.dry_run);

    match app.command.unwrap_or(Commands::Menu) {
        Commands::Menu => handle_menu(&ctx).await?,
        Commands::Score { round } => handle_score(&ctx, round).await?,
        Commands::Totals => handle_totals(&ctx).await?,
        Commands::TopPerformers { weeks, limit, csv } => {
            handle_top_performers(&ctx, &weeks, limit, csv.as_deref()).await?
        }
        Commands::Lookup { names } => handle_lookup(&ctx, &names).await?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "ffl_playoffs=debug,warn"
    } else {
        "ffl_playoffs=info,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
