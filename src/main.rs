//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use sleeper_ffl::{
    cli::{Commands, SleeperFfl},
    commands::{
        cache::handle_cache,
        full::handle_full,
        gameplan::handle_gameplan,
        injuries::handle_injuries,
        leagues::handle_leagues,
        performance::{handle_performance, PerformanceParams},
        quick::handle_quick,
        trade::{handle_packages, handle_targets, handle_trade, handle_value},
    },
    Result,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "sleeper_ffl=debug"
    } else {
        "sleeper_ffl=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = SleeperFfl::parse();
    init_tracing(app.verbose);

    match app.command {
        Commands::Quick { common } => handle_quick(common).await?,
        Commands::Full { common } => handle_full(common).await?,
        Commands::Performance {
            common,
            weeks_back,
            threshold,
            series,
        } => {
            handle_performance(PerformanceParams {
                common,
                weeks_back,
                threshold,
                series,
            })
            .await?
        }
        Commands::Gameplan { common } => handle_gameplan(common).await?,
        Commands::Injuries { common, team } => handle_injuries(common, team).await?,
        Commands::Value { common, players } => handle_value(common, players).await?,
        Commands::Trade { common, give, get } => handle_trade(common, give, get).await?,
        Commands::Targets { common, position } => handle_targets(common, position).await?,
        Commands::Packages { common, target } => handle_packages(common, target).await?,
        Commands::Leagues { common } => handle_leagues(common).await?,
        Commands::Cache { clear, json } => handle_cache(clear, json)?,
    }

    Ok(())
}
