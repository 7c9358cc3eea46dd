//! rinkside CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use rinkside_client::cli::{Cli, Command, ConfigAction};
use rinkside_client::commands;
use rinkside_client::config::ClientConfig;
use rinkside_client::error::ClientResult;
use rinkside_core::{TracingConfig, init_tracing};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut tracing_config = match (cli.log_json, cli.debug) {
        (true, _) => TracingConfig::structured(),
        (false, true) => TracingConfig::cli_debug(),
        (false, false) => TracingConfig::cli(),
    };
    if cli.debug {
        tracing_config = tracing_config.with_level(Level::DEBUG);
    }
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("warning: {}", e);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    let config = match cli.config {
        Some(ref path) => ClientConfig::load_from(path)?,
        None => ClientConfig::load()?,
    };
    let mut config = config.with_process_env();
    cli.apply_overrides(&mut config);

    match cli.command {
        Some(Command::FormatDate { ref date }) => commands::format_date::run(date),
        Some(Command::Config { ref action }) => match action {
            ConfigAction::Dump => commands::config::dump(&config),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(),
        },
        Some(Command::Schedule) | None => {
            commands::schedule::run(&config, cli.output_format(&config)).await
        }
    }
}
