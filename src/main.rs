//! meshctl - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::debug;

use meshctl::{run_context_command, run_token_command, Cli, Command, ConfigStore};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .format_timestamp(None)
        .init();

    let store = ConfigStore::from_override(cli.config.as_deref());
    debug!("Using config file {}", store.path().display());

    let result = match &cli.command {
        Command::Token { action } => run_token_command(action, &store),
        Command::Context { action } => run_context_command(action, &store),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
