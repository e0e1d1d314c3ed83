use anyhow::Result;

use golden_stats::cli::{Cli, Command};
use golden_stats::{handle_set_api_key, handle_stats, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Stats { player, json } => handle_stats(cli, player.as_deref(), *json),
        Command::SetApiKey { key } => handle_set_api_key(cli, key),
    }
}
