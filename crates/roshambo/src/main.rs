//! Roshambo - unified CLI.

use anyhow::Result;
use clap::Parser;
use roshambo::{AppConfig, Cli, Command, logging, run_round, run_session, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Tui);

    if command != Command::Tui {
        logging::init_stderr_logging();
    }

    let config = AppConfig::load_or_default(&cli.config)?.with_seed_override(cli.seed);

    match command {
        Command::Tui => {
            logging::init_file_logging(config.log_file())?;
            info!(config = ?config, "Configuration resolved");
            tui::run_tui(&config)
        }
        Command::Round {
            sign,
            goal,
            computer,
        } => run_round(&config, sign, goal, computer, &mut std::io::stdout()),
        Command::Session { sign, goal, rounds } => {
            run_session(&config, sign, goal, rounds, &mut std::io::stdout())
        }
    }
}
