//! Command-line interface for roshambo.

use clap::{Parser, Subcommand};
use roshambo_core::{DesiredOutcome, Sign};

/// Roshambo - rock, paper, scissors against the computer
#[derive(Parser, Debug)]
#[command(name = "roshambo")]
#[command(about = "Pick a sign, pick a goal, and try to score over ten rounds", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, default_value = "roshambo.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Seed for the computer's draws (overrides the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Resolve a single round and print the result
    Round {
        /// Your sign: rock, paper, scissors (or r, p, s)
        #[arg(short, long)]
        sign: Sign,

        /// Your goal: win or lose
        #[arg(short, long, default_value = "win")]
        goal: DesiredOutcome,

        /// Force the computer's sign instead of drawing it
        #[arg(long)]
        computer: Option<Sign>,
    },

    /// Auto-play a full session with the same picks every round
    Session {
        /// Your sign: rock, paper, scissors (or r, p, s)
        #[arg(short, long)]
        sign: Sign,

        /// Your goal: win or lose
        #[arg(short, long, default_value = "win")]
        goal: DesiredOutcome,

        /// Rounds in the session (overrides the config file)
        #[arg(short, long)]
        rounds: Option<u32>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["roshambo"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, std::path::PathBuf::from("roshambo.toml"));
    }

    #[test]
    fn test_round_parses_signs() {
        let cli = Cli::try_parse_from([
            "roshambo", "round", "--sign", "rock", "--goal", "lose", "--computer", "✂️",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Round {
                sign: Sign::Rock,
                goal: DesiredOutcome::Lose,
                computer: Some(Sign::Scissors),
            })
        );
    }

    #[test]
    fn test_global_seed_after_subcommand() {
        let cli = Cli::try_parse_from(["roshambo", "session", "-s", "p", "--seed", "9"]).unwrap();
        assert_eq!(cli.seed, Some(9));
        assert!(matches!(
            cli.command,
            Some(Command::Session { sign: Sign::Paper, goal: DesiredOutcome::Win, rounds: None })
        ));
    }

    #[test]
    fn test_invalid_sign_rejected() {
        assert!(Cli::try_parse_from(["roshambo", "round", "--sign", "lizard"]).is_err());
    }
}
