//! Roshambo - rock, paper, scissors in the terminal.
//!
//! The game rules and session state live in [`roshambo_core`]; this crate
//! adds configuration, logging, the command-line surface, and the TUI.
//!
//! # Architecture
//!
//! - **Config**: optional TOML file with session and logging preferences
//! - **Commands**: one-shot `round` and auto-played `session` output
//! - **TUI**: single-screen game with sign/goal pickers and result prompts

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
pub mod logging;
pub mod tui;

pub use cli::{Cli, Command};
pub use commands::{run_round, run_session};
pub use config::{AppConfig, ConfigError};
