//! Application configuration loaded from TOML.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use roshambo_core::{DEFAULT_ROUND_LIMIT, DesiredOutcome, RandomOpponent, Session, Sign};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Game and logging preferences.
///
/// Every key is optional in the file:
///
/// ```toml
/// round_limit = 10
/// default_sign = "paper"
/// default_goal = "win"
/// seed = 42
/// log_file = "roshambo.log"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Rounds per session.
    #[serde(default = "default_round_limit")]
    round_limit: u32,

    /// Sign selected when the game starts.
    #[serde(default = "default_sign")]
    default_sign: Sign,

    /// Goal selected when the game starts.
    #[serde(default)]
    default_goal: DesiredOutcome,

    /// Seed for the computer's draws. Unset means OS entropy.
    #[serde(default)]
    seed: Option<u64>,

    /// Where the TUI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_round_limit() -> u32 {
    DEFAULT_ROUND_LIMIT
}

fn default_sign() -> Sign {
    Sign::Paper
}

fn default_log_file() -> PathBuf {
    PathBuf::from("roshambo.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            round_limit: default_round_limit(),
            default_sign: default_sign(),
            default_goal: DesiredOutcome::default(),
            seed: None,
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(round_limit = config.round_limit, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the configured seed when `seed` is set.
    #[instrument(skip(self))]
    pub fn with_seed_override(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            debug!(?seed, "Overriding seed");
            self.seed = seed;
        }
        self
    }

    /// Replaces the round limit.
    #[instrument(skip(self))]
    pub fn with_round_limit(mut self, round_limit: u32) -> Result<Self, ConfigError> {
        self.round_limit = round_limit;
        self.validate()?;
        Ok(self)
    }

    /// Creates an empty session honoring the configured round limit.
    #[instrument(skip(self))]
    pub fn new_session(&self) -> Result<Session, ConfigError> {
        Session::with_round_limit(self.round_limit)
            .map_err(|e| ConfigError::new(format!("Invalid session settings: {}", e)))
    }

    /// Creates the computer opponent, seeded if a seed is configured.
    #[instrument(skip(self))]
    pub fn opponent(&self) -> RandomOpponent {
        match self.seed {
            Some(seed) => RandomOpponent::seeded(seed),
            None => RandomOpponent::from_entropy(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.round_limit == 0 {
            return Err(ConfigError::new(
                "round_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_defaults() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = AppConfig::from_toml("default_sign = \"rock\"\nseed = 7\n").unwrap();
        assert_eq!(*config.default_sign(), Sign::Rock);
        assert_eq!(*config.seed(), Some(7));
        assert_eq!(*config.round_limit(), DEFAULT_ROUND_LIMIT);
        assert_eq!(*config.default_goal(), DesiredOutcome::Win);
    }

    #[test]
    fn test_zero_round_limit_rejected() {
        let err = AppConfig::from_toml("round_limit = 0").unwrap_err();
        assert!(err.message.contains("round_limit"));
    }

    #[test]
    fn test_unknown_sign_rejected() {
        assert!(AppConfig::from_toml("default_sign = \"lizard\"").is_err());
    }

    #[test]
    fn test_seed_override_only_when_set() {
        let config = AppConfig::default().with_seed_override(Some(3));
        assert_eq!(*config.seed(), Some(3));
        let config = config.with_seed_override(None);
        assert_eq!(*config.seed(), Some(3));
    }

    #[test]
    fn test_new_session_uses_limit() {
        let config = AppConfig::default().with_round_limit(4).unwrap();
        assert_eq!(config.new_session().unwrap().state().round_limit(), 4);
    }
}
