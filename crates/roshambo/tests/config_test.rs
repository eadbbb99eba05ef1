//! Tests for loading the TOML configuration file.

use std::io::Write;

use roshambo::AppConfig;
use roshambo_core::{DesiredOutcome, Sign};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write config");
    file
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(*config.round_limit(), 10);
    assert_eq!(*config.default_sign(), Sign::Paper);
    assert_eq!(*config.default_goal(), DesiredOutcome::Win);
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_full_file_is_loaded() {
    let file = write_config(
        r#"
round_limit = 5
default_sign = "scissors"
default_goal = "lose"
seed = 1234
log_file = "game.log"
"#,
    );
    let config = AppConfig::load_or_default(file.path()).unwrap();
    assert_eq!(*config.round_limit(), 5);
    assert_eq!(*config.default_sign(), Sign::Scissors);
    assert_eq!(*config.default_goal(), DesiredOutcome::Lose);
    assert_eq!(*config.seed(), Some(1234));
    assert_eq!(config.log_file(), &std::path::PathBuf::from("game.log"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let file = write_config("round_limit = [");
    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_zero_round_limit_is_an_error() {
    let file = write_config("round_limit = 0");
    assert!(AppConfig::load_or_default(file.path()).is_err());
}

#[test]
fn test_seeded_config_gives_reproducible_sessions() {
    use roshambo_core::Opponent;

    let config = AppConfig::from_toml("seed = 77").unwrap();
    let mut a = config.opponent();
    let mut b = config.opponent();
    for _ in 0..20 {
        assert_eq!(a.choose(), b.choose());
    }
}
