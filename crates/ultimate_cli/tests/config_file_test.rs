//! Loading session configs from disk.

use std::io::Write;
use ultimate_cli::{PlayMode, SessionConfig};
use ultimate_tictactoe::Mark;

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
mode = "single"
human = "O"
ai_delay_ms = 0
seed = 77
log_level = "debug"
"#
    )
    .unwrap();

    let config = SessionConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.mode(), PlayMode::Single);
    assert_eq!(*config.human(), Mark::O);
    assert_eq!(*config.ai_delay_ms(), 0);
    assert_eq!(*config.seed(), Some(77));
    assert_eq!(config.log_level(), "debug");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SessionConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_cli_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"multi\"\nai_delay_ms = 250").unwrap();

    let config = SessionConfig::from_file(file.path())
        .unwrap()
        .with_overrides(Some(PlayMode::Single), None, Some(0), None, None);
    assert_eq!(*config.mode(), PlayMode::Single);
    assert_eq!(*config.ai_delay_ms(), 0);
}
