//! Config file loading tests.

use gridlock::TuiConfig;
use ratatui::style::Color;
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "log_file = \"custom.log\"\nlog_filter = \"debug\"\nhighlight_color = \"green\""
    )
    .expect("write");

    let config = TuiConfig::load(Some(file.path())).expect("load");
    assert_eq!(config.log_file().to_str(), Some("custom.log"));
    assert_eq!(config.log_filter(), "debug");
    let theme = config.theme().expect("theme");
    assert_eq!(theme.highlight, Color::Green);
    assert_eq!(theme.x, Color::Blue);
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.toml");
    let err = TuiConfig::load(Some(missing.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_toml_is_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "show_help = \"sometimes\"").expect("write");
    let err = TuiConfig::load(Some(file.path())).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
