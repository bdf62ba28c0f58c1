//! Configuration file tests.

use std::fs;
use std::time::Duration;

use memory_match::core::{GameConfig, MemoryError, TimingConfig};
use memory_match::session::GameSession;

/// Test saving and loading a config file.
#[test]
fn test_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memory.toml");

    let config = GameConfig::new()
        .with_pair_counts(vec![2, 4])
        .with_symbols(["cat", "dog", "fox", "owl"])
        .with_timing(TimingConfig {
            match_delay_ms: 300,
            flip_back_delay_ms: 800,
        });
    config.to_file(&path).unwrap();

    let loaded = GameConfig::from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

/// Test a loaded config drives the session's supported sizes and glyphs.
#[test]
fn test_loaded_config_drives_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memory.toml");
    fs::write(
        &path,
        r#"
pair_counts = [2]
symbols = ["X", "O"]
"#,
    )
    .unwrap();

    let config = GameConfig::from_file(&path).unwrap();
    let mut session = GameSession::new(config, 3).unwrap();

    assert!(matches!(
        session.configure(3),
        Err(MemoryError::InvalidConfiguration { pair_count: 3, .. })
    ));
    session.configure(2).unwrap();

    let mut glyphs: Vec<String> = session
        .snapshot()
        .cards
        .into_iter()
        .map(|c| c.glyph)
        .collect();
    glyphs.sort();
    assert_eq!(glyphs, vec!["O", "O", "X", "X"]);
}

/// Test a missing file surfaces an IO error.
#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, MemoryError::Io(_)));
}

/// Test semantically invalid files are rejected after parsing.
#[test]
fn test_invalid_values_rejected() {
    let err = GameConfig::from_toml_str("symbols = []\n").unwrap_err();
    assert!(matches!(err, MemoryError::Config { ref field, .. } if field == "symbols"));

    let err = GameConfig::from_toml_str("pair_counts = [0, 3]\n").unwrap_err();
    assert!(matches!(err, MemoryError::Config { ref field, .. } if field == "pair_counts"));
}

/// Test the timer period is not configurable: elapsed time is always whole seconds.
#[test]
fn test_tick_period_is_fixed() {
    let config =
        GameConfig::from_toml_str("[timing]\nmatch_delay_ms = 200\ntick_interval_ms = 250\n")
            .unwrap();
    assert_eq!(config.timing.match_delay_ms, 200);

    let mut session = GameSession::new(config, 3).unwrap();
    session.configure(3).unwrap();
    session.start();
    session.advance(Duration::from_millis(999));
    assert_eq!(session.elapsed_seconds(), 0);
    session.advance(Duration::from_millis(1));
    assert_eq!(session.elapsed_seconds(), 1);
}
