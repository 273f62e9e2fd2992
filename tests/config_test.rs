//! Tests for loading configuration from disk.

use noughts::{NoughtsConfig, TableError, TableManager};
use std::io::Write;

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_filter = \"debug,noughts_core=trace\"").unwrap();
    writeln!(file, "max_tables = 2").unwrap();

    let config = NoughtsConfig::from_file(file.path()).unwrap();
    assert_eq!(config.log_filter(), "debug,noughts_core=trace");
    assert_eq!(*config.max_tables(), 2);
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = NoughtsConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_config_limits_registry() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_tables = 1").unwrap();
    let config = NoughtsConfig::from_file(file.path()).unwrap();

    let manager = TableManager::new(&config);
    manager.create_table("one".to_string()).unwrap();
    assert_eq!(
        manager.create_table("two".to_string()),
        Err(TableError::TableLimit { limit: 1 })
    );
}
