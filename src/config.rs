use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{CrudqlError, Result};

/// Top-level configuration structure parsed from a TOML file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database-related configuration.
///
/// Every field is optional; [`crate::db::connection::open_with_config`]
/// falls back to an in-memory database with foreign keys enabled.
#[derive(Debug, Default, Deserialize)]
pub struct DatabaseConfig {
    pub path: Option<String>,
    pub busy_timeout_ms: Option<u64>,
    pub foreign_keys: Option<bool>,
    pub journal_mode: Option<String>,
}

/// Loads configuration from a TOML file at the given path.
///
/// A missing or unreadable file surfaces as `CrudqlError::Io`; a file that
/// does not parse as the expected TOML shape surfaces as
/// `CrudqlError::Config`.
///
/// # Example
///
/// ```no_run
/// let config = crudql::config::load_config("config.toml").expect("Failed to load config");
/// println!("{:?}", config.database.path);
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| CrudqlError::Config(e.to_string()))
}

/// Conventional location for the config file (`<config dir>/crudql/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("crudql").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE_CONFIG: &str = r#"
[database]
path = "app.db"
busy_timeout_ms = 5000
foreign_keys = true
journal_mode = "WAL"
"#;

    #[test]
    fn test_parse_sample_config() {
        let config: Config = toml::from_str(SAMPLE_CONFIG).expect("Failed to parse sample config");
        assert_eq!(config.database.path.unwrap(), "app.db");
        assert_eq!(config.database.busy_timeout_ms.unwrap(), 5000);
        assert_eq!(config.database.foreign_keys.unwrap(), true);
        assert_eq!(config.database.journal_mode.unwrap(), "WAL");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").expect("Failed to parse empty config");
        assert!(config.database.path.is_none());
        assert!(config.database.busy_timeout_ms.is_none());
        assert!(config.database.foreign_keys.is_none());
        assert!(config.database.journal_mode.is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CONFIG.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.database.path.unwrap(), "app.db");
    }

    #[test]
    fn test_load_config_missing_file() {
        match load_config("/nonexistent/crudql/config.toml") {
            Err(CrudqlError::Io(_)) => {}
            _ => panic!("Expected IO error"),
        }
    }

    #[test]
    fn test_load_config_rejects_malformed_toml() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[database\npath = ").unwrap();

        match load_config(file.path()) {
            Err(CrudqlError::Config(_)) => {}
            _ => panic!("Expected config error"),
        }
    }
}
