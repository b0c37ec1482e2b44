/// Connection Bootstrap Module
///
/// This module opens SQLite connections with the crate's default pragmas
/// applied. The connection is handed back to the caller, who owns its
/// lifecycle; every data-access operation borrows it explicitly.
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::config::DatabaseConfig;
use crate::core::error::{CrudqlError, Result};

/// Journal modes SQLite accepts for `PRAGMA journal_mode`.
const JOURNAL_MODES: [&str; 6] = ["DELETE", "TRUNCATE", "PERSIST", "MEMORY", "WAL", "OFF"];

/// Opens a file-backed database with the default pragmas
/// (`foreign_keys = ON`, `journal_mode = WAL`).
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    debug!("Opening database at {:?}", path.as_ref());
    let conn = Connection::open(path)?;
    conn.execute_batch(
        "
        PRAGMA foreign_keys = ON;
        PRAGMA journal_mode = WAL;
    ",
    )?;
    Ok(conn)
}

/// Opens an in-memory database with `foreign_keys = ON`.
///
/// In-memory databases ignore `journal_mode = WAL`, so it is not requested.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    Ok(conn)
}

/// Opens a connection as described by a [`DatabaseConfig`]: file-backed when
/// a path is configured, in-memory otherwise, with the configured pragmas
/// applied.
pub fn open_with_config(config: &DatabaseConfig) -> Result<Connection> {
    let conn = match &config.path {
        Some(path) => {
            debug!("Opening configured database at {:?}", path);
            Connection::open(path)?
        }
        None => {
            debug!("Opening configured in-memory database");
            Connection::open_in_memory()?
        }
    };

    if config.foreign_keys.unwrap_or(true) {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    }

    if let Some(mode) = &config.journal_mode {
        let mode = normalize_journal_mode(mode)?;
        conn.execute_batch(&format!("PRAGMA journal_mode = {};", mode))?;
    }

    if let Some(ms) = config.busy_timeout_ms {
        conn.busy_timeout(Duration::from_millis(ms))?;
    }

    Ok(conn)
}

/// Checks a configured journal mode against the modes SQLite knows.
fn normalize_journal_mode(mode: &str) -> Result<&'static str> {
    JOURNAL_MODES
        .iter()
        .find(|known| known.eq_ignore_ascii_case(mode))
        .copied()
        .ok_or_else(|| CrudqlError::Config(format!("unknown journal mode: {}", mode)))
}
