mod config;
pub mod database;
mod defaults;
pub mod store;

pub use config::{Config, LoggingConfig, StorageConfig};
pub use database::Database;
pub use store::TrackerStore;

use std::path::PathBuf;

use crate::error::Result;

/// Overrides the data directory when set (used by tests and portable installs).
pub const DATA_DIR_ENV: &str = "LIFTLOG_DATA_DIR";

/// Returns the data directory, creating it if needed.
///
/// `$LIFTLOG_DATA_DIR` wins when set; otherwise `~/.config/liftlog[-dev]/`
/// based on LIFTLOG_ENV. Set LIFTLOG_ENV=dev to use the development
/// directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os(DATA_DIR_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("LIFTLOG_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("liftlog-dev")
            } else {
                base_dir.join("liftlog")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
