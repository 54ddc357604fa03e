pub mod config;
pub mod profile;
pub mod progress;
pub mod session;
pub mod set;
pub mod weight;

use chrono::{Local, NaiveDate};
use liftlog_core::{Config, Database, TrackerStore};
use tracing::debug;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Open the store in the configured data directory.
pub fn open_store() -> Result<TrackerStore, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let db = Database::open(&config)?;
    debug!(path = ?db.path(), seed = config.seed_defaults, "opening store");
    Ok(TrackerStore::load(db, config.seed_defaults)?)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
