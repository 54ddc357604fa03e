//! Session logging commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use liftlog_core::NewSession;

use super::{open_store, print_json, today, CmdResult};

#[derive(Subcommand)]
pub enum SessionAction {
    /// List sessions, newest logged first
    List,
    /// Log a session against a workout set
    Log {
        /// Workout set ID
        set_id: String,
        /// Date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Duration in minutes
        #[arg(long, default_value_t = 45)]
        duration: u32,
    },
    /// Delete a session
    Delete {
        /// Session ID
        id: String,
    },
}

pub fn run(action: SessionAction) -> CmdResult {
    let mut store = open_store()?;

    match action {
        SessionAction::List => print_json(store.sessions())?,
        SessionAction::Log {
            set_id,
            date,
            duration,
        } => {
            let session = store.add_session(NewSession {
                set_id,
                date: date.unwrap_or_else(today),
                duration_min: duration,
            })?;
            eprintln!("Session logged: {}", session.id);
            print_json(session)?;
        }
        SessionAction::Delete { id } => {
            store.delete_session(&id)?;
            println!("Session deleted: {id}");
        }
    }
    Ok(())
}
