//! Body-weight commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use liftlog_core::stats::round_to_tenth;
use serde::Serialize;

use super::{open_store, print_json, today, CmdResult};

#[derive(Subcommand)]
pub enum WeightAction {
    /// Record a weight reading
    Log {
        /// Weight in kg
        #[arg(allow_negative_numbers = true)]
        kg: f64,
        /// Date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show the weight log with the change from each previous reading
    History,
}

#[derive(Serialize)]
struct HistoryRow {
    date: NaiveDate,
    weight: f64,
    change: Option<f64>,
}

pub fn run(action: WeightAction) -> CmdResult {
    let mut store = open_store()?;

    match action {
        WeightAction::Log { kg, date } => {
            let date = date.unwrap_or_else(today);
            store.add_weight_entry(kg, date)?;
            println!("Weight logged: {kg} kg on {date}");
        }
        WeightAction::History => {
            let rows: Vec<HistoryRow> = store
                .profile()
                .history()
                .iter()
                .zip(store.weight_changes())
                .map(|(entry, change)| HistoryRow {
                    date: entry.date,
                    weight: entry.weight,
                    change: change.map(round_to_tenth),
                })
                .collect();
            print_json(&rows)?;
        }
    }
    Ok(())
}
