use clap::Subcommand;

use super::{open_store, print_json, CmdResult};

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Score per training category (0 to 10)
    Categories,
    /// Weight history tagged by direction of change
    WeightTrend,
}

pub fn run(action: ProgressAction) -> CmdResult {
    let store = open_store()?;

    match action {
        ProgressAction::Categories => print_json(&store.progress())?,
        ProgressAction::WeightTrend => print_json(&store.weight_trend())?,
    }
    Ok(())
}
