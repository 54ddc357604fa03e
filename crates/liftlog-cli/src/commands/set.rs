//! Workout set commands for CLI.

use clap::Subcommand;
use liftlog_core::{ItemDraft, ValidationError, WorkoutSetDraft};

use super::{open_store, print_json, CmdResult};

#[derive(Subcommand)]
pub enum SetAction {
    /// List all workout sets
    List,
    /// Show one workout set
    Show {
        /// Set ID
        id: String,
    },
    /// Create a workout set
    Create {
        /// Set name
        name: String,
        /// Item in execution order: "Name:SETS:REPS:Cat,Cat" or "rest:SECS"
        #[arg(long = "item", required = true)]
        items: Vec<ItemDraft>,
    },
    /// Delete a workout set and every session logged against it
    Delete {
        /// Set ID
        id: String,
    },
}

pub fn run(action: SetAction) -> CmdResult {
    let mut store = open_store()?;

    match action {
        SetAction::List => print_json(store.workout_sets())?,
        SetAction::Show { id } => {
            let set = store.workout_set(&id).ok_or(ValidationError::NotFound {
                kind: "workout set",
                id: id.clone(),
            })?;
            print_json(set)?;
        }
        SetAction::Create { name, items } => {
            let draft = items.into_iter().fold(WorkoutSetDraft::new(name), WorkoutSetDraft::item);
            let set = store.add_workout_set(draft)?;
            eprintln!("Workout set created: {}", set.id);
            print_json(set)?;
        }
        SetAction::Delete { id } => {
            let removed = store.delete_workout_set(&id)?;
            println!("Workout set deleted: {id} ({removed} sessions removed)");
        }
    }
    Ok(())
}
