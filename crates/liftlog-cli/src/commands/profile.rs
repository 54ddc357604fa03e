//! Profile, onboarding and theme commands for CLI.

use clap::Subcommand;
use liftlog_core::{FitnessGoal, FitnessLevel, Gender, Theme, UserProfile};
use serde::de::DeserializeOwned;
use serde_json::json;

use super::{open_store, print_json, today, CmdResult};

/// Parse a lowercase enum value the way it is stored.
fn parse_stored<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    let value = serde_json::Value::String(raw.trim().to_ascii_lowercase());
    serde_json::from_value(value).map_err(|_| format!("unrecognized value '{raw}'"))
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the profile, theme and onboarding state
    Show,
    /// Complete onboarding with a new profile
    Onboard {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: u32,
        /// male, female or other
        #[arg(long, value_parser = parse_stored::<Gender>)]
        gender: Gender,
        /// Weight in kg
        #[arg(long)]
        weight: f64,
        /// Height in cm
        #[arg(long)]
        height: f64,
        /// beginner, intermediate or advanced
        #[arg(long, value_parser = parse_stored::<FitnessLevel>)]
        level: FitnessLevel,
        /// lose, gain or maintain
        #[arg(long, value_parser = parse_stored::<FitnessGoal>)]
        goal: FitnessGoal,
        /// Target weight in kg (suggested from the goal when omitted)
        #[arg(long)]
        target_weight: Option<f64>,
    },
    /// Edit the stored profile; omitted fields keep their value
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        age: Option<u32>,
        /// male, female or other
        #[arg(long, value_parser = parse_stored::<Gender>)]
        gender: Option<Gender>,
        /// Weight in kg
        #[arg(long)]
        weight: Option<f64>,
        /// Height in cm
        #[arg(long)]
        height: Option<f64>,
        /// beginner, intermediate or advanced
        #[arg(long, value_parser = parse_stored::<FitnessLevel>)]
        level: Option<FitnessLevel>,
        /// lose, gain or maintain
        #[arg(long, value_parser = parse_stored::<FitnessGoal>)]
        goal: Option<FitnessGoal>,
        /// Target weight in kg
        #[arg(long)]
        target_weight: Option<f64>,
    },
    /// Switch between light and dark theme
    Theme {
        /// light or dark
        theme: Theme,
    },
}

pub fn run(action: ProfileAction) -> CmdResult {
    let mut store = open_store()?;

    match action {
        ProfileAction::Show => print_json(&json!({
            "profile": store.profile(),
            "theme": store.theme(),
            "onboardingComplete": store.onboarding_complete(),
        }))?,
        ProfileAction::Onboard {
            name,
            age,
            gender,
            weight,
            height,
            level,
            goal,
            target_weight,
        } => {
            let profile = UserProfile {
                name,
                age,
                gender,
                weight,
                height,
                fitness_level: level,
                fitness_goal: goal,
                target_weight,
                weight_history: None,
            }
            .with_goal(goal);
            store.complete_onboarding(profile, today())?;
            eprintln!("Onboarding complete");
            print_json(store.profile())?;
        }
        ProfileAction::Update {
            name,
            age,
            gender,
            weight,
            height,
            level,
            goal,
            target_weight,
        } => {
            let current = store.profile().clone();
            let mut profile = UserProfile {
                name: name.unwrap_or(current.name),
                age: age.unwrap_or(current.age),
                gender: gender.unwrap_or(current.gender),
                weight: weight.unwrap_or(current.weight),
                height: height.unwrap_or(current.height),
                fitness_level: level.unwrap_or(current.fitness_level),
                target_weight: target_weight.or(current.target_weight),
                ..current
            };
            if let Some(goal) = goal.filter(|g| *g != profile.fitness_goal) {
                if target_weight.is_none() {
                    profile.target_weight = None;
                }
                profile = profile.with_goal(goal);
            }
            store.update_profile(profile)?;
            eprintln!("Profile updated");
            print_json(store.profile())?;
        }
        ProfileAction::Theme { theme } => {
            store.set_theme(theme)?;
            println!("Theme set to {theme:?}");
        }
    }
    Ok(())
}
