//! Starter data for a store that has never been written.

use chrono::NaiveDate;

use crate::workout::{ExerciseItem, RestItem, WorkoutItem, WorkoutSession, WorkoutSet};

fn exercise(id: &str, name: &str, sets: u32, reps: u32, categories: &[&str]) -> WorkoutItem {
    WorkoutItem::Exercise(ExerciseItem {
        id: id.into(),
        name: name.into(),
        sets,
        reps,
        categories: categories.iter().map(|c| c.to_string()).collect(),
    })
}

pub(crate) fn starter_sets() -> Vec<WorkoutSet> {
    vec![
        WorkoutSet {
            id: "set1".into(),
            name: "Full Body Strength".into(),
            items: vec![
                exercise("ex1", "Squats", 3, 12, &["Lower Body", "Strength"]),
                WorkoutItem::Rest(RestItem {
                    id: "rest1".into(),
                    duration_secs: 60,
                }),
                exercise("ex2", "Push-ups", 3, 15, &["Upper Body", "Core", "Strength"]),
                exercise("ex3", "Plank", 3, 60, &["Core"]),
            ],
        },
        WorkoutSet {
            id: "set2".into(),
            name: "Upper Body Focus".into(),
            items: vec![
                exercise("ex4", "Bicep Curls", 3, 12, &["Upper Body", "Strength"]),
                exercise("ex5", "Tricep Dips", 3, 12, &["Upper Body", "Strength"]),
            ],
        },
    ]
}

pub(crate) fn starter_sessions() -> Vec<WorkoutSession> {
    let session = |id: &str, set_id: &str, set_name: &str, (y, m, d): (i32, u32, u32), duration_min: u32| {
        WorkoutSession {
            id: id.into(),
            set_id: set_id.into(),
            set_name: set_name.into(),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
            duration_min,
        }
    };
    vec![
        session("sess1", "set1", "Full Body Strength", (2024, 7, 20), 45),
        session("sess2", "set2", "Upper Body Focus", (2024, 7, 22), 30),
    ]
}
