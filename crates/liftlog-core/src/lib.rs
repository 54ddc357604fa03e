//! # Liftlog Core Library
//!
//! Core logic for Liftlog, a personal fitness tracker. Every operation is
//! available through the `liftlog` CLI binary, which is a thin layer over
//! this crate.
//!
//! ## Architecture
//!
//! - **Workout model**: workout sets built from exercise and rest items,
//!   and the sessions logged against them
//! - **Profile**: user profile, body-weight log and theme
//! - **Stats**: category progress scoring and weight-trend segmentation,
//!   both pure functions over the stored collections
//! - **Storage**: SQLite key-value persistence and TOML configuration
//!
//! ## Key Components
//!
//! - [`TrackerStore`]: owner of the canonical collections
//! - [`aggregate`]: session history to a six-category progress vector
//! - [`segment`]: weight history to up/down/same chart points
//! - [`Config`]: application configuration management

pub mod error;
pub mod profile;
pub mod stats;
pub mod storage;
pub mod workout;

pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use profile::{FitnessGoal, FitnessLevel, Gender, Theme, UserProfile, WeightEntry};
pub use stats::{aggregate, segment, weight_changes, CategoryScore, ProgressVector, Trend, TrendPoint};
pub use storage::{Config, Database, TrackerStore};
pub use workout::{
    Category, ExerciseItem, ItemDraft, NewSession, RestItem, WorkoutItem, WorkoutSession,
    WorkoutSet, WorkoutSetDraft,
};
