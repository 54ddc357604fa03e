//! The canonical collections and their persistence.
//!
//! [`TrackerStore`] keeps workout sets, sessions, the profile (with its
//! weight log), the theme, and the onboarding flag in memory, mirrored to
//! the kv table. Every mutation validates its input, writes the whole
//! affected collection, and only then swaps the in-memory copy, so a failed
//! write leaves the store unchanged.
//!
//! Values that fail to deserialize fall back to their defaults instead of
//! failing the load.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use super::defaults::{starter_sessions, starter_sets};
use super::Database;
use crate::error::{Result, ValidationError};
use crate::profile::{validate_weight, Theme, UserProfile, WeightEntry};
use crate::stats::{self, ProgressVector, TrendPoint};
use crate::workout::{NewSession, WorkoutSession, WorkoutSet, WorkoutSetDraft};

pub const SETS_KEY: &str = "workoutSets";
pub const SESSIONS_KEY: &str = "workoutSessions";
pub const PROFILE_KEY: &str = "userProfile";
pub const THEME_KEY: &str = "theme";
pub const ONBOARDING_KEY: &str = "onboardingComplete";

/// Owner of the canonical collections.
pub struct TrackerStore {
    db: Database,
    seed_defaults: bool,
    sets: Vec<WorkoutSet>,
    sessions: Vec<WorkoutSession>,
    profile: UserProfile,
    theme: Theme,
    onboarding_complete: bool,
}

impl TrackerStore {
    /// Load every collection from `db`.
    ///
    /// A store that has never been written starts from the starter sets and
    /// sessions when `seed_defaults` is set; see [`TrackerStore::reload`].
    ///
    /// # Errors
    /// Same as [`TrackerStore::reload`].
    pub fn load(db: Database, seed_defaults: bool) -> Result<Self> {
        let mut store = Self {
            db,
            seed_defaults,
            sets: Vec::new(),
            sessions: Vec::new(),
            profile: UserProfile::default(),
            theme: Theme::default(),
            onboarding_complete: false,
        };
        store.reload()?;
        Ok(store)
    }

    /// Re-read every collection, picking up writes made by another process.
    ///
    /// Starter data is used only when neither sets nor sessions have ever
    /// been written; it is persisted right away so later loads see a
    /// consistent pair. Otherwise a missing collection loads empty.
    ///
    /// # Errors
    /// Returns an error if the database cannot be read, or the starter data
    /// cannot be written.
    pub fn reload(&mut self) -> Result<()> {
        let never_written = self.db.kv_get(SETS_KEY)?.is_none() && self.db.kv_get(SESSIONS_KEY)?.is_none();
        if self.seed_defaults && never_written {
            let sets = starter_sets();
            let sessions = starter_sessions();
            self.db.kv_set_many(&[
                (SETS_KEY, serde_json::to_string(&sets)?),
                (SESSIONS_KEY, serde_json::to_string(&sessions)?),
            ])?;
            info!(sets = sets.len(), sessions = sessions.len(), "seeded starter data");
            self.sets = sets;
            self.sessions = sessions;
        } else {
            self.sets = read_key(&self.db, SETS_KEY, Vec::new)?;
            self.sessions = read_key(&self.db, SESSIONS_KEY, Vec::new)?;
        }
        self.profile = read_key(&self.db, PROFILE_KEY, UserProfile::default)?;
        self.theme = read_key(&self.db, THEME_KEY, Theme::default)?;
        self.onboarding_complete = read_key(&self.db, ONBOARDING_KEY, || false)?;
        Ok(())
    }

    fn write_key<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.db.kv_set(key, &json)?;
        Ok(())
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn workout_sets(&self) -> &[WorkoutSet] {
        &self.sets
    }

    pub fn workout_set(&self, id: &str) -> Option<&WorkoutSet> {
        self.sets.iter().find(|s| s.id == id)
    }

    /// Sessions, newest logged first.
    pub fn sessions(&self) -> &[WorkoutSession] {
        &self.sessions
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn onboarding_complete(&self) -> bool {
        self.onboarding_complete
    }

    /// Validate a draft and append it as a new set.
    ///
    /// # Errors
    /// Returns a validation error for an unusable draft, or a storage error.
    pub fn add_workout_set(&mut self, draft: WorkoutSetDraft) -> Result<&WorkoutSet> {
        let set = draft.build()?;
        let mut sets = self.sets.clone();
        sets.push(set);
        self.write_key(SETS_KEY, &sets)?;
        self.sets = sets;

        let added = &self.sets[self.sets.len() - 1];
        info!(set_id = %added.id, items = added.items.len(), "workout set added");
        Ok(added)
    }

    /// Delete a set together with every session that references it.
    ///
    /// Returns the number of sessions removed.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown id, or a storage error.
    pub fn delete_workout_set(&mut self, id: &str) -> Result<usize> {
        if self.workout_set(id).is_none() {
            return Err(ValidationError::NotFound {
                kind: "workout set",
                id: id.to_string(),
            }
            .into());
        }

        let sets: Vec<WorkoutSet> = self.sets.iter().filter(|s| s.id != id).cloned().collect();
        let sessions: Vec<WorkoutSession> = self
            .sessions
            .iter()
            .filter(|s| s.set_id != id)
            .cloned()
            .collect();
        let removed = self.sessions.len() - sessions.len();

        self.db.kv_set_many(&[
            (SETS_KEY, serde_json::to_string(&sets)?),
            (SESSIONS_KEY, serde_json::to_string(&sessions)?),
        ])?;
        self.sets = sets;
        self.sessions = sessions;

        info!(set_id = %id, sessions_removed = removed, "workout set deleted");
        Ok(removed)
    }

    /// Log a session against an existing set. New sessions go first.
    ///
    /// # Errors
    /// Returns a validation error for an unknown set or zero duration, or a
    /// storage error.
    pub fn add_session(&mut self, new: NewSession) -> Result<&WorkoutSession> {
        let set = self
            .workout_set(&new.set_id)
            .ok_or_else(|| ValidationError::UnknownWorkoutSet(new.set_id.clone()))?;
        if new.duration_min == 0 {
            return Err(ValidationError::invalid("duration", "duration must be at least one minute").into());
        }

        let session = WorkoutSession {
            id: Uuid::new_v4().to_string(),
            set_id: set.id.clone(),
            set_name: set.name.clone(),
            date: new.date,
            duration_min: new.duration_min,
        };

        let mut sessions = Vec::with_capacity(self.sessions.len() + 1);
        sessions.push(session);
        sessions.extend(self.sessions.iter().cloned());
        self.write_key(SESSIONS_KEY, &sessions)?;
        self.sessions = sessions;

        let added = &self.sessions[0];
        info!(session_id = %added.id, set_id = %added.set_id, date = %added.date, "session logged");
        Ok(added)
    }

    /// # Errors
    /// Returns `NotFound` for an unknown id, or a storage error.
    pub fn delete_session(&mut self, id: &str) -> Result<()> {
        let sessions: Vec<WorkoutSession> = self.sessions.iter().filter(|s| s.id != id).cloned().collect();
        if sessions.len() == self.sessions.len() {
            return Err(ValidationError::NotFound {
                kind: "session",
                id: id.to_string(),
            }
            .into());
        }
        self.write_key(SESSIONS_KEY, &sessions)?;
        self.sessions = sessions;
        info!(session_id = %id, "session deleted");
        Ok(())
    }

    /// Record a weight reading: becomes the current weight and is appended
    /// to the history.
    ///
    /// # Errors
    /// Returns a validation error for a non-positive weight, or a storage
    /// error.
    pub fn add_weight_entry(&mut self, weight: f64, date: NaiveDate) -> Result<()> {
        validate_weight(weight)?;
        let mut profile = self.profile.clone();
        profile.record_weight(WeightEntry::new(date, weight));
        self.write_key(PROFILE_KEY, &profile)?;
        self.profile = profile;
        info!(%date, weight, "weight logged");
        Ok(())
    }

    /// Store the profile from onboarding, seed its weight history with the
    /// entered weight, and mark onboarding done.
    ///
    /// # Errors
    /// Returns a validation error for an invalid profile, or a storage error.
    pub fn complete_onboarding(&mut self, profile: UserProfile, today: NaiveDate) -> Result<()> {
        profile.validate()?;
        let profile = UserProfile {
            weight_history: Some(vec![WeightEntry::new(today, profile.weight)]),
            ..profile
        };
        self.db.kv_set_many(&[
            (PROFILE_KEY, serde_json::to_string(&profile)?),
            (ONBOARDING_KEY, serde_json::to_string(&true)?),
        ])?;
        self.profile = profile;
        self.onboarding_complete = true;
        info!(name = %self.profile.name, "onboarding complete");
        Ok(())
    }

    /// Replace the profile as a whole.
    ///
    /// # Errors
    /// Returns a validation error for an invalid profile, or a storage error.
    pub fn update_profile(&mut self, profile: UserProfile) -> Result<()> {
        profile.validate()?;
        self.write_key(PROFILE_KEY, &profile)?;
        self.profile = profile;
        Ok(())
    }

    /// # Errors
    /// Returns a storage error if the write fails.
    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.write_key(THEME_KEY, &theme)?;
        self.theme = theme;
        Ok(())
    }

    /// Category scores over the current sets and sessions.
    pub fn progress(&self) -> ProgressVector {
        stats::aggregate(&self.sessions, &self.sets)
    }

    /// Chart points for the weight history.
    pub fn weight_trend(&self) -> Vec<TrendPoint> {
        stats::segment(self.profile.history())
    }

    /// Change from the previous reading for each history entry.
    pub fn weight_changes(&self) -> Vec<Option<f64>> {
        stats::weight_changes(self.profile.history())
    }
}

fn read_key<T, F>(db: &Database, key: &str, default: F) -> Result<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let Some(raw) = db.kv_get(key)? else {
        return Ok(default());
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!(key, error = %e, "stored value is malformed, using default");
            Ok(default())
        }
    }
}
