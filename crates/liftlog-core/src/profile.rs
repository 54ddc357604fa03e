//! User profile, body-weight log, and UI theme.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Lowest target weight suggested for a weight-loss goal, in kg.
pub const MIN_SUGGESTED_TARGET_KG: f64 = 30.0;

/// Offset between current and suggested target weight, in kg.
pub const TARGET_WEIGHT_STEP_KG: f64 = 5.0;

/// A body-weight reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub date: NaiveDate,
    /// Kilograms.
    pub weight: f64,
}

impl WeightEntry {
    pub fn new(date: NaiveDate, weight: f64) -> Self {
        Self { date, weight }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessGoal {
    Lose,
    Gain,
    Maintain,
}

impl FitnessGoal {
    /// Suggested target weight for a goal, or `None` when maintaining.
    pub fn default_target_weight(self, current_weight: f64) -> Option<f64> {
        match self {
            FitnessGoal::Lose => Some((current_weight - TARGET_WEIGHT_STEP_KG).max(MIN_SUGGESTED_TARGET_KG)),
            FitnessGoal::Gain => Some(current_weight + TARGET_WEIGHT_STEP_KG),
            FitnessGoal::Maintain => None,
        }
    }
}

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl std::str::FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ValidationError::invalid("theme", format!("expected light or dark, got '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    /// Current weight in kg.
    pub weight: f64,
    /// Height in cm.
    pub height: f64,
    pub fitness_level: FitnessLevel,
    pub fitness_goal: FitnessGoal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    /// Append-only log; not necessarily in date order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_history: Option<Vec<WeightEntry>>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "User".into(),
            age: 25,
            gender: Gender::Other,
            weight: 70.0,
            height: 175.0,
            fitness_level: FitnessLevel::Beginner,
            fitness_goal: FitnessGoal::Maintain,
            target_weight: None,
            weight_history: Some(Vec::new()),
        }
    }
}

impl UserProfile {
    /// Switch goal, filling in a target weight when one is needed and none
    /// was set, and clearing it when maintaining.
    pub fn with_goal(mut self, goal: FitnessGoal) -> Self {
        self.fitness_goal = goal;
        match goal {
            FitnessGoal::Maintain => self.target_weight = None,
            FitnessGoal::Lose | FitnessGoal::Gain => {
                if self.target_weight.is_none() {
                    self.target_weight = goal.default_target_weight(self.weight);
                }
            }
        }
        self
    }

    /// Weight log, empty when never recorded.
    pub fn history(&self) -> &[WeightEntry] {
        self.weight_history.as_deref().unwrap_or(&[])
    }

    /// Append a reading and make it the current weight.
    pub fn record_weight(&mut self, entry: WeightEntry) {
        self.weight = entry.weight;
        self.weight_history.get_or_insert_with(Vec::new).push(entry);
    }

    /// # Errors
    /// Returns the first field that fails validation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().chars().count() < 2 {
            return Err(ValidationError::invalid("name", "name must have at least 2 characters"));
        }
        validate_weight(self.weight)?;
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(ValidationError::invalid("height", "height must be a positive number"));
        }
        if let Some(target) = self.target_weight {
            if !(target.is_finite() && target > 0.0) {
                return Err(ValidationError::invalid("targetWeight", "target weight must be a positive number"));
            }
        }
        Ok(())
    }
}

/// # Errors
/// Rejects non-finite and non-positive weights.
pub fn validate_weight(weight: f64) -> Result<(), ValidationError> {
    if weight.is_finite() && weight > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::invalid("weight", format!("{weight} is not a positive weight")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    #[test]
    fn lose_goal_suggests_lower_target_with_floor() {
        assert_eq!(FitnessGoal::Lose.default_target_weight(80.0), Some(75.0));
        assert_eq!(FitnessGoal::Lose.default_target_weight(33.0), Some(30.0));
        assert_eq!(FitnessGoal::Gain.default_target_weight(60.0), Some(65.0));
        assert_eq!(FitnessGoal::Maintain.default_target_weight(60.0), None);
    }

    #[test]
    fn with_goal_keeps_existing_target_and_clears_on_maintain() {
        let profile = UserProfile {
            target_weight: Some(68.0),
            ..UserProfile::default()
        };
        let losing = profile.with_goal(FitnessGoal::Lose);
        assert_eq!(losing.target_weight, Some(68.0));

        let maintaining = losing.with_goal(FitnessGoal::Maintain);
        assert_eq!(maintaining.target_weight, None);

        let gaining = maintaining.with_goal(FitnessGoal::Gain);
        assert_eq!(gaining.target_weight, Some(75.0));
    }

    #[test]
    fn record_weight_appends_and_updates_current() {
        let mut profile = UserProfile {
            weight_history: None,
            ..UserProfile::default()
        };
        assert!(profile.history().is_empty());

        profile.record_weight(WeightEntry::new(day(2), 71.5));
        profile.record_weight(WeightEntry::new(day(1), 70.8));

        assert_eq!(profile.weight, 70.8);
        let dates: Vec<_> = profile.history().iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![day(2), day(1)]);
    }

    #[test]
    fn validate_rejects_short_name_and_bad_numbers() {
        let mut profile = UserProfile {
            name: " A ".into(),
            ..UserProfile::default()
        };
        assert!(profile.validate().is_err());

        profile.name = "Al".into();
        assert!(profile.validate().is_ok());

        profile.height = 0.0;
        assert!(profile.validate().is_err());
        profile.height = 180.0;

        profile.weight = f64::NAN;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn profile_json_matches_storage_layout() {
        let json = r#"{"name":"Sam","age":31,"gender":"female","weight":64.5,"height":168,
            "fitnessLevel":"intermediate","fitnessGoal":"lose","targetWeight":60,
            "weightHistory":[{"date":"2024-07-01","weight":66.0}]}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.fitness_level, FitnessLevel::Intermediate);
        assert_eq!(profile.target_weight, Some(60.0));
        assert_eq!(profile.history().len(), 1);

        let value = serde_json::to_value(UserProfile::default()).unwrap();
        assert!(value.get("targetWeight").is_none());
        assert_eq!(value["fitnessGoal"], "maintain");
    }

    #[test]
    fn theme_parses_case_insensitively() {
        assert_eq!("Light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(Theme::default(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
    }
}
