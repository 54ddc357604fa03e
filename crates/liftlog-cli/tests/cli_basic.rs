//! Basic CLI E2E tests.
//!
//! Each test drives the built binary against its own temporary data
//! directory and checks stdout/stderr and the exit code.

use std::process::Command;

use tempfile::TempDir;

struct Cli {
    dir: TempDir,
}

impl Cli {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Run a CLI command and return (stdout, stderr, exit code).
    fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = Command::new(env!("CARGO_BIN_EXE_liftlog"))
            .args(args)
            .env("LIFTLOG_DATA_DIR", self.dir.path())
            .env_remove("LIFTLOG_LOG")
            .output()
            .expect("Failed to execute CLI command");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let code = output.status.code().unwrap_or(-1);
        (stdout, stderr, code)
    }

    fn success(&self, args: &[&str]) -> String {
        let (stdout, stderr, code) = self.run(args);
        assert_eq!(code, 0, "CLI command failed: {args:?}\n{stderr}");
        stdout
    }

    fn json(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.success(args);
        serde_json::from_str(&stdout).expect("Failed to parse JSON output")
    }
}

#[test]
fn fresh_data_dir_has_starter_sets() {
    let cli = Cli::new();
    let sets = cli.json(&["set", "list"]);
    let names: Vec<_> = sets.as_array().unwrap().iter().map(|s| s["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Full Body Strength", "Upper Body Focus"]);
    assert!(cli.dir.path().join("config.toml").exists());
}

#[test]
fn starter_progress_categories() {
    let cli = Cli::new();
    let progress = cli.json(&["progress", "categories"]);
    let rows = progress.as_array().unwrap();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0]["subject"], "Strength");
    assert_eq!(rows[0]["score"], 0.4);
    assert_eq!(rows[0]["fullMark"], 10);
    assert_eq!(rows[3]["subject"], "Upper Body");
    assert_eq!(rows[3]["score"], 0.3);
}

#[test]
fn create_set_and_log_session() {
    let cli = Cli::new();
    let set = cli.json(&[
        "set",
        "create",
        "Leg Day",
        "--item",
        "Lunges:3:10:Lower Body,Strength",
        "--item",
        "rest:90",
        "--item",
        "Jump Rope:1:100:Cardio",
    ]);
    assert_eq!(set["name"], "Leg Day");
    assert_eq!(set["items"].as_array().unwrap().len(), 3);
    assert_eq!(set["items"][1]["type"], "rest");
    assert_eq!(set["items"][1]["duration"], 90);

    let set_id = set["id"].as_str().unwrap();
    let session = cli.json(&["session", "log", set_id, "--date", "2024-08-01", "--duration", "50"]);
    assert_eq!(session["setName"], "Leg Day");
    assert_eq!(session["duration"], 50);

    let sessions = cli.json(&["session", "list"]);
    assert_eq!(sessions[0]["id"], session["id"]);
    assert_eq!(sessions.as_array().unwrap().len(), 3);

    let progress = cli.json(&["progress", "categories"]);
    assert_eq!(progress[1]["subject"], "Cardio");
    assert_eq!(progress[1]["score"], 0.1);
    assert_eq!(progress[4]["score"], 0.2);
}

#[test]
fn create_set_rejects_incomplete_items() {
    let cli = Cli::new();
    let (_, stderr, code) = cli.run(&["set", "create", "Nothing", "--item", "Plank:0:30:Core"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));

    let (_, _, code) = cli.run(&["set", "create", "Bad", "--item", "not-an-item"]);
    assert_ne!(code, 0);
}

#[test]
fn deleting_a_set_removes_its_sessions() {
    let cli = Cli::new();
    let stdout = cli.success(&["set", "delete", "set1"]);
    assert!(stdout.contains("1 sessions removed"));

    let sessions = cli.json(&["session", "list"]);
    let ids: Vec<_> = sessions.as_array().unwrap().iter().map(|s| s["setId"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["set2"]);

    let (_, stderr, code) = cli.run(&["set", "show", "set1"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("not found"));
}

#[test]
fn logging_against_unknown_set_fails() {
    let cli = Cli::new();
    let (_, stderr, code) = cli.run(&["session", "log", "missing"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown workout set"));
}

#[test]
fn weight_log_history_and_trend() {
    let cli = Cli::new();
    for (kg, date) in [("80", "2024-07-01"), ("78.5", "2024-07-08"), ("78.5", "2024-07-15"), ("79", "2024-07-22")] {
        cli.success(&["weight", "log", kg, "--date", date]);
    }

    let history = cli.json(&["weight", "history"]);
    assert_eq!(history[0]["change"], serde_json::Value::Null);
    assert_eq!(history[1]["change"], -1.5);
    assert_eq!(history[2]["change"], 0.0);

    let trend = cli.json(&["progress", "weight-trend"]);
    assert_eq!(trend[0]["downWeight"], 80.0);
    assert!(trend[0]["upWeight"].is_null());
    assert_eq!(trend[1]["sameWeight"], 78.5);
    assert_eq!(trend[3]["upWeight"], 79.0);

    let shown = cli.json(&["profile", "show"]);
    assert_eq!(shown["profile"]["weight"], 79.0);
}

#[test]
fn weight_log_rejects_non_positive() {
    let cli = Cli::new();
    let (_, _, code) = cli.run(&["weight", "log", "0"]);
    assert_eq!(code, 1);
    let (_, _, code) = cli.run(&["weight", "log", "-3"]);
    assert_eq!(code, 1);
}

#[test]
fn onboarding_sets_profile_and_flag() {
    let cli = Cli::new();
    let shown = cli.json(&["profile", "show"]);
    assert_eq!(shown["onboardingComplete"], false);
    assert_eq!(shown["theme"], "dark");

    let profile = cli.json(&[
        "profile", "onboard", "--name", "Sam", "--age", "31", "--gender", "other", "--weight", "82",
        "--height", "180", "--level", "intermediate", "--goal", "lose",
    ]);
    assert_eq!(profile["targetWeight"], 77.0);
    assert_eq!(profile["weightHistory"].as_array().unwrap().len(), 1);
    assert_eq!(profile["fitnessLevel"], "intermediate");

    let shown = cli.json(&["profile", "show"]);
    assert_eq!(shown["onboardingComplete"], true);
    assert_eq!(shown["profile"]["name"], "Sam");
}

#[test]
fn onboarding_rejects_short_name() {
    let cli = Cli::new();
    let (_, stderr, code) = cli.run(&[
        "profile", "onboard", "--name", "S", "--age", "31", "--gender", "male", "--weight", "82",
        "--height", "180", "--level", "beginner", "--goal", "maintain",
    ]);
    assert_eq!(code, 1);
    assert!(stderr.contains("name"));
}

#[test]
fn profile_update_edits_stored_profile() {
    let cli = Cli::new();
    cli.success(&[
        "profile", "onboard", "--name", "Sam", "--age", "31", "--gender", "other", "--weight", "82",
        "--height", "180", "--level", "beginner", "--goal", "maintain",
    ]);

    let profile = cli.json(&["profile", "update", "--name", "Samira", "--age", "32", "--level", "advanced"]);
    assert_eq!(profile["name"], "Samira");
    assert_eq!(profile["age"], 32);
    assert_eq!(profile["fitnessLevel"], "advanced");
    assert_eq!(profile["height"], 180.0);
    assert_eq!(profile["weightHistory"].as_array().unwrap().len(), 1);
    assert!(profile["targetWeight"].is_null());

    let profile = cli.json(&["profile", "update", "--goal", "gain"]);
    assert_eq!(profile["fitnessGoal"], "gain");
    assert_eq!(profile["targetWeight"], 87.0);

    let profile = cli.json(&["profile", "update", "--target-weight", "90"]);
    assert_eq!(profile["targetWeight"], 90.0);

    let shown = cli.json(&["profile", "show"]);
    assert_eq!(shown["profile"]["name"], "Samira");
    assert_eq!(shown["profile"]["targetWeight"], 90.0);
}

#[test]
fn profile_update_rejects_invalid_values() {
    let cli = Cli::new();
    let (_, stderr, code) = cli.run(&["profile", "update", "--height", "0"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("height"));
    assert_eq!(cli.json(&["profile", "show"])["profile"]["height"], 175.0);
}

#[test]
fn theme_switch_persists() {
    let cli = Cli::new();
    cli.success(&["profile", "theme", "light"]);
    assert_eq!(cli.json(&["profile", "show"])["theme"], "light");

    let (_, _, code) = cli.run(&["profile", "theme", "sepia"]);
    assert_ne!(code, 0);
}

#[test]
fn config_get_set_reset() {
    let cli = Cli::new();
    assert_eq!(cli.success(&["config", "get", "storage.db_file"]).trim(), "liftlog.db");

    cli.success(&["config", "set", "seed_defaults", "false"]);
    assert_eq!(cli.success(&["config", "get", "seed_defaults"]).trim(), "false");

    let (_, _, code) = cli.run(&["config", "get", "no.such.key"]);
    assert_eq!(code, 1);
    let (_, _, code) = cli.run(&["config", "set", "seed_defaults", "maybe"]);
    assert_eq!(code, 1);

    cli.success(&["config", "reset"]);
    let listed = cli.json(&["config", "list"]);
    assert_eq!(listed["seed_defaults"], true);
    assert_eq!(listed["logging"]["filter"], "warn");
}

#[test]
fn unseeded_store_starts_empty() {
    let cli = Cli::new();
    cli.success(&["config", "set", "seed_defaults", "false"]);
    assert_eq!(cli.json(&["set", "list"]), serde_json::json!([]));
    let progress = cli.json(&["progress", "categories"]);
    assert!(progress.as_array().unwrap().iter().all(|row| row["score"] == 0.0));
}
