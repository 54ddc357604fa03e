use clap::{Parser, Subcommand};
use liftlog_core::Config;

mod commands;

/// Log filter override, e.g. `LIFTLOG_LOG=liftlog_core=debug`.
const LOG_ENV: &str = "LIFTLOG_LOG";

#[derive(Parser)]
#[command(name = "liftlog", version, about = "Liftlog fitness tracker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Workout set management
    Set {
        #[command(subcommand)]
        action: commands::set::SetAction,
    },
    /// Logged workout sessions
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Body-weight log
    Weight {
        #[command(subcommand)]
        action: commands::weight::WeightAction,
    },
    /// Progress statistics
    Progress {
        #[command(subcommand)]
        action: commands::progress::ProgressAction,
    },
    /// User profile, onboarding and theme
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let configured = Config::read_existing()
        .ok()
        .flatten()
        .unwrap_or_default()
        .logging
        .filter;
    let env_filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&configured))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command {
        Commands::Set { action } => commands::set::run(action),
        Commands::Session { action } => commands::session::run(action),
        Commands::Weight { action } => commands::weight::run(action),
        Commands::Progress { action } => commands::progress::run(action),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
