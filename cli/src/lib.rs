//! Marquee command-line shell
//!
//! This is the thin application shell that parses arguments, loads
//! configuration and dispatches to the commands. Game logic lives in the
//! `crates/` directory.

pub mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use marquee_core::AppConfig;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Command-line arguments for `marquee`
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(about = "Composer publish/subscribe movie game")]
#[command(version)]
pub struct Cli {
    /// Config file to use instead of the per-user one
    #[arg(long, global = true, value_name = "PATH", env = "MARQUEE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the movie game
    Run(RunArgs),
    /// Print the list of composers
    #[command(alias = "db")]
    Composers,
    /// Fetch movies from TMDb and write them to a JSON snapshot
    Snapshot(SnapshotArgs),
    /// Check that a JSON snapshot is a valid movie list
    Validate(ValidateArgs),
}

/// Arguments for `run`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    /// TMDb API key
    #[arg(long, alias = "api_key", env = "TMDB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// JSON file with preloaded movies; wins over the API key
    #[arg(long, alias = "json_path", value_name = "PATH")]
    pub json_path: Option<PathBuf>,

    /// Maximum movies fetched per composer from the API [default: 5]
    #[arg(long, alias = "max_movies_per_composer", value_name = "N")]
    pub max_movies_per_composer: Option<usize>,

    /// Movies a composer needs to win [default: 3]
    #[arg(long, alias = "winning_threshold", value_name = "N")]
    pub winning_threshold: Option<usize>,

    /// Seed for a reproducible publish order
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Publish without pausing between movies
    #[arg(long)]
    pub no_delay: bool,
}

/// Arguments for `snapshot`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SnapshotArgs {
    /// Output JSON file
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// TMDb API key
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Maximum movies fetched per composer [default: 5]
    #[arg(long, value_name = "N")]
    pub max_movies_per_composer: Option<usize>,
}

/// Arguments for `validate`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ValidateArgs {
    /// JSON snapshot to check
    pub path: PathBuf,
}

/// Initialize tracing subscriber for logging.
///
/// Logs go to stderr so stdout carries only command output.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,marquee=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Load the config file (explicit path or per-user default) with
/// environment overrides.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    AppConfig::load_with_env(path).with_context(|| match path {
        Some(path) => format!("failed to load config from {}", path.display()),
        None => "failed to load config".to_string(),
    })
}

/// Run the parsed command, writing its output to `out`.
pub async fn execute(cli: Cli, out: &mut impl Write) -> Result<()> {
    info!("Starting Marquee v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Run(args) => commands::game::run(&args, config, out).await.map(|_| ()),
        Command::Composers => commands::composers::list(&config, out),
        Command::Snapshot(args) => commands::snapshot::write(&args, config, out).await,
        Command::Validate(args) => commands::validate::check(&args.path, out),
    }
}
