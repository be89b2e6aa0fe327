//! `run` command: load a movie source and play one game.

use crate::RunArgs;
use anyhow::{Context, Result};
use marquee_catalog::{MovieSource, SourceSelection};
use marquee_core::AppConfig;
use marquee_game::{GameOutcome, Orchestrator, ShufflePolicy, TracingObserver};
use std::io::Write;
use std::time::Duration;
use tracing::info;

/// Play a game with `config` adjusted by the command-line flags.
///
/// Prints the winner's announcement, or a no-winner line, to `out`.
pub async fn run(
    args: &RunArgs,
    mut config: AppConfig,
    out: &mut impl Write,
) -> Result<GameOutcome> {
    if let Some(threshold) = args.winning_threshold {
        config.game.winning_threshold = threshold;
    }
    if let Some(cap) = args.max_movies_per_composer {
        config.tmdb.max_movies_per_composer = cap;
    }
    if args.no_delay {
        config.game.publish_delay_ms = 0;
    }
    config.validate().context("invalid configuration")?;

    let api_key = args.api_key.clone().or_else(|| config.tmdb.api_key.clone());
    let selection = SourceSelection::resolve(args.json_path.clone(), api_key)?;

    let source = MovieSource::load(&selection, &config)
        .await
        .context("failed to load movies")?;
    info!(
        source = %source.describe(),
        movies = source.records().len(),
        composers = source.composer_names().len(),
        "movie source ready"
    );

    let mut orchestrator = Orchestrator::from_config(&config.game)?;
    if let Some(seed) = args.seed {
        orchestrator = orchestrator.with_shuffle(ShufflePolicy::Seeded(seed));
    }
    if args.no_delay {
        orchestrator = orchestrator.with_publish_delay(Duration::ZERO);
    }

    let outcome = orchestrator
        .run(source.records(), source.composer_names(), &TracingObserver)
        .await?;

    match &outcome {
        GameOutcome::Winner(winner) => {
            writeln!(out, "{}", winner.announcement())?;
            writeln!(
                out,
                "Winner is composer {} with {} movies!",
                winner.composer, winner.count
            )?;
        }
        GameOutcome::NoWinner { published } => {
            writeln!(
                out,
                "No composer reached the winning threshold after {published} movies."
            )?;
        }
    }

    Ok(outcome)
}
