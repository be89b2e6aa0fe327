//! `snapshot` command: fetch from TMDb and save a JSON file.

use crate::SnapshotArgs;
use anyhow::{Context, Result};
use marquee_catalog::{FetchOptions, MovieSource};
use marquee_core::AppConfig;
use marquee_tmdb::TmdbClient;
use std::io::Write;

/// Fetch the configured composers' movies and write them to `args.output`.
pub async fn write(
    args: &SnapshotArgs,
    mut config: AppConfig,
    out: &mut impl Write,
) -> Result<()> {
    if let Some(cap) = args.max_movies_per_composer {
        config.tmdb.max_movies_per_composer = cap;
    }
    config.validate().context("invalid configuration")?;

    let api_key = args
        .api_key
        .clone()
        .or_else(|| config.tmdb.api_key.clone())
        .filter(|key| !key.trim().is_empty())
        .context("a TMDb API key is required: pass --api-key or set TMDB_API_KEY")?;

    let client = TmdbClient::from_config(api_key, &config.tmdb)?;
    let source = MovieSource::from_api(
        &client,
        &config.composers,
        FetchOptions::from_config(&config.tmdb),
    )
    .await?;

    let catalog = source.catalog();
    catalog
        .save_json(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    writeln!(
        out,
        "Wrote {} movies to {}",
        catalog.len(),
        args.output.display()
    )?;
    Ok(())
}
