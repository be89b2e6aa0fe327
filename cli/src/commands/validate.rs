//! `validate` command.

use anyhow::{Context, Result};
use marquee_catalog::JsonLoader;
use std::io::Write;
use std::path::Path;

/// Load `path` as a movie snapshot and report the result.
pub fn check(path: &Path, out: &mut impl Write) -> Result<()> {
    let catalog = JsonLoader::new(path)
        .and_then(|loader| loader.load())
        .with_context(|| format!("validation failed for {}", path.display()))?;

    writeln!(
        out,
        "{} is valid: {} movies, {} composers",
        path.display(),
        catalog.len(),
        catalog.composers().len()
    )?;
    Ok(())
}
