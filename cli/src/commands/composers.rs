//! `composers` command.

use anyhow::Result;
use marquee_core::AppConfig;
use std::io::Write;

/// Print the configured composers, one per line.
pub fn list(config: &AppConfig, out: &mut impl Write) -> Result<()> {
    writeln!(out, "List of composers:")?;
    for composer in &config.composers {
        writeln!(out, "  {composer}")?;
    }
    Ok(())
}
