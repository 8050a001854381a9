//! Export command.

use anyhow::{Context, Result};
use colored::Colorize;
use lane_core::dates::today;
use lane_core::export::write_export;
use std::path::Path;

use super::build_timeline;
use crate::config::Config;

/// Write every memory to `<dir>/<prefix>-<today>.json`.
pub fn execute(out: Option<&Path>, config: &Config, seed: Option<&Path>) -> Result<()> {
    let timeline = build_timeline(config, seed)?;
    let dir = out.unwrap_or(&config.export.dir);
    let memories = timeline.memories();

    let path = write_export(dir, &config.export.file_prefix, today(), &memories)
        .with_context(|| format!("Failed to export memories to {}", dir.display()))?;

    println!("{} Exported {} memories", "✓".green(), memories.len());
    println!("  {}", path.display());
    Ok(())
}
