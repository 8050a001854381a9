//! Stats command.

use anyhow::{Context, Result};
use std::path::Path;

use super::build_timeline;
use crate::config::Config;
use crate::render::{Palette, print_stats};

/// Execute stats command.
pub fn execute(json: bool, config: &Config, seed: Option<&Path>) -> Result<()> {
    let timeline = build_timeline(config, seed)?;
    let stats = timeline.stats();

    if json {
        let output = serde_json::to_string_pretty(&stats).context("Failed to serialize stats")?;
        println!("{output}");
    } else {
        print_stats(&stats, Palette::new(timeline.is_dark_mode()));
    }

    Ok(())
}
