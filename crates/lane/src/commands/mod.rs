//! Command implementations for lane CLI.
//!
//! Each submodule implements the logic for a command group.

pub mod browse;
pub mod cake;
pub mod export;
pub mod search;
pub mod stats;
pub mod timeline;

use anyhow::{Context, Result};
use lane_core::{Memory, Timeline, seed};
use std::path::Path;

use crate::config::Config;

/// Built-in memories, or the given fixture file.
pub fn load_memories(seed_path: Option<&Path>) -> Result<Vec<Memory>> {
    match seed_path {
        Some(path) => seed::load(path)
            .with_context(|| format!("Failed to load memories from {}", path.display())),
        None => Ok(seed::sample_memories()),
    }
}

/// Controller over the loaded memories using the configured timeline.
pub fn build_timeline(config: &Config, seed_path: Option<&Path>) -> Result<Timeline> {
    let memories = load_memories(seed_path)?;
    Timeline::new(config.timeline.clone(), memories).context("Invalid timeline configuration")
}
