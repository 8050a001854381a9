//! Search command: text query plus type, category and favorites filters.

use anyhow::Result;
use colored::Colorize;
use lane_core::{MemoryCategory, MemoryFilter, MemoryType, Selection};
use std::path::Path;

use super::build_timeline;
use crate::cli::SearchArgs;
use crate::config::Config;
use crate::render::{Palette, print_memory_card};

/// Build the combined filter from command-line arguments.
pub fn filter_from_args(args: &SearchArgs) -> MemoryFilter {
    MemoryFilter {
        query: args.query.clone(),
        memory_type: Selection::<MemoryType>::parse(&args.memory_type),
        category: Selection::<MemoryCategory>::parse(&args.category),
        favorites_only: args.favorites,
    }
}

fn known_list<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Execute search command.
pub fn execute(args: SearchArgs, config: &Config, seed: Option<&Path>) -> Result<()> {
    let timeline = build_timeline(config, seed)?;
    let filter = filter_from_args(&args);

    if let Selection::Only(ref kind) = filter.memory_type {
        if !kind.is_recognized() {
            println!(
                "{} Unknown memory type: {} (known: {})",
                "⚠".yellow(),
                kind,
                known_list(&MemoryType::KNOWN)
            );
        }
    }
    if let Selection::Only(ref category) = filter.category {
        if !category.is_recognized() {
            println!(
                "{} Unknown category: {} (known: {})",
                "⚠".yellow(),
                category,
                known_list(&MemoryCategory::KNOWN)
            );
        }
    }

    let mut results = filter.apply(&timeline.memories());
    results.sort_by_key(|m| m.date);

    if results.is_empty() {
        println!("{} No memories found matching criteria", "⚠".yellow());
        return Ok(());
    }

    println!("{} Found {} memories:", "✓".green(), results.len());
    println!();

    let palette = Palette::new(timeline.is_dark_mode());
    for (i, memory) in results.iter().enumerate() {
        print_memory_card(i + 1, memory, palette);
        println!();
    }

    Ok(())
}
