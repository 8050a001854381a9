//! Timeline commands: list a decade, list decades, show one memory.

use anyhow::{Result, bail};
use colored::Colorize;
use lane_core::query::filter_in_decade;
use lane_core::{Decade, Direction, Timeline};
use std::path::Path;

use super::build_timeline;
use crate::config::Config;
use crate::error::InputError;
use crate::render::{Palette, print_memory_card, print_memory_detail};

/// List the memories of one decade.
pub fn list(decade: Option<&str>, config: &Config, seed: Option<&Path>) -> Result<()> {
    let mut timeline = build_timeline(config, seed)?;

    if let Some(label) = decade {
        let Some(decade) = Decade::parse(label).filter(|d| timeline.decades().contains(d)) else {
            bail!(InputError::UnsupportedDecade(label.to_string()));
        };
        timeline.select(decade);
    }

    print_decade(&timeline);
    Ok(())
}

/// Print the current decade header and its memories.
pub fn print_decade(timeline: &Timeline) {
    let palette = Palette::new(timeline.is_dark_mode());
    let decade = timeline.current_decade();
    let visible = timeline.visible();

    println!();
    println!("{}", palette.heading(&format!("שנות ה{}", decade.start())));
    println!("{}", decade_strip(timeline));
    println!();

    if visible.is_empty() {
        println!("  {}", "אין זכרונות מתאימים בעשור זה".dimmed());
        println!("  {}", "נסה לשנות את הסינון או לבחור עשור אחר".dimmed());
        return;
    }

    for (i, memory) in visible.iter().enumerate() {
        print_memory_card(i + 1, memory, palette);
        println!();
    }
}

/// `‹ 1980s 1990s [2000s] 2010s 2020s ›` with disabled arrows dimmed.
fn decade_strip(timeline: &Timeline) -> String {
    let arrow = |direction: Direction, glyph: &str| {
        if timeline.can_navigate(direction) {
            glyph.bold().to_string()
        } else {
            glyph.dimmed().to_string()
        }
    };

    let labels: Vec<String> = timeline
        .decades()
        .iter()
        .map(|d| {
            if *d == timeline.current_decade() {
                format!("[{}]", d).red().bold().to_string()
            } else {
                d.to_string()
            }
        })
        .collect();

    format!(
        "  {} {} {}",
        arrow(Direction::Prev, "‹"),
        labels.join(" "),
        arrow(Direction::Next, "›")
    )
}

/// Show supported decades with counts.
pub fn decades(config: &Config, seed: Option<&Path>) -> Result<()> {
    let timeline = build_timeline(config, seed)?;
    let memories = timeline.memories();

    println!("{} Decades:", "✓".green());
    for decade in timeline.decades() {
        let count = filter_in_decade(&memories, *decade).len();
        let marker = if *decade == timeline.current_decade() { "*" } else { " " };
        println!("  {} {:<6} {:>3} memories", marker, decade.to_string(), count);
    }

    let outside = memories
        .iter()
        .filter(|m| !timeline.decades().contains(&m.decade()))
        .count();
    if outside > 0 {
        println!(
            "{} {} memories fall outside the supported decades",
            "⚠".yellow(),
            outside
        );
    }

    Ok(())
}

/// Show a single memory in full.
pub fn show(id: &str, config: &Config, seed: Option<&Path>) -> Result<()> {
    let mut timeline = build_timeline(config, seed)?;

    timeline.open_by_id(id);
    let Some(memory) = timeline.selected_memory() else {
        bail!(InputError::MemoryNotFound(id.to_string()));
    };

    print_memory_detail(memory, Palette::new(timeline.is_dark_mode()));
    if memory.memory_type.expects_media() && memory.media.is_none() {
        println!("{} This memory has no media attached", "⚠".yellow());
    }

    Ok(())
}
