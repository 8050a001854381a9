//! Terminal rendering of memories and stats.

use colored::{Color, ColoredString, Colorize};
use lane_core::dates::format_hebrew;
use lane_core::{Accent, Memory, Stats};

/// Colour choices for light or dark terminals.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub dark: bool,
}

impl Palette {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    pub fn accent(&self, accent: Accent) -> Color {
        match (accent, self.dark) {
            (Accent::Green, false) => Color::Green,
            (Accent::Green, true) => Color::BrightGreen,
            (Accent::Yellow, false) => Color::Yellow,
            (Accent::Yellow, true) => Color::BrightYellow,
            (Accent::Purple, false) => Color::Magenta,
            (Accent::Purple, true) => Color::BrightMagenta,
            (Accent::Pink, false) => Color::Red,
            (Accent::Pink, true) => Color::BrightRed,
            (Accent::Teal, false) => Color::Cyan,
            (Accent::Teal, true) => Color::BrightCyan,
            (Accent::Neutral, false) => Color::White,
            (Accent::Neutral, true) => Color::BrightBlack,
        }
    }

    pub fn heading(&self, text: &str) -> ColoredString {
        let color = if self.dark { Color::BrightRed } else { Color::Red };
        text.color(color).bold()
    }
}

/// Heart marker for favorites
pub fn favorite_mark(memory: &Memory) -> ColoredString {
    if memory.is_favorite {
        "♥".red()
    } else {
        "♡".dimmed()
    }
}

/// Truncate on a character boundary, appending an ellipsis when shortened.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max_chars).collect();
    short.push('…');
    short
}

/// One-card summary line plus description, as in the timeline list.
pub fn print_memory_card(index: usize, memory: &Memory, palette: Palette) {
    let kind = &memory.memory_type;
    println!(
        "  {}. {} {} [{}] {} {}",
        index,
        favorite_mark(memory),
        kind.emoji(),
        kind.label().color(palette.accent(kind.accent())),
        format_hebrew(&memory.date).dimmed(),
        memory.title.bold()
    );
    println!("     {}", truncate(&memory.description, 80));
    println!("     {} {}", "id:".dimmed(), memory.id.cyan());
}

/// Full detail view of an opened memory.
pub fn print_memory_detail(memory: &Memory, palette: Palette) {
    let kind = &memory.memory_type;
    println!();
    println!("{} {} {}", kind.emoji(), palette.heading(&memory.title), favorite_mark(memory));
    println!("  {}", format_hebrew(&memory.date));
    println!(
        "  {} · {}",
        kind.label().color(palette.accent(kind.accent())),
        memory.category.label()
    );
    println!();
    println!("  {}", memory.description);

    if let Some(ref media) = memory.media {
        println!();
        println!("  {} {}", "Media:".dimmed(), media);
    }
    if let Some(ref audio) = memory.audio_path {
        println!("  {} {}", "Audio:".dimmed(), audio);
    }
    if !memory.tags.is_empty() {
        let tags: Vec<String> = memory.tags.iter().map(|t| format!("#{t}")).collect();
        println!("  {}", tags.join(" ").cyan());
    }
    println!();
}

fn percent_label(stats: &Stats, count: usize) -> String {
    stats
        .percentage(count)
        .map(|p| format!("({p:.1}%)"))
        .unwrap_or_default()
}

/// Stats view: totals, then breakdowns by type, category and decade.
pub fn print_stats(stats: &Stats, palette: Palette) {
    println!("{} {}", "📊", palette.heading("סטטיסטיקות הזכרונות"));
    println!();
    println!("  Total memories: {}", stats.total.to_string().bold());
    println!("  Favorites:      {}", stats.favorites.to_string().red());
    println!("  Decades:        {}", stats.by_decade.len());
    println!("  Categories:     {}", stats.by_category.len());

    if stats.total == 0 {
        return;
    }

    println!();
    println!("  By type:");
    for (kind, count) in &stats.by_type {
        println!(
            "    {} {:<12} {:>3} {}",
            kind.emoji(),
            kind.label().color(palette.accent(kind.accent())),
            count,
            percent_label(stats, *count).dimmed()
        );
    }

    println!();
    println!("  By category:");
    for (category, count) in &stats.by_category {
        println!(
            "    {:<14} {:>3} {}",
            category.label(),
            count,
            percent_label(stats, *count).dimmed()
        );
    }

    println!();
    println!("  By decade:");
    for (decade, count) in &stats.by_decade {
        println!("    {:<8} {:>3}", decade.to_string(), count);
    }
}
