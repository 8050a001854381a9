//! CLI argument definitions using clap derive macros.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Memory Lane - a birthday timeline of memories, decade by decade
#[derive(Parser, Debug)]
#[command(name = "lane")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Load memories from a JSON file instead of the built-in ones
    #[arg(long, global = true, env = "LANE_SEED")]
    pub seed: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the memories of one decade, oldest first
    List {
        /// Decade label, e.g. 2010s (defaults to the configured start decade)
        decade: Option<String>,
    },

    /// Show supported decades with memory counts
    Decades,

    /// Search and filter memories
    Search(SearchArgs),

    /// Show one memory in full
    Show {
        /// Memory ID
        id: String,
    },

    /// Memory statistics
    Stats {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Export all memories to a JSON file
    Export {
        /// Target directory (defaults to the configured export dir)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Browse the timeline interactively
    Browse,

    /// Blow out birthday candles
    Cake {
        /// Number of candles to blow out
        #[arg(short, long, default_value_t = 5)]
        blow: usize,
    },

    /// Show version
    Version,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for in titles, descriptions, categories and tags
    #[arg(default_value = "")]
    pub query: String,

    /// Memory type (milestone, photo, video, story, audio) or "all"
    #[arg(short = 't', long = "type", default_value = "all")]
    pub memory_type: String,

    /// Category slug or label, or "all"
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Only favorites
    #[arg(short, long)]
    pub favorites: bool,
}
