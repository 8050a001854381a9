//! lane-core - Core library for Memory Lane
//!
//! A birthday timeline of personal memories grouped by decade. This crate
//! holds everything that is not rendering:
//!
//! - **types**: memory records, memory kinds and categories, decades
//! - **query**: decade filter, search, type/category/favorite filters, stats
//! - **timeline**: the controller state machine presentation code drives
//! - **export**: JSON export and its inverse
//! - **seed**: built-in memories and fixture loading
//! - **playback**: background music with an explicit granted/blocked outcome
//! - **celebration**: confetti bursts and the birthday cake
//!
//! ## Example
//!
//! ```rust,no_run
//! use lane_core::{Direction, Timeline, TimelineConfig, seed};
//!
//! let mut timeline = Timeline::new(TimelineConfig::default(), seed::sample_memories())?;
//! timeline.navigate(Direction::Next);
//! for memory in timeline.visible().iter() {
//!     println!("{} {}", memory.date, memory.title);
//! }
//! # Ok::<(), lane_core::ConfigValidationError>(())
//! ```

pub mod celebration;
pub mod config;
pub mod dates;
pub mod error;
pub mod export;
pub mod playback;
pub mod query;
pub mod seed;
pub mod timeline;
pub mod types;

#[cfg(test)]
mod strategies;

// Re-export commonly used types
pub use config::{CelebrationConfig, ConfigValidationError, MusicConfig, TimelineConfig};
pub use error::{LaneError, LaneResult};
pub use playback::{AudioOutput, PlaybackOutcome, PolicyAudioOutput};
pub use query::{MemoryFilter, Selection, Stats};
pub use timeline::{Direction, Timeline};
pub use types::{Accent, Decade, Memory, MemoryCategory, MemoryType};
