//! Timeline controller.
//!
//! [`Timeline`] is the single owner of the memory collection and of every UI
//! flag. Presentation code reads its state, sends user intents through the
//! transition methods, and renders whatever [`Timeline::visible`] returns.
//!
//! ## State
//!
//! ```text
//!   current decade ──prev/next (saturating)──▶ adjacent supported decade
//!   selected memory ──open/close──▶ Some(memory) | None
//!   dark mode, stats modal, music ──toggle──▶ flipped flag
//!
//!   visible = filter_in_decade(memories, current decade)
//!             recomputed only when memories or the decade change
//! ```
//!
//! Requests that make no sense (stepping past either end, an unsupported
//! decade label, an unknown memory id) are ignored and reported by returning
//! `false`; nothing here returns an error.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::config::{ConfigValidationError, TimelineConfig};
use crate::playback::{AudioOutput, PlaybackOutcome};
use crate::query::{self, Stats};
use crate::types::{Decade, Memory};

/// Step direction for decade navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "prev" | "previous" | "p" => Some(Self::Prev),
            "next" | "n" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Root state machine for the memory timeline.
#[derive(Debug)]
pub struct Timeline {
    config: TimelineConfig,
    memories: Arc<Vec<Memory>>,
    decade_index: usize,
    selected: Option<Memory>,
    dark_mode: bool,
    stats_open: bool,
    music_playing: bool,
    visible: watch::Sender<Arc<Vec<Memory>>>,
}

impl Timeline {
    /// Create a timeline over the seed collection.
    ///
    /// Ids are unique within the timeline: a record repeating an earlier id
    /// is dropped.
    pub fn new(
        config: TimelineConfig,
        memories: Vec<Memory>,
    ) -> Result<Self, ConfigValidationError> {
        config.validate()?;

        let decade_index = config
            .decades
            .iter()
            .position(|d| *d == config.initial_decade)
            .ok_or(ConfigValidationError::UnsupportedInitialDecade(config.initial_decade))?;

        let mut seen = HashSet::new();
        let memories: Vec<Memory> = memories
            .into_iter()
            .filter(|m| {
                let first = seen.insert(m.id.clone());
                if !first {
                    warn!(id = %m.id, "Dropping memory with duplicate id");
                }
                first
            })
            .collect();

        let memories = Arc::new(memories);
        let initial = Arc::new(query::filter_in_decade(&memories, config.initial_decade));
        let (visible, _) = watch::channel(initial);

        Ok(Self {
            dark_mode: config.dark_mode,
            config,
            memories,
            decade_index,
            selected: None,
            stats_open: false,
            music_playing: false,
            visible,
        })
    }

    /// Create with default configuration.
    pub fn with_defaults(memories: Vec<Memory>) -> Result<Self, ConfigValidationError> {
        Self::new(TimelineConfig::default(), memories)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Full collection. Replaced, never mutated, when a favorite flips.
    pub fn memories(&self) -> Arc<Vec<Memory>> {
        Arc::clone(&self.memories)
    }

    pub fn decades(&self) -> &[Decade] {
        &self.config.decades
    }

    pub fn current_decade(&self) -> Decade {
        self.config.decades[self.decade_index]
    }

    /// Memories of the current decade, oldest first
    pub fn visible(&self) -> Arc<Vec<Memory>> {
        Arc::clone(&self.visible.borrow())
    }

    /// Watch the visible subset; the receiver wakes only when it is recomputed.
    pub fn subscribe_visible(&self) -> watch::Receiver<Arc<Vec<Memory>>> {
        self.visible.subscribe()
    }

    pub fn selected_memory(&self) -> Option<&Memory> {
        self.selected.as_ref()
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn is_stats_open(&self) -> bool {
        self.stats_open
    }

    pub fn is_music_playing(&self) -> bool {
        self.music_playing
    }

    /// Whether a step in `direction` would move (the prev/next button state)
    pub fn can_navigate(&self, direction: Direction) -> bool {
        match direction {
            Direction::Prev => self.decade_index > 0,
            Direction::Next => self.decade_index + 1 < self.config.decades.len(),
        }
    }

    /// Statistics over the whole collection
    pub fn stats(&self) -> Stats {
        query::compute_stats(&self.memories)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────

    /// Step to the adjacent decade. Saturates at both ends.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        if !self.can_navigate(direction) {
            debug!(?direction, decade = %self.current_decade(), "Navigation past boundary ignored");
            return false;
        }

        self.decade_index = match direction {
            Direction::Prev => self.decade_index - 1,
            Direction::Next => self.decade_index + 1,
        };
        self.refresh_visible();
        true
    }

    /// Jump to a decade by label. Unsupported labels are ignored.
    pub fn select_decade(&mut self, label: &str) -> bool {
        match Decade::parse(label) {
            Some(decade) => self.select(decade),
            None => {
                debug!(label = %label, "Unparseable decade label ignored");
                false
            }
        }
    }

    /// Jump to a decade. Decades outside the configured list are ignored.
    pub fn select(&mut self, decade: Decade) -> bool {
        let Some(index) = self.config.decades.iter().position(|d| *d == decade) else {
            debug!(decade = %decade, "Unsupported decade ignored");
            return false;
        };

        if index == self.decade_index {
            return false;
        }

        self.decade_index = index;
        self.refresh_visible();
        true
    }

    /// Flip the favorite flag of a memory.
    ///
    /// The open memory, if it is the same record, flips with it.
    pub fn toggle_favorite(&mut self, memory_id: &str) -> bool {
        let Some(updated) = query::toggle_favorite(&self.memories, memory_id) else {
            debug!(memory_id = %memory_id, "Favorite toggle for unknown memory ignored");
            return false;
        };

        let is_favorite = query::find_by_id(&updated, memory_id).map(|m| m.is_favorite);
        self.memories = Arc::new(updated);

        if let (Some(selected), Some(is_favorite)) = (self.selected.as_mut(), is_favorite) {
            if selected.id == memory_id {
                selected.is_favorite = is_favorite;
            }
        }

        self.refresh_visible();
        true
    }

    /// Open a memory in the detail view, replacing any open one.
    pub fn open_memory(&mut self, memory: Memory) {
        self.selected = Some(memory);
    }

    /// Open a memory from the collection by id.
    pub fn open_by_id(&mut self, memory_id: &str) -> bool {
        match query::find_by_id(&self.memories, memory_id) {
            Some(memory) => {
                self.selected = Some(memory.clone());
                true
            }
            None => {
                debug!(memory_id = %memory_id, "Open for unknown memory ignored");
                false
            }
        }
    }

    /// Close the detail view. Returns whether anything was open.
    pub fn close_memory(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Flip dark mode, returning the new value
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    /// Flip the stats modal, returning the new value
    pub fn toggle_stats_modal(&mut self) -> bool {
        self.stats_open = !self.stats_open;
        self.stats_open
    }

    /// Ask the output to start the background track.
    ///
    /// A blocked request leaves the music marked as not playing.
    pub fn request_music(&mut self, output: &mut dyn AudioOutput) -> PlaybackOutcome {
        let outcome = output.request_playback(&self.config.music.track);
        self.music_playing = outcome.is_granted();
        outcome
    }

    pub fn pause_music(&mut self, output: &mut dyn AudioOutput) {
        output.pause();
        self.music_playing = false;
    }

    /// Pause if playing, otherwise request playback. Returns whether music plays.
    pub fn toggle_music(&mut self, output: &mut dyn AudioOutput) -> bool {
        if self.music_playing {
            self.pause_music(output);
        } else {
            self.request_music(output);
        }
        self.music_playing
    }

    fn refresh_visible(&self) {
        let visible = query::filter_in_decade(&self.memories, self.current_decade());
        debug!(decade = %self.current_decade(), count = visible.len(), "Visible memories recomputed");
        self.visible.send_replace(Arc::new(visible));
    }
}
