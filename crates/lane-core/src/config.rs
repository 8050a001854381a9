//! Timeline configuration.
//!
//! Supported decades, the starting decade and effect timings are injected
//! into the controller at construction time rather than read from globals.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::types::Decade;

/// Configuration for a [`crate::Timeline`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Decades the timeline can navigate, oldest first
    #[serde(default = "default_decades")]
    pub decades: Vec<Decade>,

    /// Decade shown at startup
    #[serde(default = "default_initial_decade")]
    pub initial_decade: Decade,

    /// Start in dark mode
    #[serde(default)]
    pub dark_mode: bool,

    /// Background music settings
    #[serde(default)]
    pub music: MusicConfig,

    /// Confetti and candle settings
    #[serde(default)]
    pub celebration: CelebrationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusicConfig {
    /// Track requested for background playback
    #[serde(default = "default_track")]
    pub track: String,

    /// Whether the host lets playback start without a user gesture
    #[serde(default)]
    pub autoplay_allowed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CelebrationConfig {
    /// Standard confetti burst length in milliseconds
    #[serde(default = "default_confetti_ms")]
    pub confetti_duration_ms: u64,

    /// Candles on the cake
    #[serde(default = "default_candles")]
    pub candles: usize,
}

fn default_decades() -> Vec<Decade> {
    (1980..=2020).step_by(10).map(Decade::of_year).collect()
}

fn default_initial_decade() -> Decade {
    Decade::of_year(2000)
}

fn default_track() -> String {
    "/audio/background-music.mp3".to_string()
}

fn default_confetti_ms() -> u64 {
    3000
}

fn default_candles() -> usize {
    40
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            decades: default_decades(),
            initial_decade: default_initial_decade(),
            dark_mode: false,
            music: MusicConfig::default(),
            celebration: CelebrationConfig::default(),
        }
    }
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            track: default_track(),
            autoplay_allowed: false,
        }
    }
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            confetti_duration_ms: default_confetti_ms(),
            candles: default_candles(),
        }
    }
}

impl CelebrationConfig {
    pub fn confetti_duration(&self) -> Duration {
        Duration::from_millis(self.confetti_duration_ms)
    }
}

impl TimelineConfig {
    /// Create a config over the given decades, starting at the first one
    pub fn new(decades: Vec<Decade>) -> Self {
        let initial_decade = decades.first().copied().unwrap_or_else(default_initial_decade);
        Self {
            decades,
            initial_decade,
            ..Default::default()
        }
    }

    /// Set the starting decade
    pub fn with_initial_decade(mut self, decade: Decade) -> Self {
        self.initial_decade = decade;
        self
    }

    /// Start in dark mode
    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    /// Set music configuration
    pub fn with_music(mut self, music: MusicConfig) -> Self {
        self.music = music;
        self
    }

    /// Set celebration configuration
    pub fn with_celebration(mut self, celebration: CelebrationConfig) -> Self {
        self.celebration = celebration;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.decades.is_empty() {
            return Err(ConfigValidationError::NoDecades);
        }

        if let Some(pair) = self.decades.windows(2).find(|w| w[0] >= w[1]) {
            return Err(ConfigValidationError::InvalidValue {
                field: "decades".into(),
                message: format!("must be strictly ascending ({} before {})", pair[0], pair[1]),
            });
        }

        if !self.decades.contains(&self.initial_decade) {
            return Err(ConfigValidationError::UnsupportedInitialDecade(
                self.initial_decade,
            ));
        }

        if self.celebration.confetti_duration_ms == 0 {
            return Err(ConfigValidationError::InvalidValue {
                field: "celebration.confetti_duration_ms".into(),
                message: "must be greater than 0".into(),
            });
        }

        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("at least one decade is required")]
    NoDecades,

    #[error("initial decade {0} is not in the decade list")]
    UnsupportedInitialDecade(Decade),

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
