//! Background music playback.
//!
//! Hosts may refuse to start audio without a user gesture. That refusal is
//! an ordinary outcome of [`AudioOutput::request_playback`], not an error.

use tracing::{debug, info};

/// Answer from the host to a playback request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Granted,
    Blocked,
}

impl PlaybackOutcome {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Something that can play the background track.
pub trait AudioOutput {
    /// Ask the host to start playing `track`.
    fn request_playback(&mut self, track: &str) -> PlaybackOutcome;

    /// Stop playback. Pausing when nothing plays is a no-op.
    fn pause(&mut self);
}

/// Audio output governed by an autoplay policy.
///
/// Playback is blocked until the policy allows it or a user gesture has been
/// recorded, mirroring how browsers gate autoplay.
#[derive(Debug, Clone, Default)]
pub struct PolicyAudioOutput {
    autoplay_allowed: bool,
    user_gesture: bool,
    now_playing: Option<String>,
}

impl PolicyAudioOutput {
    pub fn new(autoplay_allowed: bool) -> Self {
        Self {
            autoplay_allowed,
            ..Default::default()
        }
    }

    /// Record a user interaction; later requests are granted.
    pub fn record_gesture(&mut self) {
        self.user_gesture = true;
    }

    pub fn now_playing(&self) -> Option<&str> {
        self.now_playing.as_deref()
    }
}

impl AudioOutput for PolicyAudioOutput {
    fn request_playback(&mut self, track: &str) -> PlaybackOutcome {
        if self.autoplay_allowed || self.user_gesture {
            info!(track = %track, "Background music started");
            self.now_playing = Some(track.to_string());
            PlaybackOutcome::Granted
        } else {
            debug!(track = %track, "Autoplay blocked by host policy");
            PlaybackOutcome::Blocked
        }
    }

    fn pause(&mut self) {
        if let Some(track) = self.now_playing.take() {
            debug!(track = %track, "Background music paused");
        }
    }
}
