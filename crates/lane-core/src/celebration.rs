//! Celebration effects: confetti bursts and the birthday cake.
//!
//! Effects that clear themselves after a delay run on a tokio timer. The
//! timer is owned by the effect and aborted when the effect is cancelled or
//! dropped, so an effect torn down early never fires its expiry hook.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::task::AbortHandle;
use tracing::debug;

/// How long a birthday wish stays on screen
pub const WISH_DISPLAY: Duration = Duration::from_secs(3);

/// Candles blown out between two wishes
const CANDLES_PER_WISH: usize = 5;

const BIRTHDAY_WISHES: [&str; 8] = [
    "💕 שנה של אהבה אינסופית! 💕",
    "🎂 40 שנים של יופי ואושר! 🎂",
    "✨ האישה הכי מדהימה בעולם! ✨",
    "🌟 כל יום איתך הוא מתנה! 🌟",
    "💖 האמא והאישה המושלמת! 💖",
    "🎉 40 סיבות לאהוב אותך! 🎉",
    "🌈 השנה הכי מדהימה שלך! 🌈",
    "💐 מלכת הלב שלי! 💐",
];

// ─────────────────────────────────────────────────────────────────────────────
// Transient
// ─────────────────────────────────────────────────────────────────────────────

/// A flag that is raised on creation and lowered when its timer fires.
///
/// Must be created inside a tokio runtime.
#[derive(Debug)]
pub struct Transient {
    active: Arc<AtomicBool>,
    timer: AbortHandle,
}

impl Transient {
    /// Raise the flag for `duration`.
    pub fn start(duration: Duration) -> Self {
        Self::start_with(duration, || {})
    }

    /// Raise the flag for `duration`, then run `on_expire` once.
    ///
    /// `on_expire` never runs if the transient is cancelled or dropped first.
    pub fn start_with<F>(duration: Duration, on_expire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let active = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&active);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            flag.store(false, Ordering::SeqCst);
            on_expire();
        });

        Self {
            active,
            timer: handle.abort_handle(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Lower the flag now and drop the pending timer.
    pub fn cancel(&self) {
        self.timer.abort();
        self.active.store(false, Ordering::SeqCst);
    }
}

impl Drop for Transient {
    fn drop(&mut self) {
        self.timer.abort();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Confetti
// ─────────────────────────────────────────────────────────────────────────────

/// Size of a confetti burst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfettiKind {
    /// Small burst, e.g. when a memory becomes a favorite
    Standard,
    /// Large opening burst
    Welcome,
}

impl ConfettiKind {
    pub fn particle_count(&self) -> usize {
        match self {
            Self::Standard => 50,
            Self::Welcome => 150,
        }
    }

    /// Burst length for a configured base duration. Welcome bursts last 1.5x.
    pub fn duration(&self, base: Duration) -> Duration {
        match self {
            Self::Standard => base,
            Self::Welcome => base * 3 / 2,
        }
    }
}

/// A running confetti burst.
#[derive(Debug)]
pub struct ConfettiBurst {
    kind: ConfettiKind,
    transient: Transient,
}

impl ConfettiBurst {
    /// Start a burst that clears itself after the kind's duration.
    pub fn start(kind: ConfettiKind, base: Duration) -> Self {
        let duration = kind.duration(base);
        debug!(?kind, duration_ms = duration.as_millis() as u64, "Confetti burst started");
        Self {
            kind,
            transient: Transient::start(duration),
        }
    }

    pub fn kind(&self) -> ConfettiKind {
        self.kind
    }

    pub fn particle_count(&self) -> usize {
        self.kind.particle_count()
    }

    pub fn is_active(&self) -> bool {
        self.transient.is_active()
    }

    pub fn cancel(&self) {
        self.transient.cancel();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Birthday cake
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candle {
    pub id: usize,
    pub is_lit: bool,
}

/// Cake with candles that can be blown out one by one.
///
/// Every fifth candle blown out reveals the next wish, until the wishes run out.
#[derive(Debug, Clone)]
pub struct BirthdayCake {
    candles: Vec<Candle>,
    blown_out: usize,
}

impl BirthdayCake {
    /// Cake with `count` lit candles
    pub fn new(count: usize) -> Self {
        Self {
            candles: (0..count).map(|id| Candle { id, is_lit: true }).collect(),
            blown_out: 0,
        }
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn lit_count(&self) -> usize {
        self.candles.iter().filter(|c| c.is_lit).count()
    }

    pub fn blown_out_count(&self) -> usize {
        self.blown_out
    }

    /// Blow out a candle, returning a wish if this one earned it.
    ///
    /// Unknown or already extinguished candles are ignored.
    pub fn blow_out(&mut self, candle_id: usize) -> Option<&'static str> {
        let candle = self.candles.iter_mut().find(|c| c.id == candle_id && c.is_lit)?;
        candle.is_lit = false;
        self.blown_out += 1;

        if self.blown_out % CANDLES_PER_WISH != 0 {
            return None;
        }
        BIRTHDAY_WISHES.get(self.blown_out / CANDLES_PER_WISH - 1).copied()
    }

    /// Relight every candle and reset the count
    pub fn relight_all(&mut self) {
        for candle in &mut self.candles {
            candle.is_lit = true;
        }
        self.blown_out = 0;
    }
}

impl Default for BirthdayCake {
    fn default() -> Self {
        Self::new(40)
    }
}
