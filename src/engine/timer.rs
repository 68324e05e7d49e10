//! Scheduled-timer tokens with a generation guard.
//!
//! The engine never sleeps: delayed effects (ending the reveal window,
//! clearing a mismatched pair) are handed to the host as `TimerToken`s.
//! The host owns the clock, waits out `delay()` however it likes, and then
//! calls [`crate::engine::MatchEngine::timer_fired`] with the token.
//!
//! Every token carries the generation of the session that scheduled it.
//! Restarting bumps the generation, so a token from the old session fails
//! the guard and is dropped instead of mutating the new deck. This is the
//! one correctness-critical piece of the timer design: without it, a rapid
//! restart lets a stale mismatch-clear fire against a fresh board.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Fixed length of the initial all-cards-face-up reveal window.
pub const REVEAL_DURATION: Duration = Duration::from_millis(1500);

/// Fixed time two mismatched cards stay visible before flipping back.
pub const MISMATCH_DURATION: Duration = Duration::from_millis(1000);

/// The delayed effect a token stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// End the reveal window: `Revealing` -> `Playing`.
    RevealEnd,
    /// Return a mismatched pair face-down by clearing the pending flips.
    MismatchClear,
}

/// A delayed engine effect scheduled with the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken {
    generation: u64,
    kind: TimerKind,
    delay: Duration,
}

impl TimerToken {
    #[must_use]
    pub(crate) fn new(generation: u64, kind: TimerKind, delay: Duration) -> Self {
        Self {
            generation,
            kind,
            delay,
        }
    }

    /// Generation of the session this token was scheduled for.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The effect to apply when the delay elapses.
    #[must_use]
    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    /// How long the host should wait before firing this token.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Result of firing a token back into the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerResult {
    /// The token belonged to the live session and its effect was applied.
    Applied,
    /// The token was superseded (restart, or effect no longer pending)
    /// and was dropped without touching state.
    Stale,
}
