//! The match engine: lifecycle operations and scheduled timers.

pub mod match_engine;
pub mod timer;

pub use match_engine::{FlipOutcome, MatchEngine};
pub use timer::{TimerKind, TimerResult, TimerToken, MISMATCH_DURATION, REVEAL_DURATION};
