//! # memo-engine
//!
//! The match engine for a memory card game: a 16-card board of 8 symbol
//! pairs, flipped two at a time, with move counting and win detection.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: the engine owns all game state and exposes a
//!    [`view::BoardView`] snapshot; any presentation layer (terminal, GUI,
//!    web) renders that and nothing else.
//!
//! 2. **Invalid Input Is a No-Op**: flipping during the reveal window, a
//!    matched card, an already-face-up card, or a third card does nothing
//!    and signals no error. The game loop favors responsiveness.
//!
//! 3. **The Host Owns the Clock**: delayed effects (reveal end, mismatch
//!    clear) are returned as [`engine::TimerToken`]s for the host to
//!    schedule. Tokens carry the owning session's generation, so a token
//!    outliving its session is dropped instead of corrupting a fresh board.
//!
//! ## Modules
//!
//! - `core`: cards, symbols, the deck, session state, deterministic RNG
//! - `engine`: lifecycle and flip operations, scheduled-timer tokens
//! - `view`: the rendering contract consumed by the presentation layer
//!
//! ## Example
//!
//! ```
//! use memo_engine::{MatchEngine, Phase, TimerResult};
//!
//! let mut engine = MatchEngine::new(42);
//!
//! // Start: all cards face-up for the reveal window.
//! let reveal = engine.start_game();
//! assert_eq!(engine.phase(), Phase::Revealing);
//!
//! // Host waits out reveal.delay(), then fires the token.
//! assert_eq!(engine.timer_fired(reveal), TimerResult::Applied);
//! assert_eq!(engine.phase(), Phase::Playing);
//!
//! // Render from the snapshot: 16 face-down cards, no symbols leaked.
//! let board = engine.view();
//! assert_eq!(board.cards.len(), 16);
//! assert!(board.cards.iter().all(|c| c.symbol.is_none()));
//! ```

pub mod core;
pub mod engine;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, Deck, GameRng, Phase, Session, Symbol, DECK_SIZE, SYMBOL_COUNT,
};

pub use crate::engine::{
    FlipOutcome, MatchEngine, TimerKind, TimerResult, TimerToken, MISMATCH_DURATION,
    REVEAL_DURATION,
};

pub use crate::view::{BoardView, CardView};
