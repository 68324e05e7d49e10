//! Rendering contract for the presentation layer.
//!
//! After every engine operation the host reads a fresh [`BoardView`] and
//! renders it. Face-up visibility is derived by the engine
//! (`matched || flipped || revealing`); the presentation layer must not keep
//! its own copy of that flag, and it never sees the symbol of a face-down
//! card.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, Phase, Symbol};

/// One card as the presentation layer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    /// Stable position index.
    pub id: CardId,

    /// True once the card's pair has been matched.
    pub matched: bool,

    /// Whether the card currently shows its face.
    pub face_up: bool,

    /// The card's symbol, present only while `face_up`.
    pub symbol: Option<Symbol>,
}

/// Snapshot of the whole board plus the session counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Cards in board order; empty before the first game starts.
    pub cards: Vec<CardView>,

    /// Completed 2-card attempts ("Moves: N").
    pub moves: u32,

    /// Resolved pairs ("Matches: n/8").
    pub matched_pairs: u8,

    /// Total pairs in a deck, for rendering "n/8".
    pub total_pairs: u8,

    /// Current lifecycle phase.
    pub phase: Phase,
}

impl BoardView {
    /// The view before any game has been started: an empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cards: Vec::new(),
            moves: 0,
            matched_pairs: 0,
            total_pairs: crate::core::SYMBOL_COUNT as u8,
            phase: Phase::NotStarted,
        }
    }

    /// Whether the session has been won.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }
}
