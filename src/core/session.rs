//! Game session state.
//!
//! A `Session` is the sole mutable state of one playthrough: the shuffled
//! deck, the pending flips, the move and match counters, and the lifecycle
//! phase. It is created on start, replaced wholesale on restart, and never
//! merged with a previous session.
//!
//! All mutation goes through the engine operations in [`crate::engine`];
//! this module only exposes read access.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, CardId};
use super::deck::{Deck, SYMBOL_COUNT};

/// Coarse lifecycle state of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game has been started yet.
    NotStarted,
    /// All cards are shown face-up for the initial reveal window.
    /// Flips are rejected until the reveal timer fires.
    Revealing,
    /// Normal play: flips are accepted per the engine preconditions.
    Playing,
    /// All 8 pairs matched. Terminal until a new start.
    Won,
}

/// Mutable state spanning one playthrough.
///
/// `generation` identifies the session for timer staleness checks: every
/// start bumps the engine's counter and stamps it here, so a timer scheduled
/// against an earlier session can be recognized and dropped.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    deck: Deck,
    /// Ids currently face-up pending resolution, at most 2.
    flipped: SmallVec<[CardId; 2]>,
    matched_pairs: u8,
    moves: u32,
    phase: Phase,
    generation: u64,
}

impl Session {
    /// Create a fresh session in the `Revealing` phase.
    #[must_use]
    pub(crate) fn new(deck: Deck, generation: u64) -> Self {
        Self {
            deck,
            flipped: SmallVec::new(),
            matched_pairs: 0,
            moves: 0,
            phase: Phase::Revealing,
            generation,
        }
    }

    /// The session's deck in board order.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Look up a card by id. `None` for out-of-range ids.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.card(id)
    }

    /// Ids currently face-up pending resolution (0, 1, or 2 of them).
    #[must_use]
    pub fn flipped(&self) -> &[CardId] {
        &self.flipped
    }

    /// Resolved pairs so far, `0..=8`.
    #[must_use]
    pub fn matched_pairs(&self) -> u8 {
        self.matched_pairs
    }

    /// Completed 2-card attempts so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Generation stamp identifying this session for timer checks.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether every pair has been matched.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.matched_pairs as usize == SYMBOL_COUNT
    }

    // === Engine-internal mutation ===

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn push_flipped(&mut self, id: CardId) {
        debug_assert!(self.flipped.len() < 2);
        self.flipped.push(id);
    }

    pub(crate) fn clear_flipped(&mut self) {
        self.flipped.clear();
    }

    pub(crate) fn record_move(&mut self) {
        self.moves += 1;
    }

    /// Mark both cards of a resolved pair and clear the pending flips.
    ///
    /// The cards stay visible afterwards because `matched` keeps them
    /// face-up in the view derivation.
    pub(crate) fn resolve_match(&mut self, first: CardId, second: CardId) {
        self.deck.mark_matched(first);
        self.deck.mark_matched(second);
        self.matched_pairs += 1;
        self.flipped.clear();
        if self.is_won() {
            self.phase = Phase::Won;
        }
    }
}
