//! Deck construction and shuffling.
//!
//! A `Deck` is the full ordered set of 16 cards for one session: two copies
//! of each of the 8 symbols, shuffled into a uniform random order, with ids
//! assigned `0..16` in the permuted order.
//!
//! ## Invariants
//!
//! - Exactly `DECK_SIZE` cards.
//! - Each symbol appears exactly twice.
//! - `cards()[i].id.index() == i` for all positions.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, Symbol};
use super::rng::GameRng;

/// Number of distinct symbols in the alphabet.
pub const SYMBOL_COUNT: usize = 8;

/// Total cards in a deck (two of each symbol).
pub const DECK_SIZE: usize = SYMBOL_COUNT * 2;

/// The full ordered set of cards for one session.
///
/// Owned exclusively by the session and replaced wholesale on restart;
/// the only mutation after construction is setting `matched` flags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a freshly shuffled deck.
    ///
    /// Duplicates the symbol alphabet, applies a uniform permutation over
    /// the 16 entries, and assigns sequential ids in the permuted order.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut symbols: Vec<Symbol> = Symbol::ALL
            .iter()
            .chain(Symbol::ALL.iter())
            .copied()
            .collect();
        rng.shuffle(&mut symbols);

        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(i, symbol)| Card::new(CardId::new(i as u8), symbol))
            .collect();

        Self { cards }
    }

    /// All cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by id.
    ///
    /// Returns `None` for ids outside `0..DECK_SIZE`.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Number of cards (always `DECK_SIZE`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is empty (never, for a constructed deck).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Mark a card as matched.
    ///
    /// Ignores unknown ids. The flag is one-way; there is no way to unset it.
    pub(crate) fn mark_matched(&mut self, id: CardId) {
        if let Some(card) = self.cards.get_mut(id.index()) {
            card.matched = true;
        }
    }
}
