//! Cards and the symbol alphabet.
//!
//! Every tile on the board is a `Card`: a stable position index (`CardId`),
//! a `Symbol` drawn from the fixed 8-member alphabet, and a `matched` flag
//! that is set once its pair is found and never cleared afterwards.
//!
//! ## Usage
//!
//! ```
//! use memo_engine::core::{Card, CardId, Symbol};
//!
//! let card = Card::new(CardId::new(0), Symbol::Star);
//! assert!(!card.matched);
//! assert_eq!(card.symbol.glyph(), '★');
//! ```

use serde::{Deserialize, Serialize};

/// One of the 8 symbols a card can carry.
///
/// A deck holds exactly two cards of each symbol. `glyph()` returns the
/// character a presentation layer renders for the face-up side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Star,
    Spade,
    Diamond,
    Heart,
    Bolt,
    Clover,
    Fleur,
    Blossom,
}

impl Symbol {
    /// All symbols in definition order.
    ///
    /// Deck construction duplicates this array; tests use it to verify
    /// deck composition.
    pub const ALL: [Symbol; 8] = [
        Symbol::Star,
        Symbol::Spade,
        Symbol::Diamond,
        Symbol::Heart,
        Symbol::Bolt,
        Symbol::Clover,
        Symbol::Fleur,
        Symbol::Blossom,
    ];

    /// The display character for this symbol.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Symbol::Star => '★',
            Symbol::Spade => '♠',
            Symbol::Diamond => '♦',
            Symbol::Heart => '♥',
            Symbol::Bolt => '⚡',
            Symbol::Clover => '☘',
            Symbol::Fleur => '⚜',
            Symbol::Blossom => '✿',
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Stable position index of a card within its deck.
///
/// Ids run `0..DECK_SIZE` in board order and never change for the lifetime
/// of a deck. A restart builds a new deck, so ids are only meaningful
/// relative to one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Index into the deck's card slice.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A single tile on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Position index, stable for the deck's lifetime.
    pub id: CardId,

    /// The symbol revealed when this card is face-up.
    pub symbol: Symbol,

    /// True once this card's pair has been matched. Never reverts.
    pub matched: bool,
}

impl Card {
    /// Create a new face-down, unmatched card.
    #[must_use]
    pub const fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            matched: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_has_eight_distinct_symbols() {
        assert_eq!(Symbol::ALL.len(), 8);

        for (i, a) in Symbol::ALL.iter().enumerate() {
            for b in &Symbol::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let glyphs: Vec<char> = Symbol::ALL.iter().map(|s| s.glyph()).collect();
        let mut deduped = glyphs.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), glyphs.len());
    }

    #[test]
    fn test_card_id_display() {
        assert_eq!(format!("{}", CardId::new(7)), "Card(7)");
    }

    #[test]
    fn test_new_card_is_face_down_and_unmatched() {
        let card = Card::new(CardId::new(3), Symbol::Heart);
        assert_eq!(card.id, CardId::new(3));
        assert_eq!(card.symbol, Symbol::Heart);
        assert!(!card.matched);
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(CardId::new(5), Symbol::Clover);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
