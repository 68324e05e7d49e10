//! Core value types: cards, symbols, the deck, session state, RNG.
//!
//! Everything here is plain data; the rules that mutate it live in
//! [`crate::engine`].

pub mod card;
pub mod deck;
pub mod rng;
pub mod session;

pub use card::{Card, CardId, Symbol};
pub use deck::{Deck, DECK_SIZE, SYMBOL_COUNT};
pub use rng::GameRng;
pub use session::{Phase, Session};
