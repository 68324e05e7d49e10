//! The match engine: game lifecycle, flip resolution, win detection.
//!
//! ## Operations
//!
//! - [`MatchEngine::start_game`] / [`MatchEngine::restart_game`]: shuffle a
//!   fresh deck and enter the reveal window.
//! - [`MatchEngine::flip_card`]: attempt to flip one card. Invalid flips are
//!   silent no-ops, never errors; the game loop favors responsiveness over
//!   an error taxonomy.
//! - [`MatchEngine::timer_fired`]: apply a previously scheduled delayed
//!   effect, unless it has gone stale.
//! - [`MatchEngine::view`]: snapshot the board for the presentation layer.
//!
//! All operations are synchronous and serialized; the engine is
//! single-threaded by construction and holds no interior mutability.
//!
//! ## Example
//!
//! ```
//! use memo_engine::engine::{MatchEngine, TimerResult};
//! use memo_engine::core::Phase;
//!
//! let mut engine = MatchEngine::new(42);
//! let reveal = engine.start_game();
//! assert_eq!(engine.phase(), Phase::Revealing);
//!
//! // The host waits out reveal.delay(), then:
//! assert_eq!(engine.timer_fired(reveal), TimerResult::Applied);
//! assert_eq!(engine.phase(), Phase::Playing);
//! ```

use tracing::{debug, trace};

use crate::core::{CardId, Deck, GameRng, Phase, Session};
use crate::view::{BoardView, CardView};

use super::timer::{TimerKind, TimerResult, TimerToken, MISMATCH_DURATION, REVEAL_DURATION};

/// What a `flip_card` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// The flip violated a precondition and changed nothing.
    Ignored,
    /// First card of an attempt is now face-up, awaiting the second pick.
    FirstUp,
    /// Second card completed the attempt and the pair matched.
    /// `won` is true when this was the eighth pair.
    Matched { won: bool },
    /// Second card completed the attempt and the pair did not match.
    /// Both cards stay face-up until the token fires or a restart
    /// supersedes it.
    Mismatch(TimerToken),
}

/// Owns the game session and applies the matching rules.
///
/// The session is the only mutable state; it is replaced wholesale on every
/// (re)start and identified by a generation counter so that timers scheduled
/// against a dead session cannot touch the live one.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    rng: GameRng,
    session: Option<Session>,
    generation: u64,
}

impl MatchEngine {
    /// Create an engine with a fixed RNG seed (deterministic decks).
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            session: None,
            generation: 0,
        }
    }

    /// Create an engine seeded from OS entropy, for interactive play.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
            session: None,
            generation: 0,
        }
    }

    /// Start a new game.
    ///
    /// Builds an independently shuffled deck, resets all counters, bumps the
    /// generation (invalidating every outstanding timer), and enters the
    /// reveal window. Returns the `RevealEnd` token the host must schedule;
    /// until it fires, all flips are rejected.
    pub fn start_game(&mut self) -> TimerToken {
        self.generation += 1;
        let deck = Deck::shuffled(&mut self.rng);
        self.session = Some(Session::new(deck, self.generation));

        debug!(generation = self.generation, "game started, revealing deck");
        TimerToken::new(self.generation, TimerKind::RevealEnd, REVEAL_DURATION)
    }

    /// Restart: discard the current session and start a fresh one.
    ///
    /// Identical to [`start_game`](Self::start_game); both names exist
    /// because the boundary exposes both.
    pub fn restart_game(&mut self) -> TimerToken {
        self.start_game()
    }

    /// Attempt to flip a card.
    ///
    /// The flip is a silent no-op (`FlipOutcome::Ignored`) unless all of:
    /// the phase is `Playing`, fewer than 2 flips are pending, the card
    /// exists, it is not matched, and it is not already face-up.
    ///
    /// A second accepted flip completes an attempt: the move counter goes up
    /// exactly once, then the pair either resolves as a match or stays
    /// visible until the returned `MismatchClear` token fires.
    pub fn flip_card(&mut self, id: CardId) -> FlipOutcome {
        let Some(session) = self.session.as_mut() else {
            return FlipOutcome::Ignored;
        };

        if session.phase() != Phase::Playing {
            trace!(%id, phase = ?session.phase(), "flip rejected: not playing");
            return FlipOutcome::Ignored;
        }
        if session.flipped().len() == 2 {
            trace!(%id, "flip rejected: two cards already pending");
            return FlipOutcome::Ignored;
        }
        let Some(card) = session.card(id) else {
            trace!(%id, "flip rejected: no such card");
            return FlipOutcome::Ignored;
        };
        if card.matched {
            trace!(%id, "flip rejected: already matched");
            return FlipOutcome::Ignored;
        }
        if session.flipped().contains(&id) {
            trace!(%id, "flip rejected: already face-up");
            return FlipOutcome::Ignored;
        }

        session.push_flipped(id);

        if session.flipped().len() < 2 {
            trace!(%id, "first card up");
            return FlipOutcome::FirstUp;
        }

        // Attempt completed: count the move, then resolve.
        session.record_move();
        let first = session.flipped()[0];
        let second = session.flipped()[1];

        // Both ids were validated on their way into `flipped`.
        let is_match = match (session.card(first), session.card(second)) {
            (Some(a), Some(b)) => a.symbol == b.symbol,
            _ => false,
        };

        if is_match {
            session.resolve_match(first, second);
            let won = session.is_won();
            debug!(
                %first, %second,
                matched_pairs = session.matched_pairs(),
                won,
                "pair matched"
            );
            FlipOutcome::Matched { won }
        } else {
            debug!(%first, %second, "mismatch, scheduling clear");
            FlipOutcome::Mismatch(TimerToken::new(
                session.generation(),
                TimerKind::MismatchClear,
                MISMATCH_DURATION,
            ))
        }
    }

    /// Apply a scheduled delayed effect.
    ///
    /// Returns `TimerResult::Stale` without touching state when the token's
    /// generation does not match the live session (a restart happened in
    /// between) or when its effect is no longer pending.
    pub fn timer_fired(&mut self, token: TimerToken) -> TimerResult {
        let Some(session) = self.session.as_mut() else {
            return TimerResult::Stale;
        };

        if token.generation() != session.generation() {
            trace!(
                token_generation = token.generation(),
                live_generation = session.generation(),
                kind = ?token.kind(),
                "dropping stale timer"
            );
            return TimerResult::Stale;
        }

        match token.kind() {
            TimerKind::RevealEnd => {
                if session.phase() != Phase::Revealing {
                    return TimerResult::Stale;
                }
                session.set_phase(Phase::Playing);
                debug!(generation = session.generation(), "reveal ended, playing");
                TimerResult::Applied
            }
            TimerKind::MismatchClear => {
                // Only a full unresolved pair can be pending a clear.
                if session.phase() != Phase::Playing || session.flipped().len() != 2 {
                    return TimerResult::Stale;
                }
                session.clear_flipped();
                debug!("mismatched pair returned face-down");
                TimerResult::Applied
            }
        }
    }

    /// The current phase; `NotStarted` before the first `start_game`.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session
            .as_ref()
            .map_or(Phase::NotStarted, Session::phase)
    }

    /// The live session, if a game has been started.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Snapshot the board for the presentation layer.
    ///
    /// Face-up visibility is derived here and only here:
    /// `matched || flipped || phase == Revealing`. Symbols are withheld for
    /// face-down cards.
    #[must_use]
    pub fn view(&self) -> BoardView {
        let Some(session) = self.session.as_ref() else {
            return BoardView::empty();
        };

        let revealing = session.phase() == Phase::Revealing;
        let cards = session
            .deck()
            .cards()
            .iter()
            .map(|card| {
                let face_up =
                    card.matched || session.flipped().contains(&card.id) || revealing;
                CardView {
                    id: card.id,
                    matched: card.matched,
                    face_up,
                    symbol: face_up.then_some(card.symbol),
                }
            })
            .collect();

        BoardView {
            cards,
            moves: session.moves(),
            matched_pairs: session.matched_pairs(),
            total_pairs: crate::core::SYMBOL_COUNT as u8,
            phase: session.phase(),
        }
    }
}
