//! Match engine and deck management.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::sync::Mutex;

use crate::card::{Card, CardId};
use crate::error::InvalidConfiguration;
use crate::options::EngineOptions;
use crate::outcome::{MatchEvent, Transition};
use crate::timer::Scheduler;

mod flip;
mod select;
pub mod state;

use state::PendingFlip;
pub use state::DeckState;

/// Cards and selection bookkeeping, guarded by a single lock so that picks and
/// flip-backs are applied atomically with respect to each other.
struct Table<H> {
    cards: Vec<Card>,
    pending: Option<PendingFlip<H>>,
    /// Next card id to hand out. Never reused across deals.
    next_id: u32,
    /// Generation of the most recently scheduled flip-back.
    generation: u64,
    /// Whether a card has been picked since the last deal.
    picked: bool,
}

impl<H> Table<H> {
    fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }

    fn set_face_up(&mut self, ids: &[CardId], face_up: bool) {
        for card in &mut self.cards {
            if ids.contains(&card.id) {
                card.face_up = face_up;
            }
        }
    }

    fn is_solved(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|card| card.matched)
    }

    fn transition(&self, event: MatchEvent, superseded: Option<[CardId; 2]>) -> Transition {
        Transition {
            event,
            cards: self.cards.clone(),
            superseded,
        }
    }
}

/// A memory-matching engine that owns the deck and resolves picks.
///
/// Every operation takes `&self`; the deck, the pending flip-back, and the id
/// counter live behind one lock. The scheduler is only asked to deliver a
/// [`FlipTicket`](crate::FlipTicket) later, which the driver passes back to
/// [`MatchEngine::flip_back`].
pub struct MatchEngine<S: Scheduler> {
    /// Engine options.
    options: EngineOptions,
    /// Timer collaborator.
    scheduler: S,
    /// Deck and selection state.
    table: Mutex<Table<S::Handle>>,
    /// Random number generator. Locked after `table` when both are held.
    rng: Mutex<ChaCha8Rng>,
}

impl<S: Scheduler> MatchEngine<S> {
    /// Creates an engine and deals `options.pair_count` pairs from
    /// `options.symbols`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured pair count is zero, the symbol pool
    /// is empty, or the deck is too large.
    ///
    /// # Example
    ///
    /// ```
    /// use memomatch::{EngineOptions, ManualClock, MatchEngine};
    ///
    /// let clock = ManualClock::new();
    /// let engine = MatchEngine::new(EngineOptions::default(), 42, &clock).unwrap();
    /// assert_eq!(engine.cards().len(), 6);
    /// ```
    pub fn new(
        options: EngineOptions,
        seed: u64,
        scheduler: S,
    ) -> Result<Self, InvalidConfiguration> {
        let engine = Self {
            options,
            scheduler,
            table: Mutex::new(Table {
                cards: Vec::new(),
                pending: None,
                next_id: 0,
                generation: 0,
                picked: false,
            }),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        };
        engine.redeal()?;
        Ok(engine)
    }

    /// Replaces the deck with `2 * pair_count` freshly shuffled cards.
    ///
    /// Duplicate symbols in `content_pool` are dropped (first occurrence
    /// wins). When fewer distinct symbols than pairs are supplied, symbols are
    /// reused in order. Any pending flip-back is canceled. Returns the new
    /// deck.
    ///
    /// # Errors
    ///
    /// Returns an error if `pair_count` is zero, `content_pool` is empty, or
    /// the card id space cannot hold the new deck. The current deck is left
    /// unchanged.
    pub fn reset<T: AsRef<str>>(
        &self,
        pair_count: usize,
        content_pool: &[T],
    ) -> Result<Vec<Card>, InvalidConfiguration> {
        if pair_count == 0 {
            return Err(InvalidConfiguration::ZeroPairs);
        }
        let symbols = distinct_symbols(content_pool);
        if symbols.is_empty() {
            return Err(InvalidConfiguration::EmptyContentPool);
        }

        let mut table = self.table.lock();
        let card_count = pair_count
            .checked_mul(2)
            .and_then(|count| u32::try_from(count).ok())
            .ok_or(InvalidConfiguration::TooManyPairs)?;
        let next_id = table
            .next_id
            .checked_add(card_count)
            .ok_or(InvalidConfiguration::TooManyPairs)?;

        let mut rng = self.rng.lock();
        let cards = build_deck(&symbols, pair_count, table.next_id, &mut rng);
        drop(rng);

        if let Some(pending) = table.pending.take() {
            tracing::debug!(
                generation = pending.ticket.generation(),
                "canceling flip-back for replaced deck"
            );
            self.scheduler.cancel(pending.handle);
        }
        table.cards = cards;
        table.next_id = next_id;
        table.picked = false;

        tracing::info!(pairs = pair_count, symbols = symbols.len(), "dealt new deck");
        Ok(table.cards.clone())
    }

    /// Deals a new deck using the configured pair count and symbols.
    ///
    /// # Errors
    ///
    /// Same as [`MatchEngine::reset`].
    pub fn redeal(&self) -> Result<Vec<Card>, InvalidConfiguration> {
        self.reset(self.options.pair_count, self.options.symbols.as_slice())
    }

    /// Returns the engine options.
    pub const fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Returns the timer collaborator.
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Returns a snapshot of the deck in display order.
    pub fn cards(&self) -> Vec<Card> {
        self.table.lock().cards.clone()
    }

    /// Returns a copy of the card with the given id.
    ///
    /// Returns `None` if the id does not belong to the current deck.
    pub fn card(&self, id: CardId) -> Option<Card> {
        let table = self.table.lock();
        table.position(id).map(|index| table.cards[index].clone())
    }

    /// Returns the ids of cards that are face up and not yet matched, in deck
    /// order.
    pub fn pending_ids(&self) -> Vec<CardId> {
        self.table
            .lock()
            .cards
            .iter()
            .filter(|card| card.is_pending())
            .map(|card| card.id)
            .collect()
    }

    /// Returns the number of pairs in the current deck.
    pub fn pair_count(&self) -> usize {
        self.table.lock().cards.len() / 2
    }

    /// Returns the number of matched pairs.
    pub fn matched_pairs(&self) -> usize {
        self.table
            .lock()
            .cards
            .iter()
            .filter(|card| card.matched)
            .count()
            / 2
    }

    /// Returns whether every card is matched.
    ///
    /// The engine does not end the game itself; deciding what to do with a
    /// solved deck is left to the caller.
    pub fn is_solved(&self) -> bool {
        self.table.lock().is_solved()
    }

    /// Returns whether a mismatched pair is waiting to be flipped back.
    pub fn has_pending_flip(&self) -> bool {
        self.table.lock().pending.is_some()
    }

    /// Returns the current deck state.
    pub fn state(&self) -> DeckState {
        let table = self.table.lock();
        if table.is_solved() {
            DeckState::Solved
        } else if table.pending.is_some() {
            DeckState::Resolving
        } else if table.picked {
            DeckState::InPlay
        } else {
            DeckState::Dealt
        }
    }
}

/// Removes duplicate symbols, keeping the first occurrence of each.
fn distinct_symbols<T: AsRef<str>>(pool: &[T]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    pool.iter()
        .map(|symbol| symbol.as_ref())
        .filter(|symbol| seen.insert(*symbol))
        .map(ToString::to_string)
        .collect()
}

/// Builds and shuffles a deck of `pair_count` pairs, numbering cards from
/// `first_id`.
fn build_deck(
    symbols: &[String],
    pair_count: usize,
    first_id: u32,
    rng: &mut ChaCha8Rng,
) -> Vec<Card> {
    let mut cards = Vec::with_capacity(pair_count * 2);
    let mut id = first_id;

    for pair_index in 0..pair_count {
        let content = &symbols[pair_index % symbols.len()];
        cards.push(Card::new(CardId(id), content.clone()));
        cards.push(Card::new(CardId(id + 1), content.clone()));
        id += 2;
    }

    cards.shuffle(rng);
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn distinct_symbols_keeps_first_occurrence() {
        assert_eq!(
            distinct_symbols(&["B", "A", "B", "C", "A"]),
            symbols(&["B", "A", "C"])
        );
    }

    #[test]
    fn build_deck_wraps_short_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let deck = build_deck(&symbols(&["X", "Y"]), 3, 10, &mut rng);

        assert_eq!(deck.len(), 6);
        assert_eq!(deck.iter().filter(|card| card.content == "X").count(), 4);
        assert_eq!(deck.iter().filter(|card| card.content == "Y").count(), 2);

        let mut ids: Vec<u32> = deck.iter().map(|card| card.id.0).collect();
        ids.sort_unstable();
        assert_eq!(ids, [10, 11, 12, 13, 14, 15]);
    }

    #[test]
    fn build_deck_is_seed_deterministic() {
        let pool = symbols(&["A", "B", "C", "D"]);
        let first = build_deck(&pool, 4, 0, &mut ChaCha8Rng::seed_from_u64(9));
        let second = build_deck(&pool, 4, 0, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(first, second);
        assert!(first.iter().all(|card| !card.face_up && !card.matched));
    }
}
