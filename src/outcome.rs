//! Results reported to the presentation layer after each operation.

use alloc::vec::Vec;

use crate::card::{Card, CardId};
use crate::timer::FlipTicket;

/// What an operation did to the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEvent {
    /// One card is face up and the engine waits for a second pick.
    AwaitingSecondPick {
        /// The card that was turned face up.
        card: CardId,
    },
    /// Two cards with equal content were paired.
    Matched {
        /// The paired cards, in pick order.
        pair: [CardId; 2],
    },
    /// Two cards with different content are face up and a flip-back has
    /// been scheduled.
    MismatchPendingFlip {
        /// The mismatched cards, in pick order.
        pair: [CardId; 2],
        /// Ticket handed to the scheduler for the flip-back.
        ticket: FlipTicket,
    },
    /// A mismatched pair was turned face down again.
    FlippedBack {
        /// The cards that were turned face down.
        pair: [CardId; 2],
    },
    /// Nothing changed.
    Ignored,
}

/// Result of an engine operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// What happened.
    pub event: MatchEvent,
    /// Snapshot of the whole deck after the operation.
    pub cards: Vec<Card>,
    /// Pending pair flipped down early by a third pick, if any.
    pub superseded: Option<[CardId; 2]>,
}

impl Transition {
    /// Returns whether the operation changed nothing.
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self.event, MatchEvent::Ignored)
    }
}
