//! Deck state types.

use crate::card::CardId;
use crate::timer::FlipTicket;

/// Deck-level state, derived from the cards, the pending flip-back, and
/// whether any card has been picked since the deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckState {
    /// Freshly dealt, no card has been picked yet.
    Dealt,
    /// Cards are being picked.
    InPlay,
    /// A mismatched pair is waiting to be flipped back.
    Resolving,
    /// Every card is matched.
    Solved,
}

/// A scheduled flip-back together with the handle needed to cancel it.
#[derive(Debug)]
pub(crate) struct PendingFlip<H> {
    pub(crate) ticket: FlipTicket,
    pub(crate) handle: H,
    pub(crate) pair: [CardId; 2],
}
