use crate::card::CardId;
use crate::options::ThirdPick;
use crate::outcome::{MatchEvent, Transition};
use crate::timer::{FlipTicket, Scheduler};

use super::MatchEngine;
use super::state::PendingFlip;

impl<S: Scheduler> MatchEngine<S> {
    /// Turns a card face up and resolves the pick.
    ///
    /// - With no other face-up unmatched card, the engine waits for a second
    ///   pick ([`MatchEvent::AwaitingSecondPick`]).
    /// - With one, the two are compared: equal content marks both matched
    ///   ([`MatchEvent::Matched`]); different content schedules a flip-back
    ///   ([`MatchEvent::MismatchPendingFlip`]).
    ///
    /// Picking an unknown id, a face-up card, or a matched card is a no-op
    /// and reports [`MatchEvent::Ignored`]. A pick made while a flip-back is
    /// pending is handled according to [`ThirdPick`].
    pub fn select_card(&self, id: CardId) -> Transition {
        let mut table = self.table.lock();

        let Some(index) = table.position(id) else {
            tracing::trace!(card = %id, "ignoring pick of unknown card");
            return table.transition(MatchEvent::Ignored, None);
        };
        if table.cards[index].face_up || table.cards[index].matched {
            tracing::trace!(card = %id, "ignoring pick of visible card");
            return table.transition(MatchEvent::Ignored, None);
        }

        let mut superseded = None;
        if table.pending.is_some() {
            match self.options.third_pick {
                ThirdPick::Ignore => {
                    tracing::trace!(card = %id, "ignoring pick while flip-back is pending");
                    return table.transition(MatchEvent::Ignored, None);
                }
                ThirdPick::ResolvePending => {
                    if let Some(pending) = table.pending.take() {
                        self.scheduler.cancel(pending.handle);
                        table.set_face_up(&pending.pair, false);
                        tracing::debug!(
                            first = %pending.pair[0],
                            second = %pending.pair[1],
                            "flipped pending pair back early"
                        );
                        superseded = Some(pending.pair);
                    }
                }
            }
        }

        table.cards[index].face_up = true;
        table.picked = true;

        let other = table
            .cards
            .iter()
            .position(|card| card.is_pending() && card.id != id);
        let Some(other) = other else {
            tracing::debug!(card = %id, "awaiting second pick");
            return table.transition(MatchEvent::AwaitingSecondPick { card: id }, superseded);
        };

        let pair = [table.cards[other].id, id];
        if table.cards[other].content == table.cards[index].content {
            table.cards[other].matched = true;
            table.cards[index].matched = true;
            tracing::debug!(first = %pair[0], second = %pair[1], "pair matched");
            if table.is_solved() {
                tracing::info!(pairs = table.cards.len() / 2, "deck solved");
            }
            return table.transition(MatchEvent::Matched { pair }, superseded);
        }

        table.generation += 1;
        let ticket = FlipTicket(table.generation);
        let handle = self
            .scheduler
            .schedule(self.options.flip_back_delay, ticket);
        table.pending = Some(PendingFlip {
            ticket,
            handle,
            pair,
        });
        tracing::debug!(
            first = %pair[0],
            second = %pair[1],
            generation = ticket.generation(),
            "mismatch, flip-back scheduled"
        );

        table.transition(MatchEvent::MismatchPendingFlip { pair, ticket }, superseded)
    }
}
