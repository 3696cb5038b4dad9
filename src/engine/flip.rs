use crate::outcome::{MatchEvent, Transition};
use crate::timer::{FlipTicket, Scheduler};

use super::MatchEngine;

impl<S: Scheduler> MatchEngine<S> {
    /// Applies a scheduled flip-back.
    ///
    /// Call this when the scheduler delivers `ticket`. If the ticket belongs
    /// to the pending mismatch, both cards are turned face down and
    /// [`MatchEvent::FlippedBack`] is reported. Tickets from a canceled or
    /// superseded flip-back, including any scheduled before the last
    /// [`reset`](MatchEngine::reset), are ignored.
    pub fn flip_back(&self, ticket: FlipTicket) -> Transition {
        let mut table = self.table.lock();

        let is_current = table
            .pending
            .as_ref()
            .is_some_and(|pending| pending.ticket == ticket);
        let pending = if is_current { table.pending.take() } else { None };
        let Some(pending) = pending else {
            tracing::trace!(generation = ticket.generation(), "ignoring stale flip-back");
            return table.transition(MatchEvent::Ignored, None);
        };

        table.set_face_up(&pending.pair, false);
        tracing::debug!(
            first = %pending.pair[0],
            second = %pending.pair[1],
            "flipped mismatched pair back"
        );

        table.transition(MatchEvent::FlippedBack { pair: pending.pair }, None)
    }
}
