//! Timer collaborator used to schedule delayed flip-backs.
//!
//! The engine never sleeps or spawns anything. When a mismatch is detected it
//! asks a [`Scheduler`] to deliver a [`FlipTicket`] after a delay and keeps the
//! returned handle so the request can be canceled. Whoever drives the engine
//! passes due tickets back to [`MatchEngine::flip_back`](crate::MatchEngine::flip_back).

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::time::Duration;

use crate::sync::Mutex;

/// Token identifying one scheduled flip-back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlipTicket(pub(crate) u64);

impl FlipTicket {
    /// Returns the generation number carried by the ticket.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Schedules delayed delivery of flip-back tickets.
///
/// Implementations must not call back into the engine from `schedule` or
/// `cancel`: both are invoked while the engine state is locked.
pub trait Scheduler {
    /// Handle used to cancel a scheduled ticket.
    type Handle;

    /// Requests delivery of `ticket` once `delay` has elapsed.
    fn schedule(&self, delay: Duration, ticket: FlipTicket) -> Self::Handle;

    /// Cancels a scheduled ticket. Canceling a ticket that already fired is a
    /// no-op.
    fn cancel(&self, handle: Self::Handle);
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
    type Handle = S::Handle;

    fn schedule(&self, delay: Duration, ticket: FlipTicket) -> Self::Handle {
        (**self).schedule(delay, ticket)
    }

    fn cancel(&self, handle: Self::Handle) {
        (**self).cancel(handle);
    }
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
    type Handle = S::Handle;

    fn schedule(&self, delay: Duration, ticket: FlipTicket) -> Self::Handle {
        (**self).schedule(delay, ticket)
    }

    fn cancel(&self, handle: Self::Handle) {
        (**self).cancel(handle);
    }
}

/// Handle returned by [`ManualClock::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Entry {
    handle: u64,
    deadline: Duration,
    ticket: FlipTicket,
}

#[derive(Debug, Default)]
struct ClockState {
    now: Duration,
    next_handle: u64,
    entries: Vec<Entry>,
}

/// A scheduler driven by explicit calls to [`ManualClock::advance`].
///
/// ```
/// use core::time::Duration;
/// use memomatch::{ManualClock, Scheduler};
///
/// let clock = ManualClock::new();
/// assert_eq!(clock.pending(), 0);
/// assert!(clock.advance(Duration::from_secs(1)).is_empty());
/// assert_eq!(clock.now(), Duration::from_secs(1));
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    state: Mutex<ClockState>,
}

impl ManualClock {
    /// Creates a clock at time zero with nothing scheduled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the elapsed time since the clock was created.
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Returns the number of tickets that have not fired yet.
    pub fn pending(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// Moves the clock forward and returns the tickets that became due, in
    /// deadline order.
    pub fn advance(&self, by: Duration) -> Vec<FlipTicket> {
        let mut state = self.state.lock();
        state.now = state.now.saturating_add(by);
        let now = state.now;

        let mut due: Vec<Entry> = Vec::new();
        let mut index = 0;
        while index < state.entries.len() {
            if state.entries[index].deadline <= now {
                due.push(state.entries.remove(index));
            } else {
                index += 1;
            }
        }

        due.sort_by_key(|entry| (entry.deadline, entry.handle));
        due.into_iter().map(|entry| entry.ticket).collect()
    }
}

impl Scheduler for ManualClock {
    type Handle = TimerHandle;

    fn schedule(&self, delay: Duration, ticket: FlipTicket) -> TimerHandle {
        let mut state = self.state.lock();
        let handle = state.next_handle;
        state.next_handle += 1;
        let deadline = state.now.saturating_add(delay);
        state.entries.push(Entry {
            handle,
            deadline,
            ticket,
        });
        TimerHandle(handle)
    }

    fn cancel(&self, handle: TimerHandle) {
        self.state
            .lock()
            .entries
            .retain(|entry| entry.handle != handle.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_deadline_order() {
        let clock = ManualClock::new();
        clock.schedule(Duration::from_millis(500), FlipTicket(2));
        clock.schedule(Duration::from_millis(100), FlipTicket(1));
        clock.schedule(Duration::from_secs(5), FlipTicket(3));

        assert!(clock.advance(Duration::from_millis(50)).is_empty());
        assert_eq!(
            clock.advance(Duration::from_millis(450)),
            [FlipTicket(1), FlipTicket(2)]
        );
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn canceled_ticket_never_fires() {
        let clock = ManualClock::new();
        let handle = clock.schedule(Duration::from_millis(10), FlipTicket(7));
        clock.cancel(handle);
        assert_eq!(clock.pending(), 0);
        assert!(clock.advance(Duration::from_secs(1)).is_empty());

        // Canceling again is harmless.
        clock.cancel(handle);
    }

    #[test]
    fn deadline_is_relative_to_now() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_secs(2));
        clock.schedule(Duration::from_secs(1), FlipTicket(9));
        assert!(clock.advance(Duration::from_millis(999)).is_empty());
        assert_eq!(clock.advance(Duration::from_millis(1)), [FlipTicket(9)]);
    }

    #[test]
    fn shared_clock_schedules_through_reference() {
        let clock = Arc::new(ManualClock::new());
        let by_ref: &ManualClock = &clock;
        by_ref.schedule(Duration::ZERO, FlipTicket(1));
        Scheduler::schedule(&clock, Duration::ZERO, FlipTicket(2));
        assert_eq!(clock.pending(), 2);
    }
}
