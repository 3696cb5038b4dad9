//! A memory-matching card game engine with optional `no_std` support.
//!
//! The crate provides a [`MatchEngine`] that owns a shuffled deck of card
//! pairs, turns cards face up on request, pairs matching cards, and asks a
//! [`Scheduler`] to flip mismatched pairs back after a delay.
//!
//! # Example
//!
//! ```
//! use memomatch::{EngineOptions, ManualClock, MatchEngine, MatchEvent};
//!
//! let clock = ManualClock::new();
//! let engine = MatchEngine::new(EngineOptions::default(), 42, &clock).unwrap();
//!
//! let first = engine.cards()[0].id;
//! let event = engine.select_card(first).event;
//! assert_eq!(event, MatchEvent::AwaitingSecondPick { card: first });
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod engine;
pub mod error;
pub mod options;
pub mod outcome;
pub mod timer;
mod sync;

// Re-export main types
pub use card::{Card, CardId, DEFAULT_SYMBOLS, PAIR_PRESETS};
pub use engine::{DeckState, MatchEngine};
pub use error::InvalidConfiguration;
pub use options::{EngineOptions, ThirdPick};
pub use outcome::{MatchEvent, Transition};
pub use timer::{FlipTicket, ManualClock, Scheduler, TimerHandle};
