//! Card types and content pools.

use alloc::string::String;
use core::fmt;

/// Stable identifier of a card.
///
/// Identifiers are handed out by the engine from a counter that never
/// repeats, so an id taken from a previous deck never refers to a card of the
/// current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A memory card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    /// The card identifier.
    pub id: CardId,
    /// The symbol cards are matched on.
    pub content: String,
    /// Whether the card is currently shown.
    pub face_up: bool,
    /// Whether the card has been paired. Never reset while the deck is in play.
    pub matched: bool,
}

impl Card {
    /// Creates a face-down, unmatched card.
    #[must_use]
    pub const fn new(id: CardId, content: String) -> Self {
        Self {
            id,
            content,
            face_up: false,
            matched: false,
        }
    }

    /// Returns whether the symbol should be rendered (face up or matched).
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.face_up || self.matched
    }

    /// Returns whether the card is face up and waiting to be resolved.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.face_up && !self.matched
    }
}

/// Default content pool.
pub const DEFAULT_SYMBOLS: [&str; 10] = [
    "🚀", "🌟", "🌍", "🌕", "🌈", "🔥", "🎉", "🎈", "🍎", "🚗",
];

/// Pair counts offered by the size picker.
pub const PAIR_PRESETS: [usize; 3] = [3, 6, 10];
