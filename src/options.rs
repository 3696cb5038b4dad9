//! Engine configuration options.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::time::Duration;

use crate::card::DEFAULT_SYMBOLS;

/// What happens when a card is picked while a mismatched pair is still
/// waiting to be flipped back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ThirdPick {
    /// The pick is ignored until the flip-back fires.
    #[default]
    Ignore,
    /// The pending pair is flipped back immediately, its timer is canceled,
    /// and the picked card is turned face up.
    ResolvePending,
}

/// Configuration options for a memory game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use memomatch::{EngineOptions, ThirdPick};
///
/// let options = EngineOptions::default()
///     .with_pair_count(6)
///     .with_flip_back_delay(Duration::from_secs(1))
///     .with_third_pick(ThirdPick::ResolvePending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Delay before a mismatched pair is turned face down again.
    pub flip_back_delay: Duration,
    /// Number of pairs dealt by [`MatchEngine::new`](crate::MatchEngine::new)
    /// and [`MatchEngine::redeal`](crate::MatchEngine::redeal).
    pub pair_count: usize,
    /// Behavior of a pick made while a flip-back is pending.
    pub third_pick: ThirdPick,
    /// Symbols cards are drawn from.
    pub symbols: Vec<String>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            flip_back_delay: Duration::from_millis(750),
            pair_count: 3,
            third_pick: ThirdPick::Ignore,
            symbols: DEFAULT_SYMBOLS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl EngineOptions {
    /// Sets the flip-back delay.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use memomatch::EngineOptions;
    ///
    /// let options = EngineOptions::default().with_flip_back_delay(Duration::from_secs(1));
    /// assert_eq!(options.flip_back_delay, Duration::from_secs(1));
    /// ```
    #[must_use]
    pub fn with_flip_back_delay(mut self, delay: Duration) -> Self {
        self.flip_back_delay = delay;
        self
    }

    /// Sets the number of pairs dealt.
    ///
    /// # Example
    ///
    /// ```
    /// use memomatch::EngineOptions;
    ///
    /// let options = EngineOptions::default().with_pair_count(10);
    /// assert_eq!(options.pair_count, 10);
    /// ```
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Sets the third-pick behavior.
    ///
    /// # Example
    ///
    /// ```
    /// use memomatch::{EngineOptions, ThirdPick};
    ///
    /// let options = EngineOptions::default().with_third_pick(ThirdPick::ResolvePending);
    /// assert_eq!(options.third_pick, ThirdPick::ResolvePending);
    /// ```
    #[must_use]
    pub fn with_third_pick(mut self, third_pick: ThirdPick) -> Self {
        self.third_pick = third_pick;
        self
    }

    /// Sets the content pool.
    ///
    /// # Example
    ///
    /// ```
    /// use memomatch::EngineOptions;
    ///
    /// let options = EngineOptions::default().with_symbols(["A", "B"]);
    /// assert_eq!(options.symbols, ["A", "B"]);
    /// ```
    #[must_use]
    pub fn with_symbols<I, T>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }
}
