//! Error types for engine operations.

use thiserror::Error;

/// Errors returned when a deal is requested with a configuration that cannot
/// produce a playable deck. The current deck is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidConfiguration {
    /// Pair count is zero.
    #[error("pair count must be at least 1")]
    ZeroPairs,
    /// The content pool has no symbols.
    #[error("content pool is empty")]
    EmptyContentPool,
    /// The deck would not fit in the remaining card id space.
    #[error("too many pairs requested")]
    TooManyPairs,
}
