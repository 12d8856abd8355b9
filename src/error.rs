//! Errors reported by checked compaction.

/// Error returned by [`compact_checked`](crate::algo::compact_checked).
///
/// `E` is the [`SwapSequence::Error`](crate::core::SwapSequence::Error) of the
/// sequence being compacted.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error<E> {
    /// The sequence failed to swap two items.
    ///
    /// Every swap that completed before this one is kept; the sequence holds the
    /// same items as before, partially reordered.
    #[error("failed to swap items at positions {a} and {b}")]
    Swap {
        a: usize,
        b: usize,
        #[source]
        source: E,
    },

    /// A first-occurrence position lies outside the compacted range.
    #[error("position {position} lies outside the range {start}..{end}")]
    OutOfRange {
        position: usize,
        start: usize,
        end: usize,
    },

    /// First-occurrence positions must be strictly ascending.
    #[error("position {position} follows {previous}; positions must be strictly ascending")]
    NotAscending { previous: usize, position: usize },
}
