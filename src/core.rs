//! Core traits for the sequences `stabuniq` operates on.
//!
//! This module defines:
//! - [`Sequence`]: read-only positional access, all the position builders need.
//! - [`SwapSequence`]: positional swaps, needed by the compactor.
//! - [`TruncateSequence`]: structural shrinking, needed by the truncator.
//!
//! Positions are plain `usize` indices. They stay valid across swaps and element
//! mutation, and become meaningless once the sequence is resized.

use std::collections::VecDeque;
use std::convert::Infallible;

/// A finite, randomly indexable sequence of items.
///
/// # Examples
///
/// Exposing a column of a table without copying it:
///
/// ```
/// use stabuniq::core::Sequence;
///
/// struct Column<'a> {
///     rows: &'a [(u32, String)],
/// }
///
/// impl Sequence for Column<'_> {
///     type Item = u32;
///
///     fn get_item(&self, index: usize) -> &u32 {
///         &self.rows[index].0
///     }
///
///     fn len(&self) -> usize {
///         self.rows.len()
///     }
/// }
/// ```
pub trait Sequence {
    /// The element type.
    type Item;

    /// Returns the item at `index`.
    ///
    /// Callers in this crate only pass indices below [`Sequence::len`].
    fn get_item(&self, index: usize) -> &Self::Item;

    /// Returns the number of items in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A [`Sequence`] whose items can be exchanged in place.
///
/// Swapping may fail for sequences backed by something other than memory (a
/// memory-mapped file, a remote buffer). A failed swap must leave both positions
/// holding valid items; the compactor relies on this for its weak guarantee.
pub trait SwapSequence: Sequence {
    /// Error produced by a failed swap.
    type Error;

    /// Exchanges the items at positions `a` and `b`.
    fn try_swap(&mut self, a: usize, b: usize) -> Result<(), Self::Error>;
}

/// A [`SwapSequence`] that can drop its trailing items.
pub trait TruncateSequence: SwapSequence {
    /// Shortens the sequence to `len` items, dropping the rest.
    ///
    /// Has no effect if `len` is not smaller than the current length.
    fn truncate_to(&mut self, len: usize);
}

impl<T> Sequence for [T] {
    type Item = T;

    fn get_item(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T> SwapSequence for [T] {
    type Error = Infallible;

    #[inline]
    fn try_swap(&mut self, a: usize, b: usize) -> Result<(), Infallible> {
        self.swap(a, b);
        Ok(())
    }
}

// Explicit Vec impls to improve ergonomics (avoiding .as_slice()).
impl<T> Sequence for Vec<T> {
    type Item = T;

    fn get_item(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T> SwapSequence for Vec<T> {
    type Error = Infallible;

    #[inline]
    fn try_swap(&mut self, a: usize, b: usize) -> Result<(), Infallible> {
        self.swap(a, b);
        Ok(())
    }
}

impl<T> TruncateSequence for Vec<T> {
    fn truncate_to(&mut self, len: usize) {
        self.truncate(len);
    }
}

// VecDeque provides O(1) random access, so it qualifies as well.
impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn get_item(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T> SwapSequence for VecDeque<T> {
    type Error = Infallible;

    #[inline]
    fn try_swap(&mut self, a: usize, b: usize) -> Result<(), Infallible> {
        self.swap(a, b);
        Ok(())
    }
}

impl<T> TruncateSequence for VecDeque<T> {
    fn truncate_to(&mut self, len: usize) {
        self.truncate(len);
    }
}
