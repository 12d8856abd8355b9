//! # Stabuniq
//!
//! `stabuniq` removes duplicates from random-access sequences while keeping the
//! first occurrence of every item in its original order, without hashing and
//! without sorting the items themselves.
//!
//! Instead of sorting the data, it sorts a vector of *positions* by the items they
//! point at, keeps the first position of every run of equal items, and sorts the
//! survivors back into ascending order. A single pass then swaps those items to the
//! front of the sequence.
//!
//! ## Key Features
//!
//! - **Order Preserving**: The stable variants keep the earliest member of every
//!   equivalence class, in the order it appeared.
//! - **Minimal Moves**: Items are never cloned. Each first occurrence moves at most
//!   once, and inputs without duplicates are not touched at all.
//! - **Custom Relations**: Ordering and equality are supplied separately, so items can
//!   be deduplicated on a projected field (see [`stable_unique_positions_by_key`]).
//! - **Zero-Copy abstractions**: The [`Sequence`] family of traits lets any indexable
//!   container take part, including ones whose swaps can fail.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use stabuniq::uniquify_mut;
//!
//! let mut data = vec![5, 3, 5, 1, 3, 5];
//! uniquify_mut(&mut data);
//!
//! assert_eq!(data, vec![5, 3, 1]);
//! ```
//!
//! ### Positions Only
//!
//! The position builders only borrow the data, so they work on shared slices and
//! report which items would survive:
//!
//! ```rust
//! use stabuniq::stable_unique_positions_by_key;
//!
//! struct Point {
//!     position: [i32; 3],
//!     color: [u8; 3],
//! }
//!
//! let cloud = vec![
//!     Point { position: [0, 0, 0], color: [255, 0, 0] },
//!     Point { position: [1, 0, 0], color: [0, 255, 0] },
//!     Point { position: [0, 0, 0], color: [0, 0, 255] },
//! ];
//!
//! // Only compare point positions.
//! let positions = stable_unique_positions_by_key(&cloud, 0..cloud.len(), |p| p.position);
//!
//! assert_eq!(positions, vec![0, 1]);
//! assert_eq!(cloud[positions[0]].color, [255, 0, 0]);
//! ```
//!
//! ### Custom Sequences
//!
//! ```rust
//! use std::convert::Infallible;
//! use stabuniq::{dedup_stable, Sequence, SwapSequence, TruncateSequence};
//!
//! struct Stack(Vec<u32>);
//!
//! impl Sequence for Stack {
//!     type Item = u32;
//!
//!     fn get_item(&self, index: usize) -> &u32 {
//!         &self.0[index]
//!     }
//!
//!     fn len(&self) -> usize {
//!         self.0.len()
//!     }
//! }
//!
//! impl SwapSequence for Stack {
//!     type Error = Infallible;
//!
//!     fn try_swap(&mut self, a: usize, b: usize) -> Result<(), Infallible> {
//!         self.0.swap(a, b);
//!         Ok(())
//!     }
//! }
//!
//! impl TruncateSequence for Stack {
//!     fn truncate_to(&mut self, len: usize) {
//!         self.0.truncate(len);
//!     }
//! }
//!
//! let mut stack = Stack(vec![2, 2, 1, 2]);
//! let Ok(len) = dedup_stable(&mut stack);
//!
//! assert_eq!(len, 2);
//! assert_eq!(stack.0, vec![2, 1]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Time**: One comparison sort of `N` positions (stable or unstable), a linear
//!   pass, and a sort of the surviving positions.
//! - **Memory Overhead**: A temporary vector of positions (`8 bytes` per item).
//! - **Moves**: At most one swap per first occurrence.
//!
//! Sorting positions has good cache locality compared to probing a hash set per item,
//! so this is most effective when the input holds few duplicates. When the input is
//! mostly duplicates, a hash set that fits in cache can be faster.

pub mod algo;
pub mod config;
pub mod core;
pub mod error;
mod sort;

pub use crate::algo::{
    compact, compact_checked, dedup_stable, dedup_stable_by, dedup_stable_by_key, dedup_with,
    stable_unique_positions, stable_unique_positions_by, stable_unique_positions_by_key,
    unique_positions_with, uniquify, uniquify_mut, uniquify_with, unstable_unique_positions,
    unstable_unique_positions_by, unstable_unique_positions_by_key,
};
pub use crate::config::{Options, Stability};
pub use crate::core::{Sequence, SwapSequence, TruncateSequence};
pub use crate::error::Error;

pub mod prelude {
    pub use crate::algo::{
        compact, dedup_stable, dedup_stable_by, dedup_stable_by_key, stable_unique_positions,
        stable_unique_positions_by, stable_unique_positions_by_key, uniquify, uniquify_mut,
        unstable_unique_positions, unstable_unique_positions_by,
        unstable_unique_positions_by_key,
    };
    pub use crate::config::{Options, Stability};
    pub use crate::core::{Sequence, SwapSequence, TruncateSequence};
}
