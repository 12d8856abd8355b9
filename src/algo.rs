//! Deduplication by sorting positions.
//!
//! Three layers, each built on the previous one:
//! - **Position builders** ([`stable_unique_positions_by`] and friends): sort the
//!   *indices* of a range by the items they point at, drop indices whose item equals
//!   the head of its run, and sort the survivors back into ascending order.
//! - **Compactor** ([`compact`]): walks the range once and swaps every surviving
//!   item down to a write cursor, so the first occurrences form a prefix.
//! - **Truncator** ([`dedup_stable`] and friends): compacts the whole sequence and
//!   drops the duplicate suffix.
//!
//! Items themselves are never sorted or cloned. The only items that move are the
//! first occurrences, each by at most one swap, which keeps the approach cheap
//! for large items and for inputs with few duplicates.

use crate::config::{Options, Stability};
use crate::core::{Sequence, SwapSequence, TruncateSequence};
use crate::error::Error;
use crate::sort::{heapsort_by, merge_sort_by};
use log::{debug, trace};
use std::cmp::Ordering;
use std::ops::Range;

/// Returns the first-occurrence positions of `seq`, in ascending order.
///
/// Shorthand for [`stable_unique_positions_by`] over the whole sequence, using the
/// item's own ordering and equality.
///
/// # Examples
///
/// ```
/// use stabuniq::stable_unique_positions;
///
/// let data = vec![5, 3, 5, 1, 3, 5];
/// assert_eq!(stable_unique_positions(&data), vec![0, 1, 3]);
/// ```
pub fn stable_unique_positions<S>(seq: &S) -> Vec<usize>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    stable_unique_positions_by(seq, 0..seq.len(), |a, b| a.cmp(b), |a, b| a == b)
}

/// Returns the first-occurrence positions within `range`, in ascending order.
///
/// Items are grouped with a stable sort by `compare`, so within every class of
/// items that `equal` considers the same, the earliest position is the one kept.
/// `equal` must agree with `compare`: items that `compare` orders as `Equal` must
/// be `equal`, or duplicates separated by other items may survive.
///
/// `range` is clamped to the sequence. Returned positions are absolute indices
/// into `seq`.
///
/// # Complexity
///
/// A stable sort of `range.len()` indices, plus a linear pass and a sort of the
/// survivors. Allocates one `Vec<usize>`.
///
/// # Examples
///
/// Deduplicating on a projected field:
///
/// ```
/// use stabuniq::stable_unique_positions_by;
///
/// let points = vec![(1, 'a'), (2, 'b'), (1, 'c'), (3, 'd')];
/// let positions = stable_unique_positions_by(
///     &points,
///     0..points.len(),
///     |a, b| a.0.cmp(&b.0),
///     |a, b| a.0 == b.0,
/// );
///
/// assert_eq!(positions, vec![0, 1, 3]);
/// ```
pub fn stable_unique_positions_by<S, C, E>(
    seq: &S,
    range: Range<usize>,
    compare: C,
    equal: E,
) -> Vec<usize>
where
    S: Sequence + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
    E: FnMut(&S::Item, &S::Item) -> bool,
{
    unique_positions_with(seq, range, Stability::Stable, compare, equal)
}

/// Like [`stable_unique_positions_by`], comparing items by a derived key.
///
/// ```
/// use stabuniq::stable_unique_positions_by_key;
///
/// let words = vec!["apple", "Avocado", "banana", "blueberry", "cherry"];
/// let positions = stable_unique_positions_by_key(&words, 0..words.len(), |w| {
///     w.chars().next().map(|c| c.to_ascii_lowercase())
/// });
///
/// assert_eq!(positions, vec![0, 2, 4]);
/// ```
pub fn stable_unique_positions_by_key<S, K, F>(seq: &S, range: Range<usize>, key: F) -> Vec<usize>
where
    S: Sequence + ?Sized,
    F: Fn(&S::Item) -> K,
    K: Ord,
{
    unique_positions_with(
        seq,
        range,
        Stability::Stable,
        |a, b| key(a).cmp(&key(b)),
        |a, b| key(a) == key(b),
    )
}

/// Returns the positions of one member of every equivalence class of `seq`, in
/// ascending order.
///
/// Shorthand for [`unstable_unique_positions_by`] over the whole sequence. The
/// kept values match [`stable_unique_positions`] as a set, but a later duplicate
/// may stand in for an earlier one, which can change their relative order.
pub fn unstable_unique_positions<S>(seq: &S) -> Vec<usize>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    unstable_unique_positions_by(seq, 0..seq.len(), |a, b| a.cmp(b), |a, b| a == b)
}

/// Returns one position per equivalence class within `range`, in ascending order.
///
/// Same contract as [`stable_unique_positions_by`], except that items are grouped
/// with an unstable sort. Every class is still represented exactly once and the
/// positions are still ascending, but which member of a class is kept, and so
/// where the class appears in the output, is unspecified.
pub fn unstable_unique_positions_by<S, C, E>(
    seq: &S,
    range: Range<usize>,
    compare: C,
    equal: E,
) -> Vec<usize>
where
    S: Sequence + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
    E: FnMut(&S::Item, &S::Item) -> bool,
{
    unique_positions_with(seq, range, Stability::Unstable, compare, equal)
}

/// Like [`unstable_unique_positions_by`], comparing items by a derived key.
pub fn unstable_unique_positions_by_key<S, K, F>(
    seq: &S,
    range: Range<usize>,
    key: F,
) -> Vec<usize>
where
    S: Sequence + ?Sized,
    F: Fn(&S::Item) -> K,
    K: Ord,
{
    unique_positions_with(
        seq,
        range,
        Stability::Unstable,
        |a, b| key(a).cmp(&key(b)),
        |a, b| key(a) == key(b),
    )
}

/// Builds the first-occurrence positions of `range` with the given sort stability.
///
/// 1. Collects one index per position of the (clamped) range.
/// 2. Sorts the indices by `compare` on the items they point at (merge sort when
///    stable, heapsort when not).
/// 3. Drops every index whose item is `equal` to the head of its run.
/// 4. Sorts the survivors by position.
///
/// A `compare` that is not a strict weak ordering, or an `equal` that disagrees
/// with it, never panics: the result is still strictly ascending, in range and
/// free of repeated positions, but may keep duplicates or drop first occurrences.
pub fn unique_positions_with<S, C, E>(
    seq: &S,
    range: Range<usize>,
    stability: Stability,
    mut compare: C,
    mut equal: E,
) -> Vec<usize>
where
    S: Sequence + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
    E: FnMut(&S::Item, &S::Item) -> bool,
{
    let range = clamp_range(range, seq.len());
    let total = range.len();
    let mut positions: Vec<usize> = range.collect();

    let mut is_less = |a: usize, b: usize| compare(seq.get_item(a), seq.get_item(b)).is_lt();
    match stability {
        Stability::Stable => merge_sort_by(&mut positions, &mut is_less),
        Stability::Unstable => heapsort_by(&mut positions, &mut is_less),
    }

    // `dedup_by` passes the candidate first and the retained head of the run second.
    positions.dedup_by(|candidate, retained| {
        equal(seq.get_item(*retained), seq.get_item(*candidate))
    });

    // Positions are distinct, so an unstable sort restores document order exactly.
    positions.sort_unstable();

    trace!(
        "{:?} position build kept {} of {} positions",
        stability,
        positions.len(),
        total
    );
    positions
}

/// Moves the items at `positions` to the front of `range`, preserving their order.
///
/// `positions` must be strictly ascending and lie within `range`, as returned by
/// the position builders for the same range. On success the items that were at
/// `positions` occupy `range.start..boundary` in their original relative order,
/// and `boundary` is returned. The remaining positions up to `range.end` hold
/// the other items in unspecified order.
///
/// Only first occurrences move, each with a single swap into the write cursor.
/// Swaps of a position with itself are skipped, so an input without duplicates is
/// left untouched. The walk stops as soon as the last position is placed.
///
/// Positions violating the precondition are never used as indices; they yield a
/// wrong boundary, not a panic. Use [`compact_checked`] to reject them instead.
///
/// # Errors
///
/// Returns the sequence's swap error as soon as a swap fails. Swaps already made
/// are kept: the sequence holds all of its original items, partially compacted.
///
/// # Examples
///
/// ```
/// use stabuniq::{compact, stable_unique_positions};
///
/// let mut data = vec![5, 3, 5, 1, 3, 5];
/// let positions = stable_unique_positions(&data);
/// let Ok(boundary) = compact(&mut data, 0..6, &positions);
///
/// assert_eq!(boundary, 3);
/// assert_eq!(&data[..boundary], &[5, 3, 1]);
/// ```
pub fn compact<S>(seq: &mut S, range: Range<usize>, positions: &[usize]) -> Result<usize, S::Error>
where
    S: SwapSequence + ?Sized,
{
    compact_inner(seq, range, positions, |_, _, source| source)
}

/// Like [`compact`], but validates `positions` before the first swap.
///
/// # Errors
///
/// - [`Error::OutOfRange`] if a position lies outside the clamped `range`.
/// - [`Error::NotAscending`] if positions are not strictly ascending.
/// - [`Error::Swap`] if the sequence fails to swap two items. The sequence is
///   then left partially compacted, as with [`compact`].
///
/// Validation errors are reported before anything is moved.
pub fn compact_checked<S>(
    seq: &mut S,
    range: Range<usize>,
    positions: &[usize],
) -> Result<usize, Error<S::Error>>
where
    S: SwapSequence + ?Sized,
{
    let range = clamp_range(range, seq.len());

    if let Some(&position) = positions.iter().find(|&&p| !range.contains(&p)) {
        return Err(Error::OutOfRange {
            position,
            start: range.start,
            end: range.end,
        });
    }
    if let Some(pair) = positions.windows(2).find(|pair| pair[0] >= pair[1]) {
        return Err(Error::NotAscending {
            previous: pair[0],
            position: pair[1],
        });
    }

    compact_inner(seq, range, positions, |a, b, source| Error::Swap {
        a,
        b,
        source,
    })
}

fn compact_inner<S, R, F>(
    seq: &mut S,
    range: Range<usize>,
    positions: &[usize],
    mut on_swap_error: F,
) -> Result<usize, R>
where
    S: SwapSequence + ?Sized,
    F: FnMut(usize, usize, S::Error) -> R,
{
    let range = clamp_range(range, seq.len());
    let mut write = range.start;
    let mut placed = 0;
    let mut swaps = 0;

    for read in range {
        if placed == positions.len() {
            break;
        }
        if read != positions[placed] {
            continue;
        }
        if read != write {
            seq.try_swap(read, write)
                .map_err(|source| on_swap_error(read, write, source))?;
            swaps += 1;
        }
        write += 1;
        placed += 1;
    }

    trace!("compacted {} positions with {} swaps", placed, swaps);
    Ok(write)
}

/// Builds and compacts the first occurrences of `range` without shrinking `seq`.
///
/// Returns the boundary: `range.start..boundary` holds the first occurrences in
/// original order, `boundary..range.end` the duplicates in unspecified order.
/// Items outside `range` are untouched.
///
/// # Errors
///
/// Propagates a failed swap as described in [`compact`].
///
/// # Examples
///
/// ```
/// use stabuniq::uniquify;
///
/// let mut data = vec![0, 4, 2, 4, 2, 9, 9];
/// let Ok(boundary) = uniquify(&mut data, 1..5, |a, b| a.cmp(b), |a, b| a == b);
///
/// assert_eq!(boundary, 3);
/// assert_eq!(&data[1..boundary], &[4, 2]);
/// assert_eq!(data[0], 0);
/// assert_eq!(&data[5..], &[9, 9]);
/// ```
pub fn uniquify<S, C, E>(
    seq: &mut S,
    range: Range<usize>,
    compare: C,
    equal: E,
) -> Result<usize, S::Error>
where
    S: SwapSequence + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
    E: FnMut(&S::Item, &S::Item) -> bool,
{
    let positions = stable_unique_positions_by(&*seq, range.clone(), compare, equal);
    compact(seq, range, &positions)
}

/// Like [`uniquify`], with the sort stability taken from `options`.
///
/// # Errors
///
/// Propagates a failed swap as described in [`compact`].
pub fn uniquify_with<S, C, E>(
    seq: &mut S,
    range: Range<usize>,
    options: &Options,
    compare: C,
    equal: E,
) -> Result<usize, S::Error>
where
    S: SwapSequence + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
    E: FnMut(&S::Item, &S::Item) -> bool,
{
    let positions = unique_positions_with(&*seq, range.clone(), options.stability, compare, equal);
    compact(seq, range, &positions)
}

/// Removes every item of `seq` that equals an earlier one, keeping the order of
/// the rest.
///
/// Returns the new length.
///
/// # Errors
///
/// Propagates a failed swap as described in [`compact`]. The sequence is not
/// truncated in that case.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use stabuniq::dedup_stable;
///
/// let mut queue = VecDeque::from(vec!["b", "a", "b", "c", "a"]);
/// let Ok(len) = dedup_stable(&mut queue);
///
/// assert_eq!(len, 3);
/// assert_eq!(queue, ["b", "a", "c"]);
/// ```
pub fn dedup_stable<S>(seq: &mut S) -> Result<usize, S::Error>
where
    S: TruncateSequence + ?Sized,
    S::Item: Ord,
{
    dedup_stable_by(seq, |a, b| a.cmp(b), |a, b| a == b)
}

/// Like [`dedup_stable`], with caller-supplied ordering and equality relations.
///
/// The first item of every class of `equal` items is kept.
pub fn dedup_stable_by<S, C, E>(seq: &mut S, compare: C, equal: E) -> Result<usize, S::Error>
where
    S: TruncateSequence + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
    E: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.len();
    let boundary = uniquify(seq, 0..len, compare, equal)?;
    seq.truncate_to(boundary);

    debug!("deduplicated {} items down to {}", len, boundary);
    Ok(boundary)
}

/// Like [`dedup_stable`], comparing items by a derived key.
///
/// ```
/// use stabuniq::dedup_stable_by_key;
///
/// let mut pairs = vec![(1, "x"), (2, "y"), (1, "z")];
/// let Ok(_) = dedup_stable_by_key(&mut pairs, |pair| pair.0);
///
/// assert_eq!(pairs, vec![(1, "x"), (2, "y")]);
/// ```
pub fn dedup_stable_by_key<S, K, F>(seq: &mut S, key: F) -> Result<usize, S::Error>
where
    S: TruncateSequence + ?Sized,
    F: Fn(&S::Item) -> K,
    K: Ord,
{
    dedup_stable_by(seq, |a, b| key(a).cmp(&key(b)), |a, b| key(a) == key(b))
}

/// Like [`dedup_stable_by`], with the sort stability taken from `options`.
///
/// # Errors
///
/// Propagates a failed swap as described in [`compact`]. The sequence is not
/// truncated in that case.
pub fn dedup_with<S, C, E>(
    seq: &mut S,
    options: &Options,
    compare: C,
    equal: E,
) -> Result<usize, S::Error>
where
    S: TruncateSequence + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
    E: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.len();
    let boundary = uniquify_with(seq, 0..len, options, compare, equal)?;
    seq.truncate_to(boundary);

    debug!(
        "deduplicated {} items down to {} ({:?})",
        len, boundary, options.stability
    );
    Ok(boundary)
}

/// Removes duplicates from a vector in place, keeping first occurrences in order.
///
/// This is a convenience wrapper for [`dedup_stable`] on `Vec`, whose swaps cannot
/// fail.
///
/// # Examples
///
/// ```
/// use stabuniq::uniquify_mut;
///
/// let mut data = vec!["banana", "apple", "banana", "cherry", "apple"];
/// uniquify_mut(&mut data);
///
/// assert_eq!(data, vec!["banana", "apple", "cherry"]);
/// ```
pub fn uniquify_mut<T: Ord>(data: &mut Vec<T>) {
    let Ok(_) = dedup_stable(data);
}

fn clamp_range(range: Range<usize>, len: usize) -> Range<usize> {
    let end = range.end.min(len);
    let start = range.start.min(end);
    start..end
}
