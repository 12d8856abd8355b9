//! Position sorts that tolerate inconsistent comparators.
//!
//! The standard library sorts panic when they detect that the comparison function
//! is not a total order. The position builders run caller-supplied relations, and a
//! broken relation must only produce a wrong grouping. These sorts never index out
//! of bounds and never check the order they are given: a bad comparator yields a
//! permutation of the input in some unspecified order.
//!
//! - [`merge_sort_by`]: stable, bottom-up merge sort with insertion-sorted runs.
//! - [`heapsort_by`]: unstable, in place.

/// Length of the runs the merge sort builds with insertion sort.
const INSERTION_RUN: usize = 20;

/// Stable sort of `v` by `is_less`. Allocates one buffer of `v.len()` positions.
pub(crate) fn merge_sort_by<F>(v: &mut [usize], is_less: &mut F)
where
    F: FnMut(usize, usize) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for run in v.chunks_mut(INSERTION_RUN) {
        insertion_sort(run, is_less);
    }
    if len <= INSERTION_RUN {
        return;
    }

    let mut from = v.to_vec();
    let mut into = vec![0usize; len];
    let mut width = INSERTION_RUN;

    while width < len {
        for start in (0..len).step_by(2 * width) {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge_forward(&from[start..mid], &from[mid..end], &mut into[start..end], is_less);
        }
        std::mem::swap(&mut from, &mut into);
        width *= 2;
    }

    v.copy_from_slice(&from);
}

/// Stable insertion sort; the inner walk is bounded by the run start.
fn insertion_sort<F>(v: &mut [usize], is_less: &mut F)
where
    F: FnMut(usize, usize) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(v[j], v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Merges `left` and `right` into `dst`, taking from `left` on ties.
///
/// `dst.len()` must equal `left.len() + right.len()`. Every slot of `dst` is written
/// exactly once, whatever `is_less` answers.
fn merge_forward<F>(left: &[usize], right: &[usize], dst: &mut [usize], is_less: &mut F)
where
    F: FnMut(usize, usize) -> bool,
{
    debug_assert_eq!(dst.len(), left.len() + right.len());

    let mut left_idx = 0;
    let mut right_idx = 0;

    for slot in dst.iter_mut() {
        let take_right = right_idx < right.len()
            && (left_idx == left.len() || is_less(right[right_idx], left[left_idx]));
        if take_right {
            *slot = right[right_idx];
            right_idx += 1;
        } else {
            *slot = left[left_idx];
            left_idx += 1;
        }
    }
}

/// Unstable in-place sort of `v` by `is_less`.
pub(crate) fn heapsort_by<F>(v: &mut [usize], is_less: &mut F)
where
    F: FnMut(usize, usize) -> bool,
{
    let len = v.len();

    for node in (0..len / 2).rev() {
        sift_down(v, node, len, is_less);
    }
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(v, 0, end, is_less);
    }
}

// This binary heap respects the invariant `parent >= child` within `v[..end]`.
fn sift_down<F>(v: &mut [usize], mut node: usize, end: usize, is_less: &mut F)
where
    F: FnMut(usize, usize) -> bool,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && is_less(v[child], v[child + 1]) {
            child += 1;
        }
        if !is_less(v[node], v[child]) {
            break;
        }
        v.swap(node, child);
        node = child;
    }
}
