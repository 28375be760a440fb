//! In-place sorting routines (Bubble, Shell, Merge and Quick sort).
//!
//! Every routine sorts a `&mut [i32]` in non-decreasing order. They are the
//! building blocks behind [`Algorithm::sort`](crate::Algorithm::sort), which
//! takes care of copying the caller's data first.

use crate::core::BUBBLE_SORT_LIMIT;
use tracing::warn;

/// Sorts `v` with adjacent compare-and-swap passes.
///
/// Returns `false` without touching `v` when `v.len() >= BUBBLE_SORT_LIMIT`;
/// the quadratic pass count makes such inputs impractical.
///
/// # Examples
///
/// ```
/// use sortbench::algo::bubble_sort;
///
/// let mut data = [3, 1, 2];
/// assert!(bubble_sort(&mut data));
/// assert_eq!(data, [1, 2, 3]);
/// ```
pub fn bubble_sort(v: &mut [i32]) -> bool {
    let len = v.len();
    if len >= BUBBLE_SORT_LIMIT {
        warn!(
            len,
            limit = BUBBLE_SORT_LIMIT,
            "array too large for bubble sort, returning it unsorted"
        );
        return false;
    }

    // Each outer pass parks the largest remaining element at `len - i - 1`.
    for i in 0..len.saturating_sub(1) {
        for j in 0..len - i - 1 {
            if v[j] > v[j + 1] {
                v.swap(j, j + 1);
            }
        }
    }
    true
}

/// Diminishing-increment insertion sort with gaps `len / 2, len / 4, .., 1`.
pub fn shell_sort(v: &mut [i32]) {
    let len = v.len();
    let mut gap = len / 2;

    while gap > 0 {
        for i in gap..len {
            let tmp = v[i];
            let mut j = i;
            while j >= gap && v[j - gap] > tmp {
                v[j] = v[j - gap];
                j -= gap;
            }
            v[j] = tmp;
        }
        gap /= 2;
    }
}

/// Stable top-down merge sort.
pub fn merge_sort(v: &mut [i32]) {
    merge_sort_by(v, &mut |a: &i32, b: &i32| a < b);
}

/// Merge sort driven by a strict "less than" predicate.
///
/// Equal elements keep their input order.
pub(crate) fn merge_sort_by<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    merge_sort_by(&mut v[..mid], is_less);
    merge_sort_by(&mut v[mid..], is_less);
    merge(v, mid, is_less);
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` back into `v`.
fn merge<T, F>(v: &mut [T], mid: usize, is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let left = v[..mid].to_vec();
    let right = v[mid..].to_vec();

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        // Ties go to the left run.
        if is_less(&right[j], &left[i]) {
            v[k] = right[j];
            j += 1;
        } else {
            v[k] = left[i];
            i += 1;
        }
        k += 1;
    }

    let rest_left = &left[i..];
    v[k..k + rest_left.len()].copy_from_slice(rest_left);
    k += rest_left.len();

    let rest_right = &right[j..];
    v[k..k + rest_right.len()].copy_from_slice(rest_right);
}

/// Quicksort with a Lomuto partition around the last element.
///
/// Not stable. Already-sorted input takes quadratic time. Recursion only
/// descends into the smaller partition, so stack depth stays logarithmic.
pub fn quick_sort(mut v: &mut [i32]) {
    while v.len() > 1 {
        let pivot = partition(v);
        let (left, right) = std::mem::take(&mut v).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort(left);
            v = right;
        } else {
            quick_sort(right);
            v = left;
        }
    }
}

/// Partitions `v` around `v[len - 1]` and returns the pivot's final index.
///
/// Elements strictly less than the pivot end up left of it.
fn partition(v: &mut [i32]) -> usize {
    let high = v.len() - 1;
    let pivot = v[high];

    let mut boundary = 0;
    for j in 0..high {
        if v[j] < pivot {
            v.swap(boundary, j);
            boundary += 1;
        }
    }
    v.swap(boundary, high);
    boundary
}
