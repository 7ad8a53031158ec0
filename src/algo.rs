//! Comparison sorts: Insertion Sort, Depth-Bounded Partition Sort and Heap Sort.
//!
//! The partition sort is an introsort-style hybrid:
//! - **Partitioning**: Hoare partition around the element at the midpoint of the range.
//! - **Insertion Sort**: Finishes ranges no longer than the configured [`Threshold`].
//! - **Heap Sort**: Takes over once [`DEPTH_LIMIT`] partition levels have been used,
//!   so no input can push the sort into quadratic time.
//!
//! The main entry point is [`bounded_partition_sort`].

use crate::core::{DEPTH_LIMIT, Threshold};
use std::mem;
use tracing::debug;

/// Sorts a slice in place by moving each element left past its greater neighbours.
///
/// Stable, `O(n^2)` worst case and `O(n)` on sorted or nearly sorted input.
///
/// # Examples
///
/// ```
/// use hybridsort::insertion_sort;
///
/// let mut data = [4u64, 2, 9, 1];
/// insertion_sort(&mut data);
///
/// assert_eq!(data, [1, 2, 4, 9]);
/// ```
pub fn insertion_sort<T: Ord>(v: &mut [T]) {
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && v[j - 1] > v[j] {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Sorts a slice in place with a depth-bounded quicksort.
///
/// Ranges longer than `threshold` are partitioned around their midpoint
/// element. Ranges at or below it are finished with [`insertion_sort`],
/// unless the threshold is 1, in which case partitioning alone is enough.
/// After [`DEPTH_LIMIT`] partition levels the remaining range is handed to
/// [`heap_sort`], which bounds the worst case to `O(n log n)`.
///
/// This sort is not stable. Stack usage is bounded by the depth limit.
///
/// # Arguments
///
/// * `v` - The slice to be sorted.
/// * `threshold` - Crossover length for the insertion-sort leaf.
///
/// # Examples
///
/// ```
/// use hybridsort::{bounded_partition_sort, core::Threshold};
///
/// let mut data = vec![5u64, 3, 3, 1, 4];
/// bounded_partition_sort(&mut data, Threshold::ONE);
///
/// assert_eq!(data, vec![1, 3, 3, 4, 5]);
/// ```
pub fn bounded_partition_sort<T: Ord + Copy>(v: &mut [T], threshold: Threshold) {
    partition_sort_at(v, 0, threshold);
}

/// Sorts `v`, which sits `depth` partition levels below the top-level call.
///
/// Returns how many times the heap fallback was engaged.
fn partition_sort_at<T: Ord + Copy>(
    mut v: &mut [T],
    mut depth: usize,
    threshold: Threshold,
) -> usize {
    let mut fallbacks = 0;

    while depth < DEPTH_LIMIT && v.len() > threshold.get() {
        let split = hoare_partition(v);
        depth += 1;

        // Recurse on the right part, keep looping on the left one.
        let (left, right) = mem::take(&mut v).split_at_mut(split);
        fallbacks += partition_sort_at(right, depth, threshold);
        v = left;
    }

    if depth >= DEPTH_LIMIT {
        debug!(
            depth,
            len = v.len(),
            "partition depth limit reached, falling back to heap sort"
        );
        heap_sort(v);
        return fallbacks + 1;
    }

    if threshold.get() > 1 {
        insertion_sort(v);
    }
    fallbacks
}

/// Partitions `v` around the value at index `(len - 1) / 2`.
///
/// Returns the split point `s` such that every element of `v[..s]` is `<=`
/// the pivot and every element of `v[s..]` is `>=` it. Requires `len >= 2`;
/// both sides are then non-empty.
fn hoare_partition<T: Ord + Copy>(v: &mut [T]) -> usize {
    let pivot = v[(v.len() - 1) / 2];
    let mut i = 0;
    let mut j = v.len() - 1;

    loop {
        while v[i] < pivot {
            i += 1;
        }
        while v[j] > pivot {
            j -= 1;
        }
        if i >= j {
            return j + 1;
        }
        v.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Sorts a slice in place with heap sort.
///
/// Guaranteed `O(n log n)` regardless of input order. Used by
/// [`bounded_partition_sort`] once it runs out of partition depth.
///
/// # Examples
///
/// ```
/// use hybridsort::heap_sort;
///
/// let mut data = [3u32, 1, 2];
/// heap_sort(&mut data);
///
/// assert_eq!(data, [1, 2, 3]);
/// ```
pub fn heap_sort<T: Ord>(v: &mut [T]) {
    let len = v.len();

    // Build the max-heap bottom up.
    (0..len / 2).rev().for_each(|node| sift_down(v, node));

    // Move the current maximum behind the shrinking heap.
    (1..len).rev().for_each(|end| {
        v.swap(0, end);
        sift_down(&mut v[..end], 0);
    });
}

// Restores `parent >= child` below `node`.
fn sift_down<T: Ord>(v: &mut [T], mut node: usize) {
    loop {
        let mut child = 2 * node + 1;
        if child >= v.len() {
            break;
        }
        if child + 1 < v.len() && v[child] < v[child + 1] {
            child += 1;
        }
        if v[node] >= v[child] {
            break;
        }
        v.swap(node, child);
        node = child;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{Pattern, midpoint_killer};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn midpoint_killer_engages_heap_fallback() {
        for threshold in [1, 16, 32, 64] {
            let threshold = Threshold::new_const(threshold);
            let mut data = midpoint_killer(2_000, 64);
            let mut expected = data.clone();
            expected.sort();

            let fallbacks = partition_sort_at(&mut data, 0, threshold);

            assert!(fallbacks > 0, "heap fallback not engaged at {threshold:?}");
            assert_eq!(data, expected);
        }
    }

    #[test]
    fn organ_pipe_engages_heap_fallback() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [1 << 8, 1 << 12, 1 << 15] {
            let mut data = Pattern::OrganPipe.generate(len, &mut rng);
            let mut expected = data.clone();
            expected.sort();

            assert!(partition_sort_at(&mut data, 0, Threshold::DEFAULT) > 0);
            assert_eq!(data, expected);
        }
    }

    #[test]
    fn shallow_killer_stays_below_the_limit() {
        let mut data = midpoint_killer(2_000, DEPTH_LIMIT / 2);
        let mut expected = data.clone();
        expected.sort();

        let fallbacks = partition_sort_at(&mut data, 0, Threshold::DEFAULT);

        assert_eq!(fallbacks, 0);
        assert_eq!(data, expected);
    }

    #[test]
    fn balanced_inputs_never_fall_back() {
        let mut rng = StdRng::seed_from_u64(7);
        for pattern in [Pattern::Binary, Pattern::Sorted, Pattern::Reversed] {
            let mut data = pattern.generate(1 << 15, &mut rng);
            assert_eq!(partition_sort_at(&mut data, 0, Threshold::ONE), 0, "{pattern}");
            assert!(data.is_sorted());
        }
    }

    #[test]
    fn starting_at_the_limit_goes_straight_to_heap_sort() {
        let mut data = vec![9u64, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        assert_eq!(partition_sort_at(&mut data, DEPTH_LIMIT, Threshold::DEFAULT), 1);
        assert_eq!(data, (0..10).collect::<Vec<u64>>());
    }

    #[test]
    fn partition_splits_into_non_empty_sides() {
        let mut data = vec![5u64, 3, 3, 1, 4];
        let split = hoare_partition(&mut data);

        assert!((1..data.len()).contains(&split));
        let (left, right) = data.split_at(split);
        let max_left = left.iter().max().copied().unwrap_or_default();
        let min_right = right.iter().min().copied().unwrap_or_default();
        assert!(max_left <= min_right);
    }
}
