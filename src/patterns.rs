//! Input sequences for exercising and benchmarking the sorts.

use rand::Rng;
use std::fmt;

/// Shape of a generated input sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Uniformly random `u64` values.
    Uniform,
    /// Random zeros and ones.
    Binary,
    /// `0, 1, ..., n - 1`.
    Sorted,
    /// `n - 1, ..., 1, 0`.
    Reversed,
    /// Ascending up to the middle, then descending back down.
    OrganPipe,
}

impl Pattern {
    /// Every pattern, in benchmark report order.
    pub const ALL: [Pattern; 5] = [
        Pattern::Uniform,
        Pattern::Binary,
        Pattern::Sorted,
        Pattern::Reversed,
        Pattern::OrganPipe,
    ];

    /// Generates `len` values of this shape.
    ///
    /// Only [`Pattern::Uniform`] and [`Pattern::Binary`] draw from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hybridsort::patterns::Pattern;
    ///
    /// let mut rng = rand::rng();
    /// assert_eq!(Pattern::OrganPipe.generate(6, &mut rng), vec![0, 1, 2, 3, 2, 1]);
    /// assert_eq!(Pattern::Reversed.generate(3, &mut rng), vec![2, 1, 0]);
    /// ```
    pub fn generate<R: Rng>(self, len: usize, rng: &mut R) -> Vec<u64> {
        let n = len as u64;
        match self {
            Pattern::Uniform => (0..len).map(|_| rng.random()).collect(),
            Pattern::Binary => (0..len).map(|_| u64::from(rng.random_bool(0.5))).collect(),
            Pattern::Sorted => (0..n).collect(),
            Pattern::Reversed => (0..n).rev().collect(),
            Pattern::OrganPipe => {
                let half = n / 2;
                (0..half).chain((0..n - half).map(|i| half - i)).collect()
            }
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pattern::Uniform => "Random uniform u64 distribution",
            Pattern::Binary => "Random [0, 1]",
            Pattern::Sorted => "Already sorted",
            Pattern::Reversed => "Reversed",
            Pattern::OrganPipe => "Organ pipe",
        };
        f.write_str(name)
    }
}

/// Builds a sequence that defeats the midpoint pivot for `steps` levels.
///
/// At each of the first `steps` partition levels the element at the midpoint
/// is the maximum of the range, so every partition only splits off that one
/// element. With `steps >= DEPTH_LIMIT` this drives
/// [`bounded_partition_sort`](crate::bounded_partition_sort) into its heap
/// fallback. Values are a permutation of `0..len`.
pub fn midpoint_killer(len: usize, steps: usize) -> Vec<u64> {
    let steps = steps.min(len);

    // slots[pos] is the original index currently sitting at `pos`.
    let mut slots: Vec<usize> = (0..len).collect();
    let mut values = vec![0u64; len];

    for k in 0..steps {
        let end = len - k;
        let mid = (end - 1) / 2;
        values[slots[mid]] = (end - 1) as u64;
        // The partition swaps the pivot with the last element of the range.
        slots.swap(mid, end - 1);
    }

    slots[..len - steps]
        .iter()
        .enumerate()
        .for_each(|(rank, &index)| values[index] = rank as u64);

    values
}
