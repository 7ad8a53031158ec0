//! The lineup of sorts compared by the benchmarks.
//!
//! Covers every radix width and partition threshold worth measuring, plus the
//! standard library sorts as baselines.

use crate::algo::bounded_partition_sort;
use crate::core::Threshold;
use crate::radix::radix_sort;
use std::collections::BinaryHeap;
use std::fmt;

/// Digit widths the lineup instantiates [`radix_sort`] with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DigitWidth {
    Bits1 = 1,
    Bits2 = 2,
    Bits4 = 4,
    Bits8 = 8,
    Bits16 = 16,
}

impl DigitWidth {
    /// Width of one digit in bits.
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Number of distinct digit values, `2^bits`.
    pub const fn radix(self) -> u64 {
        1 << self.bits()
    }
}

/// A named way of sorting a `u64` slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sorter {
    /// [`radix_sort`] with the given digit width.
    Radix(DigitWidth),
    /// [`bounded_partition_sort`] with the given threshold.
    Partition(Threshold),
    /// `slice::sort_unstable`.
    StdUnstable,
    /// `slice::sort`.
    StdStable,
    /// Heap sort through `BinaryHeap::into_sorted_vec`.
    StdHeap,
}

impl Sorter {
    /// Every sorter, in benchmark report order.
    pub const ALL: [Sorter; 12] = [
        Sorter::Radix(DigitWidth::Bits1),
        Sorter::Radix(DigitWidth::Bits2),
        Sorter::Radix(DigitWidth::Bits4),
        Sorter::Radix(DigitWidth::Bits8),
        Sorter::Radix(DigitWidth::Bits16),
        Sorter::Partition(Threshold::ONE),
        Sorter::Partition(Threshold::new_const(16)),
        Sorter::Partition(Threshold::new_const(32)),
        Sorter::Partition(Threshold::new_const(64)),
        Sorter::StdUnstable,
        Sorter::StdStable,
        Sorter::StdHeap,
    ];

    /// Sorts `v` in place.
    pub fn sort(self, v: &mut [u64]) {
        match self {
            Sorter::Radix(DigitWidth::Bits1) => radix_sort::<1, _>(v),
            Sorter::Radix(DigitWidth::Bits2) => radix_sort::<2, _>(v),
            Sorter::Radix(DigitWidth::Bits4) => radix_sort::<4, _>(v),
            Sorter::Radix(DigitWidth::Bits8) => radix_sort::<8, _>(v),
            Sorter::Radix(DigitWidth::Bits16) => radix_sort::<16, _>(v),
            Sorter::Partition(threshold) => bounded_partition_sort(v, threshold),
            Sorter::StdUnstable => v.sort_unstable(),
            Sorter::StdStable => v.sort(),
            Sorter::StdHeap => {
                let heap = BinaryHeap::from(v.to_vec());
                v.copy_from_slice(&heap.into_sorted_vec());
            }
        }
    }
}

impl fmt::Display for Sorter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sorter::Radix(width) => write!(f, "radix_sort (radix {})", width.radix()),
            Sorter::Partition(threshold) => {
                write!(f, "bounded_partition_sort (threshold {})", threshold.get())
            }
            Sorter::StdUnstable => f.write_str("slice::sort_unstable"),
            Sorter::StdStable => f.write_str("slice::sort"),
            Sorter::StdHeap => f.write_str("BinaryHeap::into_sorted_vec"),
        }
    }
}
