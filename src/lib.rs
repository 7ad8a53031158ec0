//! # Hybridsort
//!
//! `hybridsort` provides in-place sorting primitives for fixed-width unsigned integers:
//! a depth-bounded quicksort hybrid and a least-significant-digit radix sort with a
//! compile-time digit width.
//!
//! ## Key Features
//!
//! - **Bounded Partition Sort**: Hoare partitioning around the midpoint element, an
//!   insertion-sort leaf for short ranges, and a heap-sort fallback once 32 partition
//!   levels have been used. No input can force quadratic time, and stack usage is
//!   bounded by the depth limit.
//! - **Radix Sort**: Stable counting-sort passes over `W`-bit digits, ping-ponging
//!   between the caller's slice and a single scratch buffer.
//! - **Compile-time Contracts**: Digit widths that do not divide the key width are
//!   rejected by the compiler; thresholds are validated once, at construction.
//!
//! ## Usage
//!
//! ### Partition Sort
//!
//! ```rust
//! use hybridsort::prelude::*;
//!
//! let mut data = vec![9u64, 8, 7, 6, 5, 4, 3, 2, 1, 0];
//! bounded_partition_sort(&mut data, Threshold::DEFAULT);
//!
//! assert_eq!(data, (0..10).collect::<Vec<u64>>());
//! ```
//!
//! ### Radix Sort
//!
//! ```rust
//! use hybridsort::prelude::*;
//!
//! let mut data = vec![300u64, 1, 65536, 2];
//! radix_sort::<8, _>(&mut data);
//!
//! assert_eq!(data, vec![1, 2, 300, 65536]);
//! ```
//!
//! ### Runtime Thresholds
//!
//! ```rust
//! use hybridsort::prelude::*;
//!
//! let threshold = Threshold::new(32)?;
//! let mut data = vec![5u32, 3, 3, 1, 4];
//! bounded_partition_sort(&mut data, threshold);
//!
//! assert_eq!(data, vec![1, 3, 3, 4, 5]);
//! # Ok::<(), hybridsort::error::ConfigError>(())
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Partition Sort**: `O(n log n)` average and worst case; not stable.
//! - **Radix Sort**: `O(n * BITS / W)` time, `O(n + 2^W)` extra memory; stable.
//! - **Insertion Sort**: `O(n^2)` worst case, `O(n)` on sorted input; stable.
//!
//! The [`suite`] and [`patterns`] modules hold the sorter lineup and input shapes used
//! by the benchmarks.

pub mod algo;
pub mod core;
pub mod error;
pub mod patterns;
pub mod radix;
pub mod suite;

pub use crate::algo::{bounded_partition_sort, heap_sort, insertion_sort};
pub use crate::core::{RadixKey, Threshold};
pub use crate::radix::radix_sort;

pub mod prelude {
    pub use crate::algo::{bounded_partition_sort, heap_sort, insertion_sort};
    pub use crate::core::{DEPTH_LIMIT, RadixKey, Threshold};
    pub use crate::radix::radix_sort;
}
