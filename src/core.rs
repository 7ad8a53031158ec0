//! Core traits and types for hybridsort.
//!
//! This module defines:
//! - [`RadixKey`]: The trait unsigned key types implement to be radix sorted.
//! - [`Threshold`]: The validated insertion-sort crossover of the partition sort.
//! - [`DEPTH_LIMIT`]: The partition depth at which the heap fallback takes over.

use crate::error::ConfigError;
use std::num::NonZeroUsize;

/// Maximum number of nested partition levels before switching to heap sort.
pub const DEPTH_LIMIT: usize = 32;

/// Widest digit the radix sort accepts, in bits.
///
/// The histogram holds `2^W` counters, so 16 bits (65536 counters) is the
/// widest digit that stays reasonable to allocate per call. Widths of 32 and
/// 64 bits are rejected even though they divide `u64`.
pub const MAX_DIGIT_WIDTH: u32 = 16;

/// A fixed-width unsigned integer that can be split into radix digits.
///
/// Digits are read from the raw bit pattern, so ordering by digits (least
/// significant first, stable passes) matches the numeric order of the type.
///
/// # Examples
///
/// ```
/// use hybridsort::core::RadixKey;
///
/// let key: u64 = 0x12_34;
/// assert_eq!(key.digit(0, 0xff), 0x34);
/// assert_eq!(key.digit(8, 0xff), 0x12);
/// assert_eq!(<u64 as RadixKey>::BITS, 64);
/// ```
pub trait RadixKey: Copy + Ord {
    /// Width of the key in bits.
    const BITS: u32;

    /// Returns the digit found `shift` bits up from the least significant
    /// bit, masked with `mask`.
    fn digit(self, shift: u32, mask: usize) -> usize;
}

macro_rules! impl_radix_key {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline(always)]
                fn digit(self, shift: u32, mask: usize) -> usize {
                    (self >> shift) as usize & mask
                }
            }
        )*
    };
}

impl_radix_key!(u8, u16, u32, u64, usize);

/// Range length at or below which the partition sort stops partitioning.
///
/// Sub-ranges no longer than the threshold are finished with insertion sort.
/// A threshold of 1 skips the insertion pass entirely, since partitioning
/// alone already leaves single-element ranges sorted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Threshold(NonZeroUsize);

impl Threshold {
    /// Partition all the way down; never run insertion sort.
    pub const ONE: Threshold = Threshold::new_const(1);

    /// Crossover used when the caller has no preference.
    pub const DEFAULT: Threshold = Threshold::new_const(16);

    /// Builds a threshold, rejecting zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use hybridsort::core::Threshold;
    /// use hybridsort::error::ConfigError;
    ///
    /// assert_eq!(Threshold::new(32).map(|t| t.get()), Ok(32));
    /// assert_eq!(Threshold::new(0), Err(ConfigError::ZeroThreshold));
    /// ```
    pub fn new(threshold: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(threshold)
            .map(Threshold)
            .ok_or(ConfigError::ZeroThreshold)
    }

    /// Builds a threshold in a const context.
    ///
    /// Evaluating this with 0 in a `const` item is a compile error.
    pub const fn new_const(threshold: usize) -> Self {
        match NonZeroUsize::new(threshold) {
            Some(n) => Threshold(n),
            None => panic!("partition threshold must be at least 1"),
        }
    }

    /// Returns the threshold as a plain length.
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::DEFAULT
    }
}

impl TryFrom<usize> for Threshold {
    type Error = ConfigError;

    fn try_from(threshold: usize) -> Result<Self, Self::Error> {
        Threshold::new(threshold)
    }
}
