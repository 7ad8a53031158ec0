//! LSD radix sort over fixed-width digits.
//!
//! Each pass is a stable counting sort on one `W`-bit digit, starting from the
//! least significant one. The passes ping-pong between the caller's slice and
//! a single scratch buffer allocated once per call.

use crate::core::{MAX_DIGIT_WIDTH, RadixKey};
use cuneiform::cuneiform;
use std::mem;
use tracing::trace;

/// Number of counters kept on the stack; wider digits spill to the heap.
const INLINE_BUCKETS: usize = 256;

// Cache-aligned histogram for digits up to 8 bits.
#[cuneiform]
struct RadixCounts {
    data: [usize; INLINE_BUCKETS],
}

/// Sorts the slice in ascending order, `W` bits at a time.
///
/// Runs `K::BITS / W` counting-sort passes, least significant digit first.
/// The sort is stable and allocates one scratch buffer the size of the slice.
///
/// `W` must be between 1 and [`MAX_DIGIT_WIDTH`] and divide `K::BITS`;
/// anything else fails to compile. Widths of 32 and 64 bits divide `u64`
/// but are rejected on purpose: the histogram holds `2^W` counters, which
/// is not allocatable at those widths.
///
/// When the pass count is odd (`u8` with `W = 8`, `u16` with `W = 16`) the
/// last pass lands in the scratch buffer and is copied back into `v`. Every
/// admissible width on `u64` gives an even pass count and never copies.
///
/// # Examples
///
/// ```
/// use hybridsort::radix_sort;
///
/// let mut data = vec![300u64, 1, 65536, 2];
/// radix_sort::<8, _>(&mut data);
///
/// assert_eq!(data, vec![1, 2, 300, 65536]);
/// ```
///
/// A width that does not divide the key is rejected at compile time:
///
/// ```compile_fail
/// let mut data = vec![3u64, 1, 2];
/// hybridsort::radix_sort::<3, _>(&mut data);
/// ```
///
/// So is a full-width digit, even though it divides the key:
///
/// ```compile_fail
/// let mut data = vec![3u64, 1, 2];
/// hybridsort::radix_sort::<32, _>(&mut data);
/// ```
pub fn radix_sort<const W: u32, K: RadixKey>(v: &mut [K]) {
    const {
        assert!(
            W >= 1 && W <= MAX_DIGIT_WIDTH && K::BITS % W == 0,
            "digit width must be in 1..=16 and divide the key width"
        );
    }

    let passes = K::BITS / W;
    trace!(digit_width = W, passes, len = v.len(), "radix sort");

    if v.len() < 2 {
        return;
    }

    let radix = 1usize << W;
    let mask = radix - 1;

    let mut inline = RadixCounts {
        data: [0; INLINE_BUCKETS],
    };
    let mut spilled = Vec::new();
    let counts: &mut [usize] = if radix <= INLINE_BUCKETS {
        &mut inline.data[..radix]
    } else {
        spilled.resize(radix, 0);
        &mut spilled
    };

    // Contents are overwritten by the first pass.
    let mut scratch = v.to_vec();
    let mut input: &mut [K] = &mut *v;
    let mut output: &mut [K] = &mut scratch;
    let mut shift = 0;

    loop {
        counts.fill(0);

        // 1. Histogram of the current digit
        input.iter().for_each(|&key| counts[key.digit(shift, mask)] += 1);

        // 2. Running totals: counts[d] becomes one past the last slot of digit d
        let mut sum = 0;
        counts.iter_mut().for_each(|count| {
            sum += *count;
            *count = sum;
        });

        // 3. Scatter back to front so equal digits keep their order
        input.iter().rev().for_each(|&key| {
            let slot = &mut counts[key.digit(shift, mask)];
            *slot -= 1;
            output[*slot] = key;
        });

        if shift == K::BITS - W {
            break;
        }
        shift += W;
        mem::swap(&mut input, &mut output);
    }

    if passes % 2 == 1 {
        trace!(passes, "odd pass count, copying scratch buffer back");
        v.copy_from_slice(&scratch);
    }
}
