use hybridsort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

fn check<const W: u32, K: RadixKey + std::fmt::Debug>(input: &[K]) {
    let mut expected = input.to_vec();
    expected.sort();

    let mut data = input.to_vec();
    radix_sort::<W, _>(&mut data);
    assert_eq!(data, expected, "digit width {W}");
}

#[test]
fn test_every_width_on_u64() {
    let mut rng = StdRng::seed_from_u64(5);
    let input: Vec<u64> = (0..3_000).map(|_| rng.random()).collect();

    check::<1, _>(&input);
    check::<2, _>(&input);
    check::<4, _>(&input);
    check::<8, _>(&input);
    check::<16, _>(&input);
}

#[test]
fn test_narrow_keys() {
    let mut rng = StdRng::seed_from_u64(6);

    let input: Vec<u32> = (0..2_000).map(|_| rng.random()).collect();
    check::<4, _>(&input);
    check::<16, _>(&input);

    let input: Vec<u16> = (0..2_000).map(|_| rng.random()).collect();
    check::<2, _>(&input);
    check::<8, _>(&input);

    let input: Vec<usize> = (0..2_000)
        .map(|_| rng.random_range(0..=usize::MAX))
        .collect();
    check::<8, _>(&input);
}

#[test]
fn test_odd_pass_count_copies_back() {
    // One pass: the result lands in the scratch buffer first.
    let mut rng = StdRng::seed_from_u64(8);

    let input: Vec<u8> = (0..1_000).map(|_| rng.random()).collect();
    check::<8, _>(&input);

    let input: Vec<u16> = (0..1_000).map(|_| rng.random()).collect();
    check::<16, _>(&input);

    let mut data = vec![3u8, 255, 0, 7];
    radix_sort::<8, _>(&mut data);
    assert_eq!(data, vec![0, 3, 7, 255]);
}

#[test]
fn test_empty_and_single() {
    let mut data: Vec<u64> = vec![];
    radix_sort::<4, _>(&mut data);
    assert!(data.is_empty());

    let mut data = vec![u64::MAX];
    radix_sort::<16, _>(&mut data);
    assert_eq!(data, vec![u64::MAX]);
}

#[test]
fn test_high_bits_only() {
    // Keys differing only in the most significant digit.
    let mut data: Vec<u64> = (0..16u64).rev().map(|i| i << 60).collect();
    radix_sort::<4, _>(&mut data);
    assert_eq!(data, (0..16u64).map(|i| i << 60).collect::<Vec<_>>());
}

/// A record sorted by `key` alone, carrying its original position.
#[derive(Clone, Copy, Debug)]
struct Record {
    key: u32,
    position: u32,
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Record {}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

// Implemented outside the crate to show the trait is usable by callers.
impl RadixKey for Record {
    const BITS: u32 = u32::BITS;

    fn digit(self, shift: u32, mask: usize) -> usize {
        self.key.digit(shift, mask)
    }
}

#[test]
fn test_radix_is_stable() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut data: Vec<Record> = (0..5_000)
        .map(|position| Record {
            key: rng.random_range(0..64) << 20,
            position,
        })
        .collect();

    radix_sort::<4, _>(&mut data);

    assert!(data.windows(2).all(|w| match w[0].key.cmp(&w[1].key) {
        Ordering::Less => true,
        Ordering::Equal => w[0].position < w[1].position,
        Ordering::Greater => false,
    }));
}
