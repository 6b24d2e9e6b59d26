// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Partition utilities for exhaustive chunking tests.

/// Recursively extends `sizes` with every composition of `remaining`.
fn compose<F>(sizes: &mut Vec<usize>, remaining: usize, callback: &mut F)
where
    F: FnMut(&[usize]),
{
    if remaining == 0 {
        callback(sizes.as_slice());
        return;
    }

    for take in 1..=remaining {
        sizes.push(take);
        compose(sizes, remaining - take, callback);
        sizes.pop();
    }
}

/// Generates every ordered way to split `len` items into non-empty chunks.
///
/// The callback receives chunk sizes summing to `len`. There are `2^(len-1)`
/// such compositions for `len > 0`; `len == 0` yields one empty composition.
///
/// # Example
/// ```
/// use citadel_test_utils::index_partitions;
///
/// let mut seen = Vec::new();
/// index_partitions(3, |sizes| seen.push(sizes.to_vec()));
/// assert_eq!(
///     seen,
///     vec![vec![1, 1, 1], vec![1, 2], vec![2, 1], vec![3]]
/// );
/// ```
pub fn index_partitions<F>(len: usize, mut callback: F)
where
    F: FnMut(&[usize]),
{
    let mut sizes = Vec::with_capacity(len);
    compose(&mut sizes, len, &mut callback);
}

/// Splits `data` according to `sizes` and hands the chunks to `callback`.
///
/// # Panics
///
/// Panics if `sizes` does not sum to `data.len()`.
///
/// # Example
/// ```
/// use citadel_test_utils::for_each_split;
///
/// let mut chunks = Vec::new();
/// for_each_split(b"abcde", &[2, 0, 3], |chunk| chunks.push(chunk.to_vec()));
/// assert_eq!(chunks, vec![b"ab".to_vec(), Vec::new(), b"cde".to_vec()]);
/// ```
pub fn for_each_split<F>(data: &[u8], sizes: &[usize], mut callback: F)
where
    F: FnMut(&[u8]),
{
    assert_eq!(
        sizes.iter().sum::<usize>(),
        data.len(),
        "chunk sizes must cover the input exactly"
    );

    let mut offset = 0;
    for &size in sizes {
        callback(&data[offset..offset + size]);
        offset += size;
    }
}

/// Builds chunk sizes that cycle through `stride` until `len` is covered.
///
/// The last chunk is truncated to fit. A zero in `stride` produces an empty
/// chunk, which is useful for exercising no-op updates.
///
/// # Panics
///
/// Panics if `stride` is empty or contains only zeros while `len > 0`.
///
/// # Example
/// ```
/// use citadel_test_utils::strided_chunks;
///
/// assert_eq!(strided_chunks(10, &[3, 4]), vec![3, 4, 3]);
/// assert_eq!(strided_chunks(5, &[0, 5]), vec![0, 5]);
/// ```
pub fn strided_chunks(len: usize, stride: &[usize]) -> Vec<usize> {
    assert!(
        len == 0 || stride.iter().any(|&s| s > 0),
        "stride must contain a non-zero size"
    );

    let mut sizes = Vec::new();
    let mut covered = 0;

    for &step in stride.iter().cycle() {
        if covered >= len {
            break;
        }
        let size = step.min(len - covered);
        sizes.push(size);
        covered += size;
    }

    sizes
}
