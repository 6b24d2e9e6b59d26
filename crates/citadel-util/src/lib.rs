// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Big-endian integer codec and byte helpers.
//!
//! Every function here is total: fixed-size arrays carry the length contract,
//! so nothing can fail at runtime. The vector helpers take slices and check
//! their length relation with a debug assertion only.

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Generates `{type}_from_be` and `{type}_to_be` functions for integer types.
macro_rules! impl_be_conversions {
    ($type:ty, $size:expr, $fn_from:ident, $fn_to:ident) => {
        #[doc = concat!("Decodes ", stringify!($size), " big-endian bytes into a `", stringify!($type), "`.")]
        ///
        /// The most significant byte comes first.
        #[inline(always)]
        pub const fn $fn_from(bytes: &[u8; $size]) -> $type {
            let mut dst: $type = 0;
            let mut i = 0;
            while i < $size {
                dst = (dst << 8) | (bytes[i] as $type);
                i += 1;
            }
            dst
        }

        #[doc = concat!("Encodes a `", stringify!($type), "` into ", stringify!($size), " big-endian bytes.")]
        #[inline(always)]
        pub fn $fn_to(src: $type, bytes: &mut [u8; $size]) {
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = (src >> (8 * ($size - 1 - i))) as u8;
            }
        }
    };
}

impl_be_conversions!(u32, 4, u32_from_be, u32_to_be);
impl_be_conversions!(u64, 8, u64_from_be, u64_to_be);

/// Decodes `dst.len()` big-endian words from `src`.
///
/// `src` must hold exactly `4 * dst.len()` bytes.
///
/// # Example
///
/// ```
/// use citadel_util::be32_dec_vect;
///
/// let mut words = [0u32; 2];
/// be32_dec_vect(&mut words, &[0xde, 0xad, 0xbe, 0xef, 0x00, 0x00, 0x00, 0x01]);
/// assert_eq!(words, [0xdeadbeef, 1]);
/// ```
#[inline]
pub fn be32_dec_vect(dst: &mut [u32], src: &[u8]) {
    debug_assert_eq!(src.len(), dst.len() * 4);

    for (word, chunk) in dst.iter_mut().zip(src.chunks_exact(4)) {
        *word = u32_from_be(&[chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

/// Encodes `src` as consecutive big-endian words into `dst`.
///
/// `dst` must hold exactly `4 * src.len()` bytes.
///
/// # Example
///
/// ```
/// use citadel_util::be32_enc_vect;
///
/// let mut out = [0u8; 8];
/// be32_enc_vect(&mut out, &[0xdeadbeef, 1]);
/// assert_eq!(out, [0xde, 0xad, 0xbe, 0xef, 0x00, 0x00, 0x00, 0x01]);
/// ```
#[inline]
pub fn be32_enc_vect(dst: &mut [u8], src: &[u32]) {
    debug_assert_eq!(dst.len(), src.len() * 4);

    let mut tmp = [0u8; 4];
    for (chunk, word) in dst.chunks_exact_mut(4).zip(src.iter()) {
        u32_to_be(*word, &mut tmp);
        chunk.copy_from_slice(&tmp);
    }
}

/// Parses a hexadecimal string into bytes.
///
/// The string must have an even number of characters and contain only
/// valid hexadecimal digits (0-9, a-f, A-F).
///
/// # Panics
///
/// Panics if the string has odd byte length or contains anything other than
/// ASCII hex digits (non-ASCII characters included).
///
/// # Example
///
/// ```
/// use citadel_util::hex_to_bytes;
///
/// let bytes = hex_to_bytes("deadbeef");
/// assert_eq!(bytes, vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
#[cfg(feature = "alloc")]
#[inline]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string has odd length");

    hex.as_bytes()
        .chunks_exact(2)
        .map(|pair| (hex_digit(pair[0]) << 4) | hex_digit(pair[1]))
        .collect()
}

/// Value of one ASCII hex digit.
///
/// # Panics
///
/// Panics on anything outside `0-9`, `a-f`, `A-F`, including non-ASCII bytes.
#[cfg(feature = "alloc")]
#[inline]
fn hex_digit(c: u8) -> u8 {
    match (c as char).to_digit(16) {
        Some(d) => d as u8,
        None => panic!("invalid hex digit"),
    }
}
