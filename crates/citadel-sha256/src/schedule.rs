// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message schedule per FIPS 180-4 Section 6.2.2 step 1.

use citadel_util::be32_dec_vect;
use seq_macro::seq;

use crate::consts::BLOCK_LEN;
use crate::word::{ssig0, ssig1};

/// Expands one 64-byte block into the 64-word schedule `w`.
///
/// W[0..15] are the block's big-endian words; W[16..63] follow
/// W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16] (mod 2^32).
#[cfg_attr(feature = "unroll", allow(dead_code))]
#[inline(always)]
pub(crate) fn expand(block: &[u8], w: &mut [u32; 64]) {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    be32_dec_vect(&mut w[..16], block);

    for t in 16..64 {
        w[t] = ssig1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(ssig0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }
}

/// Same as [`expand`], with the recurrence unrolled at compile time.
#[cfg_attr(not(feature = "unroll"), allow(dead_code))]
#[inline(always)]
pub(crate) fn expand_unrolled(block: &[u8], w: &mut [u32; 64]) {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    be32_dec_vect(&mut w[..16], block);

    seq!(T in 16..64 {
        w[T] = ssig1(w[T - 2])
            .wrapping_add(w[T - 7])
            .wrapping_add(ssig0(w[T - 15]))
            .wrapping_add(w[T - 16]);
    });
}
