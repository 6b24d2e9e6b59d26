// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 compression function per FIPS 180-4 Section 6.2.2.
//!
//! No branch or memory index here depends on the state or message words.

use seq_macro::seq;
use zeroize::Zeroize;

use crate::consts::{BLOCK_LEN, K256};
use crate::schedule;
use crate::word::{bsig0, bsig1, ch, maj};

/// H(i) = H(i-1) + working variables, then wipe the working variables.
#[inline(always)]
pub(crate) fn feed_forward(state: &mut [u32; 8], wv: &mut [u32; 8]) {
    for (word, mixed) in state.iter_mut().zip(wv.iter()) {
        *word = word.wrapping_add(*mixed);
    }

    wv.zeroize();
}

/// 64 rounds over working variables a..h, then H(i) = H(i-1) + a..h.
#[cfg_attr(feature = "unroll", allow(dead_code))]
#[inline(always)]
pub(crate) fn rounds(state: &mut [u32; 8], w: &[u32; 64]) {
    let mut wv = *state;

    for (k, wt) in K256.iter().zip(w.iter()) {
        let [a, b, c, d, e, f, g, h] = wv;

        // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
        let t1 = h
            .wrapping_add(bsig1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(*k)
            .wrapping_add(*wt);
        // T2 = Σ0(a) + Maj(a,b,c)
        let t2 = bsig0(a).wrapping_add(maj(a, b, c));

        // h=g, g=f, f=e, e=d+T1, d=c, c=b, b=a, a=T1+T2
        wv = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
    }

    feed_forward(state, &mut wv);
}

/// One round on a rotating view of `s`.
///
/// Instead of shifting a..h every round, the roles move: round `t` treats
/// `s[(64 - t) % 8]` as `a`, the next slot as `b`, and so on.
#[inline(always)]
fn round(s: &mut [u32; 8], base: usize, kw: u32) {
    let (a, b, c, d) = (base, (base + 1) % 8, (base + 2) % 8, (base + 3) % 8);
    let (e, f, g, h) = ((base + 4) % 8, (base + 5) % 8, (base + 6) % 8, (base + 7) % 8);

    s[h] = s[h]
        .wrapping_add(bsig1(s[e]))
        .wrapping_add(ch(s[e], s[f], s[g]))
        .wrapping_add(kw);
    s[d] = s[d].wrapping_add(s[h]);
    s[h] = s[h].wrapping_add(bsig0(s[a])).wrapping_add(maj(s[a], s[b], s[c]));
}

/// Same as [`rounds`], fully unrolled. After 64 rounds the roles are back
/// at their starting slots, so the feed-forward is index-aligned.
#[cfg_attr(not(feature = "unroll"), allow(dead_code))]
#[inline(always)]
pub(crate) fn rounds_unrolled(state: &mut [u32; 8], w: &[u32; 64]) {
    let mut s = *state;

    seq!(T in 0..64 {
        round(&mut s, (64 - T) % 8, K256[T].wrapping_add(w[T]));
    });

    feed_forward(state, &mut s);
}

/// Compresses one block into `state` using `w` as schedule scratch space.
///
/// `block` must be exactly [`BLOCK_LEN`] bytes.
#[inline]
pub(crate) fn transform(state: &mut [u32; 8], block: &[u8], w: &mut [u32; 64]) {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    #[cfg(not(feature = "unroll"))]
    {
        schedule::expand(block, w);
        rounds(state, w);
    }

    #[cfg(feature = "unroll")]
    {
        schedule::expand_unrolled(block, w);
        rounds_unrolled(state, w);
    }
}

/// SHA-256 compression function (single block)
///
/// Updates hash state `state` with a single 512-bit message block. No padding
/// or length encoding is applied; chaining is the caller's responsibility.
///
/// # Arguments
/// * `state` - Hash state (8 × u32, input/output)
/// * `block` - Message block (64 bytes)
///
/// # Example
///
/// ```
/// use citadel_sha256::{H0, compress_block};
///
/// let mut state = H0;
/// let mut block = [0u8; 64];
/// block[0] = 0x80;
///
/// // The padded empty message is a single block.
/// compress_block(&mut state, &block);
/// assert_eq!(state[0], 0xe3b0c442);
/// ```
pub fn compress_block(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
    let mut w = [0u32; 64];
    transform(state, block, &mut w);
    w.zeroize();
}
