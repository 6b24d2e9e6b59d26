// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming SHA-256 context per FIPS 180-4 Sections 5.1.1 and 6.2

use citadel_util::{be32_enc_vect, u64_to_be};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::compress::transform;
use crate::consts::{BLOCK_LEN, DIGEST_LEN, H0, LEN_FIELD_OFFSET, PAD};
use crate::digest::Digest;

/// SHA-256 streaming state.
///
/// Invariant: `buffer[..buffered_len()]` holds the `bit_count mod 512` bits
/// that have been submitted but not yet compressed. Between calls this is
/// always fewer than [`BLOCK_LEN`] bytes.
///
/// Only the chaining state, bit count and pending bytes are kept between
/// calls; the message schedule is per-block stack scratch.
///
/// All fields are wiped on drop and on [`Sha256::reset`].
///
/// # Example
///
/// ```
/// use citadel_sha256::{Sha256, sha256};
///
/// let mut ctx = Sha256::new();
/// ctx.update(b"ab");
/// ctx.update(b"c");
///
/// assert_eq!(ctx.finalize(), sha256(b"abc"));
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sha256 {
    // Hash state H(i)
    state: [u32; 8],

    // Total bits submitted, mod 2^64
    bit_count: u64,

    // Pending partial block
    buffer: [u8; BLOCK_LEN],
}

impl Sha256 {
    /// Create new SHA-256 state initialized with H(0)
    pub fn new() -> Self {
        Self {
            state: H0,
            bit_count: 0,
            buffer: [0u8; BLOCK_LEN],
        }
    }

    /// Total number of message bits fed so far.
    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }

    /// Number of bytes waiting in the buffer.
    #[inline(always)]
    fn buffered_len(&self) -> usize {
        ((self.bit_count >> 3) & 0x3f) as usize
    }

    /// Compress the buffer into the state.
    ///
    /// The schedule lives on the stack for this block only.
    #[inline(always)]
    fn transform_buffer(&mut self) {
        let mut w = [0u32; 64];
        transform(&mut self.state, &self.buffer, &mut w);
        w.zeroize();
    }

    /// Update state with data.
    ///
    /// Any chunking of the same message yields the same digest.
    pub fn update(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }

        let r = self.buffered_len();
        self.bit_count = self.bit_count.wrapping_add((data.len() as u64) << 3);

        // Not enough for a full block: buffer and wait
        if data.len() < BLOCK_LEN - r {
            self.buffer[r..r + data.len()].copy_from_slice(data);
            return;
        }

        // Finish the pending block
        let (head, rest) = data.split_at(BLOCK_LEN - r);
        self.buffer[r..].copy_from_slice(head);
        self.transform_buffer();

        // Full blocks straight from the input
        let mut w = [0u32; 64];
        let mut blocks = rest.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            transform(&mut self.state, block, &mut w);
        }
        w.zeroize();

        // Keep the tail for the next call
        let tail = blocks.remainder();
        self.buffer[..tail.len()].copy_from_slice(tail);
    }

    /// Append `0x80`, zero fill, and the 64-bit big-endian bit count, then
    /// compress the trailing block(s).
    ///
    /// Returns how many blocks were compressed (1 or 2).
    pub(crate) fn pad(&mut self) -> usize {
        let r = self.buffered_len();
        let mut compressed = 1;

        if r < LEN_FIELD_OFFSET {
            self.buffer[r..LEN_FIELD_OFFSET].copy_from_slice(&PAD[..LEN_FIELD_OFFSET - r]);
        } else {
            // No room for the length field: finish this block first
            self.buffer[r..].copy_from_slice(&PAD[..BLOCK_LEN - r]);
            self.transform_buffer();
            self.buffer[..LEN_FIELD_OFFSET].fill(0);
            compressed += 1;
        }

        let mut len_field = [0u8; 8];
        u64_to_be(self.bit_count, &mut len_field);
        self.buffer[LEN_FIELD_OFFSET..].copy_from_slice(&len_field);

        self.transform_buffer();
        compressed
    }

    /// Finalize into `out` and reset the context to H(0).
    ///
    /// The context is immediately usable for a new message afterwards.
    pub fn finalize_into(&mut self, out: &mut [u8; DIGEST_LEN]) {
        self.pad();
        be32_enc_vect(out, &self.state);
        self.reset();
    }

    /// Finalize and return the digest, consuming the context.
    pub fn finalize(mut self) -> Digest {
        let mut out = [0u8; DIGEST_LEN];
        self.finalize_into(&mut out);
        Digest::from(out)
    }

    /// Raw hash state, for assertions only
    #[cfg(test)]
    pub(crate) fn state(&self) -> &[u32; 8] {
        &self.state
    }

    /// Pending buffer, for assertions only
    #[cfg(test)]
    pub(crate) fn buffer(&self) -> &[u8; BLOCK_LEN] {
        &self.buffer
    }

    /// Pretend whole blocks were already absorbed, for assertions only
    #[cfg(test)]
    pub(crate) fn set_bit_count(&mut self, bits: u64) {
        debug_assert_eq!(bits % 512, 0);
        self.bit_count = bits;
    }

    /// Reset to H(0) for reuse
    pub fn reset(&mut self) {
        self.zeroize();
        self.state = H0;
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}
