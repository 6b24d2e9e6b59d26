// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming SHA-256 and double SHA-256 (SHA-256d)
//!
//! Implementation per FIPS 180-4. No heap allocation; all scratch space is
//! fixed-size and wiped after use. The compression function has no
//! data-dependent branches or table lookups.
//!
//! Enable the `unroll` feature to compile fully unrolled rounds and message
//! schedule expansion. Output is identical either way.
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod compress;
mod consts;
mod context;
mod digest;
mod error;
mod hash;
mod schedule;
mod word;

pub use compress::compress_block;
pub use consts::{BLOCK_LEN, DIGEST_LEN, H0, K256};
pub use context::Sha256;
pub use digest::Digest;
pub use error::DigestError;
pub use hash::{sha256, sha256_into, sha256d, sha256d_into};
