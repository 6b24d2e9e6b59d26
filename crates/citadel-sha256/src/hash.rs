// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! One-shot SHA-256 and SHA-256d.

use zeroize::Zeroize;

use crate::consts::DIGEST_LEN;
use crate::context::Sha256;
use crate::digest::Digest;

/// SHA-256 hash function (arbitrary-length message)
///
/// # Arguments
/// * `data` - Input message (arbitrary length)
/// * `out` - Output digest (32 bytes)
pub fn sha256_into(data: &[u8], out: &mut [u8; DIGEST_LEN]) {
    let mut ctx = Sha256::new();
    ctx.update(data);
    ctx.finalize_into(out);
}

/// SHA-256 of `data`.
///
/// # Example
///
/// ```
/// use citadel_sha256::sha256;
///
/// assert_eq!(
///     sha256(b"").to_string(),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
pub fn sha256(data: &[u8]) -> Digest {
    let mut out = [0u8; DIGEST_LEN];
    sha256_into(data, &mut out);
    Digest::from(out)
}

/// SHA-256d: SHA-256 applied to the 32-byte SHA-256 of `data`.
///
/// The second pass always hashes exactly [`DIGEST_LEN`] bytes, whatever the
/// length of `data`.
///
/// # Arguments
/// * `data` - Input message (arbitrary length)
/// * `out` - Output digest (32 bytes)
pub fn sha256d_into(data: &[u8], out: &mut [u8; DIGEST_LEN]) {
    let mut ctx = Sha256::new();
    ctx.update(data);
    ctx.finalize_into(out);

    let mut first = *out;
    ctx.update(&first);
    ctx.finalize_into(out);

    first.zeroize();
}

/// SHA-256d of `data`, i.e. `sha256(sha256(data))`.
///
/// # Example
///
/// ```
/// use citadel_sha256::{sha256, sha256d};
///
/// let inner = sha256(b"block header");
/// assert_eq!(sha256d(b"block header"), sha256(inner.as_bytes()));
/// ```
pub fn sha256d(data: &[u8]) -> Digest {
    let mut out = [0u8; DIGEST_LEN];
    sha256d_into(data, &mut out);
    Digest::from(out)
}
