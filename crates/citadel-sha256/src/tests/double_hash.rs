// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// SHA-256d
//
// The second pass always hashes the 32-byte first digest. For 32-byte inputs
// this coincides with re-hashing "input length" bytes of the first digest;
// for every other length the second pass is still fixed at 32 bytes.

use super::vectors::{message, reference};
use crate::{DIGEST_LEN, Sha256, sha256, sha256d, sha256d_into};

#[test]
fn test_sha256d_empty() {
    assert_eq!(
        sha256d(b"").to_string(),
        "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
    );
}

#[test]
fn test_sha256d_hello() {
    assert_eq!(
        sha256d(b"hello").to_string(),
        "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
    );
}

#[test]
fn test_sha256d_is_hash_of_hash_for_all_lengths() {
    for len in 0..=200 {
        let msg = message(len);
        let inner = sha256(&msg);

        assert_eq!(sha256d(&msg), sha256(inner.as_bytes()), "length {}", len);
    }
}

#[test]
fn test_sha256d_32_byte_input() {
    // Input length equals digest length: both readings of the second pass agree
    let msg: Vec<u8> = (0..32).collect();
    let first = sha256(&msg);

    let mut ctx = Sha256::new();
    ctx.update(&first.as_bytes()[..msg.len()]);

    assert_eq!(sha256d(&msg), ctx.finalize());
    assert_eq!(
        sha256d(&msg).to_string(),
        "2f287b4d3d4910f6cada9e1bd1b4648099e8c52c81aa4a6aebfa6fc86f19834e"
    );
}

#[test]
fn test_sha256d_second_pass_ignores_input_length() {
    // A longer input must not stretch the second pass past the digest
    let msg = message(80);
    let first = sha256(&msg);

    let mut padded_second = [0u8; 80];
    padded_second[..DIGEST_LEN].copy_from_slice(first.as_bytes());

    assert_eq!(sha256d(&msg), sha256(first.as_bytes()));
    assert_ne!(sha256d(&msg), sha256(&padded_second));
}

#[test]
fn test_sha256d_matches_reference() {
    for len in [0, 1, 31, 32, 33, 55, 56, 64, 80, 200] {
        let msg = message(len);
        let expected = reference(&reference(&msg));

        let mut out = [0u8; DIGEST_LEN];
        sha256d_into(&msg, &mut out);

        assert_eq!(out, expected, "length {}", len);
    }
}
