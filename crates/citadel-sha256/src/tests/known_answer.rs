// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::vectors::{BOUNDARY_VECTORS, MILLION_A, SHORT_VECTORS, expected};
use crate::{DIGEST_LEN, Sha256, sha256, sha256_into};

#[test]
fn test_sha256_short_vectors() {
    for (msg, hex) in SHORT_VECTORS {
        let digest = sha256(msg);

        println!("SHA-256({} bytes):", msg.len());
        println!("  Result:   {}", digest);
        println!("  Expected: {}", hex);

        assert_eq!(digest, expected(hex), "SHA-256 mismatch for {:?}", msg);
    }
}

#[test]
fn test_sha256_empty() {
    assert_eq!(
        sha256(b"").to_string(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_sha256_abc() {
    assert_eq!(
        sha256(b"abc").to_string(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_sha256_boundary_vectors() {
    for (len, hex) in BOUNDARY_VECTORS {
        let msg = vec![b'a'; *len];
        assert_eq!(sha256(&msg), expected(hex), "SHA-256 mismatch for {} x 'a'", len);
    }
}

#[test]
fn test_sha256_million_a() {
    // RFC 6234 TEST3, fed in 1000-byte pieces
    let chunk = [b'a'; 1000];
    let mut ctx = Sha256::new();
    for _ in 0..1000 {
        ctx.update(&chunk);
    }

    assert_eq!(ctx.bit_count(), 8_000_000);
    assert_eq!(ctx.finalize(), expected(MILLION_A));
}

#[test]
fn test_sha256_into_matches_sha256() {
    for (msg, _) in SHORT_VECTORS {
        let mut out = [0u8; DIGEST_LEN];
        sha256_into(msg, &mut out);

        assert_eq!(&out, sha256(msg).as_bytes());
    }
}

#[test]
fn test_sha256_deterministic() {
    let msg = b"hash me twice";
    assert_eq!(sha256(msg), sha256(msg));
}
