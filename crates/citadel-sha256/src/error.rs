// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Digest parsing error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestError {
    /// Input has the wrong number of bytes or hex characters
    #[error("invalid digest length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Non-hexadecimal character in a hex digest
    #[error("invalid hex character at position {position}")]
    InvalidHex {
        /// Byte offset of the offending character
        position: usize,
    },
}
