// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for Citadel crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod partitions;

pub use partitions::{for_each_split, index_partitions, strided_chunks};
