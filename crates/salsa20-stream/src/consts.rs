// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared constants for the cipher state and stream applicator.

/// Keystream block size in bytes
pub const BLOCK_SIZE: usize = 64;

/// Maximum key size in bytes; longer keys are truncated
pub const KEY_SIZE: usize = 32;

/// Keys of this size or shorter select the short-key constant words
pub const SHORT_KEY_SIZE: usize = 16;

/// Number of 32-bit words in the cipher state
pub(crate) const STATE_WORDS: usize = 16;

/// One double-round is a column round plus a row round; 10 of them give
/// the 20-round cipher.
pub(crate) const NUM_DOUBLE_ROUNDS: usize = 10;

/// Fixed per-build mask applied to the constant tables below. XORing a
/// stored word with the mask yields the usable constant.
pub(crate) const OBFUSCATE_MASK: u32 = 0xABAD_CAFE;

/// Constant words for 32-byte keys, stored pre-XORed with [`OBFUSCATE_MASK`].
pub(crate) const SIGMA: [u32; 4] = [0xCADD_B29B, 0x988D_AE90, 0xD2CF_E7CC, 0xC08D_AF8A];

/// Constant words for 16-byte keys, stored pre-XORed with [`OBFUSCATE_MASK`].
pub(crate) const TAU: [u32; 4] = [0xCADD_B29B, 0x9A8D_AE90, 0xD2CF_E7C8, 0xC08D_AF8A];
