// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Cipher error types.

/// Errors that can occur while configuring the cipher state.
///
/// Keystream generation itself is total: counter overflow wraps silently and
/// zero-length buffers are no-ops, so the only failure surface is key setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    #[error("empty key: at least one byte of key material is required")]
    EmptyKey,
}
