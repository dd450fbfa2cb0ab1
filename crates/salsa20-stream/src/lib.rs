// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # salsa20-stream
//!
//! Salsa20 keystream generator with random-access block addressing.
//!
//! [`Salsa20State`] holds the 16-word cipher state (constants, key material,
//! initial vector and 64-bit block counter) and produces 64-byte keystream
//! blocks. The stream applicator functions drive the state across blocks to
//! transform byte buffers of arbitrary length, either sequentially from the
//! current counter position or seeked to an arbitrary byte offset.
//!
//! Encryption and decryption are the same XOR operation.
//!
//! ## Quick Start
//!
//! ```rust
//! use salsa20_stream::{Salsa20State, xor_keystream, xor_keystream_at};
//!
//! let mut state = Salsa20State::new_with_iv(b"an example key", 0x0123_4567)?;
//! let mut data = *b"attack at dawn";
//!
//! // Encrypt in place, then decrypt from a fresh state at byte offset 0.
//! xor_keystream(&mut state, &mut data);
//! let mut state = Salsa20State::new_with_iv(b"an example key", 0x0123_4567)?;
//! xor_keystream_at(&mut state, &mut data, 0);
//! assert_eq!(&data, b"attack at dawn");
//! # Ok::<(), salsa20_stream::CipherError>(())
//! ```

#[cfg(test)]
mod tests;

mod consts;
mod error;
mod state;
mod stream;

pub use consts::{BLOCK_SIZE, KEY_SIZE, SHORT_KEY_SIZE};
pub use error::CipherError;
pub use state::{KeystreamBlock, Salsa20State};
pub use stream::{apply_keystream, apply_keystream_at, xor_keystream, xor_keystream_at};
