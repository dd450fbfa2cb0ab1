// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Salsa20 cipher state and mixing function.
//!
//! Key material is zeroized on drop; transient round state is zeroized after
//! each block.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{
    BLOCK_SIZE, KEY_SIZE, NUM_DOUBLE_ROUNDS, OBFUSCATE_MASK, SHORT_KEY_SIZE, SIGMA, STATE_WORDS,
    TAU,
};
use crate::error::CipherError;

/// One 64-byte keystream block, produced fresh for each call.
pub type KeystreamBlock = [u8; BLOCK_SIZE];

/// Salsa20 cipher state.
///
/// 16 unsigned 32-bit words: constant words at 0/5/10/15, key material at
/// 1-4 and 11-14, the initial vector at 6-7 and the 64-bit block counter at
/// 8-9. Words 6-9 together form the nonce.
///
/// The state is a plain value: [`Clone`] deep-copies all 16 words, which is
/// the idiomatic way to fork an independent stream position. There is no
/// internal synchronization; callers sharing one instance across threads
/// must serialize access themselves.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct Salsa20State {
    words: [u32; STATE_WORDS],
}

impl Salsa20State {
    /// Create a keyed state with IV and counter at zero.
    ///
    /// See [`set_key`](Self::set_key) for the accepted key lengths.
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        let mut state = Self::default();
        state.set_key(key)?;
        Ok(state)
    }

    /// Create a keyed state positioned at block 0 of the stream `iv`.
    pub fn new_with_iv(key: &[u8], iv: u64) -> Result<Self, CipherError> {
        let mut state = Self::new(key)?;
        state.set_initial_vector(iv);
        Ok(state)
    }

    /// Set the key and reset the IV and block counter to zero.
    ///
    /// Accepts 1 to 32 bytes. Keys of 16 bytes or fewer are zero-padded and
    /// select the short-key constant words, with the same 16 padded bytes
    /// loaded into both key-word slots; longer keys select the long-key
    /// constants and are split across the two slots. Keys longer than 32
    /// bytes are silently truncated, so ciphertexts produced with an
    /// oversized key stay decryptable.
    ///
    /// An empty key is rejected and the state is left unchanged.
    pub fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.is_empty() {
            return Err(CipherError::EmptyKey);
        }

        let mut padded = [0u8; KEY_SIZE];
        let take = key.len().min(KEY_SIZE);
        padded[..take].copy_from_slice(&key[..take]);

        let (constants, upper) = if take <= SHORT_KEY_SIZE {
            (&TAU, 0)
        } else {
            (&SIGMA, SHORT_KEY_SIZE)
        };

        self.words[0] = constants[0] ^ OBFUSCATE_MASK;
        self.words[5] = constants[1] ^ OBFUSCATE_MASK;
        self.words[10] = constants[2] ^ OBFUSCATE_MASK;
        self.words[15] = constants[3] ^ OBFUSCATE_MASK;

        for (i, chunk) in padded[..SHORT_KEY_SIZE].chunks_exact(4).enumerate() {
            self.words[1 + i] = u32::from_le_bytes(
                chunk
                    .try_into()
                    .expect("infallible: chunk is exactly 4 bytes"),
            );
        }
        for (i, chunk) in padded[upper..upper + SHORT_KEY_SIZE]
            .chunks_exact(4)
            .enumerate()
        {
            self.words[11 + i] = u32::from_le_bytes(
                chunk
                    .try_into()
                    .expect("infallible: chunk is exactly 4 bytes"),
            );
        }

        // Words 6-9 are the nonce: IV then block counter. A fresh key always
        // starts at block 0 of stream 0.
        self.words[6] = 0;
        self.words[7] = 0;
        self.words[8] = 0;
        self.words[9] = 0;

        padded.zeroize();
        Ok(())
    }

    /// Set the 64-bit initial vector and reset the block counter to zero.
    pub fn set_initial_vector(&mut self, iv: u64) {
        self.words[6] = iv as u32;
        self.words[7] = (iv >> 32) as u32;
        self.words[8] = 0;
        self.words[9] = 0;
    }

    /// Current 64-bit block counter.
    pub fn sequence_number(&self) -> u64 {
        (self.words[8] as u64) | ((self.words[9] as u64) << 32)
    }

    /// Seek the block counter without touching the IV.
    pub fn set_sequence_number(&mut self, value: u64) {
        self.words[8] = value as u32;
        self.words[9] = (value >> 32) as u32;
    }

    /// Add 1 to the block counter, carrying from the low word into the high
    /// word and wrapping silently at 64 bits.
    pub fn increment_sequence_number(&mut self) {
        self.set_sequence_number(self.sequence_number().wrapping_add(1));
    }

    /// Compute the keystream block for the current state.
    ///
    /// Pure function of the 16 words: it neither mutates the state nor
    /// advances the counter. Advancing is the caller's explicit, separate
    /// step, so a block can always be recomputed.
    pub fn keystream_block(&self) -> KeystreamBlock {
        let mut x = self.words;

        for _ in 0..NUM_DOUBLE_ROUNDS {
            // column round
            quarter_round(0, 4, 8, 12, &mut x);
            quarter_round(5, 9, 13, 1, &mut x);
            quarter_round(10, 14, 2, 6, &mut x);
            quarter_round(15, 3, 7, 11, &mut x);

            // row round
            quarter_round(0, 1, 2, 3, &mut x);
            quarter_round(5, 6, 7, 4, &mut x);
            quarter_round(10, 11, 8, 9, &mut x);
            quarter_round(15, 12, 13, 14, &mut x);
        }

        let mut block = [0u8; BLOCK_SIZE];
        for (i, chunk) in block.chunks_exact_mut(4).enumerate() {
            let word = x[i].wrapping_add(self.words[i]);
            chunk.copy_from_slice(&word.to_le_bytes());
        }

        x.zeroize();
        block
    }
}

#[inline(always)]
fn quarter_round(a: usize, b: usize, c: usize, d: usize, x: &mut [u32; STATE_WORDS]) {
    x[b] ^= x[a].wrapping_add(x[d]).rotate_left(7);
    x[c] ^= x[b].wrapping_add(x[a]).rotate_left(9);
    x[d] ^= x[c].wrapping_add(x[b]).rotate_left(13);
    x[a] ^= x[d].wrapping_add(x[c]).rotate_left(18);
}

impl core::fmt::Debug for Salsa20State {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Salsa20State {{ [protected] }}")
    }
}
