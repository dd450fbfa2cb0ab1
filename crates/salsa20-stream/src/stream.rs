// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Stream applicator: drives the cipher state across blocks to transform
//! buffers of arbitrary length.
//!
//! Salsa20 is an XOR involution, so every function here both encrypts and
//! decrypts; there is no separate decrypt entry point.
//!
//! The sequential functions continue from the current counter position and
//! chain across calls as long as every prior call consumed an exact multiple
//! of 64 bytes; a partial final block changes the alignment of any
//! subsequent call. The `_at` functions instead seek the counter to
//! `offset / 64` and start inside that block at `offset % 64`, which is what
//! makes the cipher usable for random-access encrypted storage: one
//! sequential pass over a range is byte-identical to any non-overlapping
//! offset-addressed partition of it applied to copies of the initial state.

use crate::consts::BLOCK_SIZE;
use crate::state::Salsa20State;

/// XOR the keystream into `src`, writing the result to `dst`, sequentially
/// from the current counter position.
///
/// The counter advances by one per block touched, including a final partial
/// block. A zero-length call is a no-op and does not advance the counter.
///
/// # Panics
///
/// Panics if `dst` and `src` differ in length.
pub fn apply_keystream(state: &mut Salsa20State, dst: &mut [u8], src: &[u8]) {
    assert_eq!(dst.len(), src.len(), "dst and src must be the same length");

    for (dst_chunk, src_chunk) in dst.chunks_mut(BLOCK_SIZE).zip(src.chunks(BLOCK_SIZE)) {
        let block = state.keystream_block();
        state.increment_sequence_number();

        for (out, (byte, ks_byte)) in dst_chunk
            .iter_mut()
            .zip(src_chunk.iter().zip(block.iter()))
        {
            *out = byte ^ ks_byte;
        }
    }
}

/// XOR the keystream for byte positions `offset..offset + src.len()` into
/// `src`, writing the result to `dst`.
///
/// Seeks the counter to the block containing `offset`; bytes before the
/// offset are not produced. A zero-length call leaves the state untouched.
///
/// # Panics
///
/// Panics if `dst` and `src` differ in length.
pub fn apply_keystream_at(state: &mut Salsa20State, dst: &mut [u8], src: &[u8], offset: u64) {
    assert_eq!(dst.len(), src.len(), "dst and src must be the same length");
    if src.is_empty() {
        return;
    }

    state.set_sequence_number(offset / BLOCK_SIZE as u64);
    let mut block = state.keystream_block();
    let mut idx = (offset % BLOCK_SIZE as u64) as usize;

    for (out, byte) in dst.iter_mut().zip(src.iter()) {
        *out = byte ^ block[idx];
        idx += 1;
        if idx == BLOCK_SIZE {
            state.increment_sequence_number();
            block = state.keystream_block();
            idx = 0;
        }
    }
}

/// In-place form of [`apply_keystream`]: XOR the keystream directly into
/// `data`, sequentially from the current counter position.
pub fn xor_keystream(state: &mut Salsa20State, data: &mut [u8]) {
    for chunk in data.chunks_mut(BLOCK_SIZE) {
        let block = state.keystream_block();
        state.increment_sequence_number();

        for (byte, ks_byte) in chunk.iter_mut().zip(block.iter()) {
            *byte ^= ks_byte;
        }
    }
}

/// In-place form of [`apply_keystream_at`]: XOR the keystream for byte
/// positions `offset..offset + data.len()` directly into `data`.
pub fn xor_keystream_at(state: &mut Salsa20State, data: &mut [u8], offset: u64) {
    if data.is_empty() {
        return;
    }

    state.set_sequence_number(offset / BLOCK_SIZE as u64);
    let mut block = state.keystream_block();
    let mut idx = (offset % BLOCK_SIZE as u64) as usize;

    for byte in data.iter_mut() {
        *byte ^= block[idx];
        idx += 1;
        if idx == BLOCK_SIZE {
            state.increment_sequence_number();
            block = state.keystream_block();
            idx = 0;
        }
    }
}
