// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Known-answer tests for the keystream block.

use crate::Salsa20State;

/// 32-byte key shared by the long-key and truncated-key cases.
const KEY: [u8; 32] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 201, 202, 203, 204, 205, 206, 207, 208,
    209, 210, 211, 212, 213, 214, 215, 216,
];

const IV: u64 = u64::from_le_bytes([101, 102, 103, 104, 105, 106, 107, 108]);
const SEQUENCE: u64 = u64::from_le_bytes([109, 110, 111, 112, 113, 114, 115, 116]);

#[test]
fn test_keystream_block_long_key() {
    let mut state = Salsa20State::new_with_iv(&KEY, IV).expect("32-byte key");
    state.set_sequence_number(SEQUENCE);

    let expected: [u8; 64] = [
        69, 37, 68, 39, 41, 15, 107, 193, 255, 139, 122, 6, 170, 233, 217, 98, 89, 144, 182, 106,
        21, 51, 200, 65, 239, 49, 222, 34, 215, 114, 40, 126, 104, 197, 7, 225, 197, 153, 31, 2,
        102, 78, 76, 176, 84, 245, 246, 184, 177, 160, 133, 130, 6, 72, 149, 119, 192, 195, 132,
        236, 234, 103, 246, 74,
    ];
    assert_eq!(state.keystream_block(), expected);
}

#[test]
fn test_keystream_block_truncated_key() {
    let mut state = Salsa20State::new_with_iv(&KEY[..16], IV).expect("16-byte key");
    state.set_sequence_number(SEQUENCE);

    let expected: [u8; 64] = [
        39, 173, 46, 248, 30, 200, 82, 17, 48, 67, 254, 239, 37, 18, 13, 247, 241, 200, 61, 144,
        10, 55, 50, 185, 6, 47, 246, 253, 143, 86, 187, 225, 134, 85, 110, 246, 161, 163, 43, 235,
        231, 94, 171, 51, 145, 214, 112, 29, 14, 232, 5, 16, 151, 140, 183, 141, 171, 9, 122, 181,
        104, 182, 177, 193,
    ];
    assert_eq!(state.keystream_block(), expected);
}

/// ECRYPT 256-bit key, Set 1 vector 0: pins the long-key constant words and
/// the mask against an external reference.
#[test]
fn test_keystream_block_ecrypt_256() {
    let mut key = [0u8; 32];
    key[0] = 0x80;

    let state = Salsa20State::new(&key).expect("32-byte key");

    let expected: [u8; 64] = [
        0xe3, 0xbe, 0x8f, 0xdd, 0x8b, 0xec, 0xa2, 0xe3,
        0xea, 0x8e, 0xf9, 0x47, 0x5b, 0x29, 0xa6, 0xe7,
        0x00, 0x39, 0x51, 0xe1, 0x09, 0x7a, 0x5c, 0x38,
        0xd2, 0x3b, 0x7a, 0x5f, 0xad, 0x9f, 0x68, 0x44,
        0xb2, 0x2c, 0x97, 0x55, 0x9e, 0x27, 0x23, 0xc7,
        0xcb, 0xbd, 0x3f, 0xe4, 0xfc, 0x8d, 0x9a, 0x07,
        0x44, 0x65, 0x2a, 0x83, 0xe7, 0x2a, 0x9c, 0x46,
        0x18, 0x76, 0xaf, 0x4d, 0x7e, 0xf1, 0xa1, 0x17,
    ];
    assert_eq!(state.keystream_block(), expected);
}

/// ECRYPT 128-bit key, Set 1 vector 0: pins the short-key constant words.
#[test]
fn test_keystream_block_ecrypt_128() {
    let mut key = [0u8; 16];
    key[0] = 0x80;

    let state = Salsa20State::new(&key).expect("16-byte key");

    let expected: [u8; 64] = [
        0x4d, 0xfa, 0x5e, 0x48, 0x1d, 0xa2, 0x3e, 0xa0,
        0x9a, 0x31, 0x02, 0x20, 0x50, 0x85, 0x99, 0x36,
        0xda, 0x52, 0xfc, 0xee, 0x21, 0x80, 0x05, 0x16,
        0x4f, 0x26, 0x7c, 0xb6, 0x5f, 0x5c, 0xfd, 0x7f,
        0x2b, 0x4f, 0x97, 0xe0, 0xff, 0x16, 0x92, 0x4a,
        0x52, 0xdf, 0x26, 0x95, 0x15, 0x11, 0x0a, 0x07,
        0xf9, 0xe4, 0x60, 0xbc, 0x65, 0xef, 0x95, 0xda,
        0x58, 0xf7, 0x40, 0xb7, 0xd1, 0xdb, 0xb0, 0xaa,
    ];
    assert_eq!(state.keystream_block(), expected);
}

#[test]
fn test_keystream_block_is_deterministic_and_does_not_advance() {
    let mut state = Salsa20State::new_with_iv(&KEY, IV).expect("32-byte key");
    state.set_sequence_number(SEQUENCE);

    let first = state.keystream_block();
    let second = state.keystream_block();

    assert_eq!(first, second);
    assert_eq!(state.sequence_number(), SEQUENCE);
}
