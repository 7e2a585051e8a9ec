//! 32-byte word specialisation.
//!
//! Numeric scalars occupy the least-significant (rightmost) bytes of the
//! word. `set_uN` zero-fills everything above the value; `is_uN` checks
//! that nothing above the low N-byte region is set, so the value can be
//! read back losslessly with `get_uN`.

use std::cmp::Ordering;

use alloy_primitives::{Address, B256};

use super::{arith, codec, ADDRESS_BYTES, WORD_BYTES};

/// 256-bit unsigned integer stored as 32 big-endian bytes.
pub type Word256 = B256;

/// Add `rhs` into `lhs`, returning `true` if the sum wrapped past 2^256.
pub fn add(lhs: &mut Word256, rhs: &Word256) -> bool {
    // Operand widths never exceed 32 here, so the width error is unreachable.
    arith::add(lhs.as_mut_slice(), rhs.as_slice()).unwrap_or(true)
}

/// Subtract `rhs` from `lhs`, returning `true` if the difference went below zero.
pub fn sub(lhs: &mut Word256, rhs: &Word256) -> bool {
    arith::sub(lhs.as_mut_slice(), rhs.as_slice()).unwrap_or(true)
}

/// Add a `u64` into `lhs`, returning `true` on wrap.
pub fn add_u64(lhs: &mut Word256, rhs: u64) -> bool {
    arith::add(lhs.as_mut_slice(), &rhs.to_be_bytes()).unwrap_or(true)
}

/// Three-way compare of two words.
pub fn cmp(lhs: &Word256, rhs: &Word256) -> Ordering {
    arith::cmp(lhs.as_slice(), rhs.as_slice())
}

/// Whether every byte is zero.
pub fn is_zero(word: &Word256) -> bool {
    arith::is_zero(word.as_slice())
}

/// Zero the word, then store `value` in its last byte.
pub fn set_u8(word: &mut Word256, value: u8) {
    word.0 = [0u8; WORD_BYTES];
    codec::set_u8(word.as_mut_slice(), WORD_BYTES - 1, value);
}

/// Zero the word, then store `value` in its last 2 bytes.
pub fn set_u16(word: &mut Word256, value: u16) {
    word.0 = [0u8; WORD_BYTES];
    codec::set_u16(word.as_mut_slice(), WORD_BYTES - 2, value);
}

/// Zero the word, then store `value` in its last 4 bytes.
pub fn set_u32(word: &mut Word256, value: u32) {
    word.0 = [0u8; WORD_BYTES];
    codec::set_u32(word.as_mut_slice(), WORD_BYTES - 4, value);
}

/// Zero the word, then store `value` in its last 8 bytes.
pub fn set_u64(word: &mut Word256, value: u64) {
    word.0 = [0u8; WORD_BYTES];
    codec::set_u64(word.as_mut_slice(), WORD_BYTES - 8, value);
}

/// Build a word holding `value` in its low-order bytes.
pub fn from_u64(value: u64) -> Word256 {
    let mut word = Word256::ZERO;
    set_u64(&mut word, value);
    word
}

/// Last byte as a `u8`.
pub fn get_u8(word: &Word256) -> u8 {
    codec::get_u8(word.as_slice(), WORD_BYTES - 1)
}

/// Low 2 bytes as a `u16`.
pub fn get_u16(word: &Word256) -> u16 {
    codec::get_u16(word.as_slice(), WORD_BYTES - 2)
}

/// Low 4 bytes as a `u32`.
pub fn get_u32(word: &Word256) -> u32 {
    codec::get_u32(word.as_slice(), WORD_BYTES - 4)
}

/// Low 8 bytes as a `u64`. Higher bytes are ignored; check [`is_u64`] first
/// when they must be zero.
pub fn get_u64(word: &Word256) -> u64 {
    codec::get_u64(word.as_slice(), WORD_BYTES - 8)
}

/// Whether the value fits in a `u8` (all but the last byte zero).
pub fn is_u8(word: &Word256) -> bool {
    arith::is_zero(&word[..WORD_BYTES - 1])
}

/// Whether the value fits in a `u16`.
pub fn is_u16(word: &Word256) -> bool {
    arith::is_zero(&word[..WORD_BYTES - 2])
}

/// Whether the value fits in a `u32`.
pub fn is_u32(word: &Word256) -> bool {
    arith::is_zero(&word[..WORD_BYTES - 4])
}

/// Whether the value fits in a `u64`, so [`get_u64`] is lossless.
pub fn is_u64(word: &Word256) -> bool {
    arith::is_zero(&word[..WORD_BYTES - 8])
}

/// Whether the word is a 20-byte address left-padded with 12 zero bytes.
pub fn is_u160(word: &Word256) -> bool {
    arith::is_zero(&word[..WORD_BYTES - ADDRESS_BYTES])
}

/// Left-pad an address into a word.
pub fn from_address(addr: Address) -> Word256 {
    let mut bytes = [0u8; WORD_BYTES];
    bytes[WORD_BYTES - ADDRESS_BYTES..].copy_from_slice(addr.as_slice());
    Word256::from(bytes)
}

/// Low 20 bytes of a word as an address. Does not check the padding.
pub fn to_address(word: &Word256) -> Address {
    Address::from_slice(&word[WORD_BYTES - ADDRESS_BYTES..])
}
