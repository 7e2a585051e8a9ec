use std::ops::Range;

use alloy_primitives::B256;

use crate::word::WORD_BYTES;

/// A sub-field of a packed storage word.
///
/// `offset` is a big-endian buffer position: byte 0 is the most significant
/// byte of the word. Fields narrower than 8 bytes read and write as `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedField {
    pub offset: usize,
    pub width: usize,
}

impl PackedField {
    /// # Panics
    ///
    /// At compile time (in const context) or at runtime if the field does not
    /// fit inside a word or is wider than a `u64`.
    pub const fn new(offset: usize, width: usize) -> Self {
        assert!(width > 0 && width <= 8, "packed field width must be 1..=8 bytes");
        assert!(offset + width <= WORD_BYTES, "packed field runs past the word");
        Self { offset, width }
    }

    /// Byte positions the field covers within the word.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.width
    }

    /// Whether the two fields share any byte.
    pub const fn overlaps(&self, other: &PackedField) -> bool {
        self.offset < other.offset + other.width && other.offset < self.offset + self.width
    }

    /// Read the field as an unsigned integer.
    pub fn read(&self, word: &B256) -> u64 {
        let mut bytes = [0u8; 8];
        bytes[8 - self.width..].copy_from_slice(&word[self.range()]);
        u64::from_be_bytes(bytes)
    }

    /// Overwrite only this field's bytes, truncating `value` to the field width.
    pub fn write(&self, word: &mut B256, value: u64) {
        let bytes = value.to_be_bytes();
        let range = self.range();
        word[range].copy_from_slice(&bytes[8 - self.width..]);
    }

    /// Read the field as a flag: any nonzero byte is `true`.
    pub fn read_bool(&self, word: &B256) -> bool {
        self.read(word) != 0
    }

    /// Store a flag as `1` or `0` in the field.
    pub fn write_bool(&self, word: &mut B256, value: bool) {
        self.write(word, value as u64);
    }
}
