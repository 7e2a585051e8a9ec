use std::ops::Range;

use alloy_primitives::{Address, Keccak256, B256};
use tracing::trace;

use super::SlotError;
use crate::word::{word256, WORD_BYTES};

/// Location of one array element: the slot holding it and, for elements
/// narrower than a word, where inside that slot it sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArraySlot {
    /// Storage slot containing the element
    pub slot: B256,
    /// Byte offset of the element, counted from the least-significant end of the word
    pub offset: usize,
    /// Element size in bytes
    pub elem_size: usize,
}

impl ArraySlot {
    /// Buffer positions (big-endian indexing) covered by the element within its slot.
    ///
    /// Elements of a word or more start their own slot and cover the whole word.
    pub fn byte_range(&self) -> Range<usize> {
        if self.elem_size >= WORD_BYTES {
            return 0..WORD_BYTES;
        }
        let end = WORD_BYTES - self.offset;
        end - self.elem_size..end
    }
}

/// Compute the storage slot for a mapping entry.
///
/// For `mapping(K => V)` at `base`:
///   slot = keccak256(key . base)
///
/// The key must already be padded to its 32-byte ABI form.
pub fn map_slot(base: B256, key: &[u8]) -> B256 {
    let mut hasher = Keccak256::new();
    hasher.update(key);
    hasher.update(base.as_slice());
    hasher.finalize()
}

/// Mapping slot for an address key, left-padding it to 32 bytes first.
pub fn address_map_slot(base: B256, key: Address) -> B256 {
    map_slot(base, word256::from_address(key).as_slice())
}

/// Compute the base slot for a dynamic array's data.
///
/// For an array whose length lives at `length_slot`:
///   base = keccak256(length_slot)
///   element i lives at base + i (for word-sized elements)
pub fn dynamic_array_base_slot(length_slot: B256) -> B256 {
    let mut hasher = Keccak256::new();
    hasher.update(length_slot.as_slice());
    hasher.finalize()
}

/// Locate element `index` of an array whose data starts at `base`.
///
/// Elements of `elem_size >= 32` bytes take `ceil(elem_size / 32)` whole
/// slots each. Smaller elements pack `floor(32 / elem_size)` to a slot,
/// filling it from the low-order end. Slot arithmetic wraps modulo 2^256
/// like the rest of the address space.
pub fn array_slot(base: B256, elem_size: usize, index: u64) -> Result<ArraySlot, SlotError> {
    if elem_size == 0 {
        return Err(SlotError::ZeroElementSize);
    }

    let (slots, offset) = if elem_size >= WORD_BYTES {
        let words_per_elem = elem_size.div_ceil(WORD_BYTES) as u64;
        let slots = index
            .checked_mul(words_per_elem)
            .ok_or(SlotError::IndexOverflow { index, elem_size })?;
        (slots, 0)
    } else {
        let per_slot = (WORD_BYTES / elem_size) as u64;
        (index / per_slot, (index % per_slot) as usize * elem_size)
    };

    let mut slot = base;
    word256::add_u64(&mut slot, slots);
    trace!(target: "slots", %base, elem_size, index, %slot, offset, "derived array slot");

    Ok(ArraySlot {
        slot,
        offset,
        elem_size,
    })
}
