//! Storage Slot Derivation
//!
//! Computes where each piece of token state lives in the 32-byte key space,
//! following the conventional Solidity layout so that external tooling
//! (explorers, `eth_getStorageAt` scripts, genesis generators) can locate
//! balances and minters without any knowledge of this crate.
//!
//! Layout rules:
//!   scalar / packed  → fixed slot constant (see [`token_slots`])
//!   mapping entry    → keccak256(pad32(key) . base)
//!   dynamic array    → data at keccak256(length_slot) + index
//!   packed elements  → floor(32 / size) per slot, low-order end first

pub mod derive;
pub mod layout;
pub mod packed;

pub use derive::{address_map_slot, array_slot, dynamic_array_base_slot, map_slot, ArraySlot};
pub use layout::token_slots;
pub use packed::PackedField;

use thiserror::Error;

/// Errors from array slot derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlotError {
    /// Zero-sized elements have no storage location
    #[error("array element size must be nonzero")]
    ZeroElementSize,

    /// The element's slot offset does not fit 64 bits
    #[error("array index {index} with element size {elem_size} overflows 64-bit slot offset")]
    IndexOverflow {
        /// Requested index
        index: u64,
        /// Element size in bytes
        elem_size: usize,
    },
}
