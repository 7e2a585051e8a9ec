//! Big-endian word arithmetic over plain byte buffers.
//!
//! Storage values are 32-byte big-endian words. This module provides the
//! byte-level codec (`get_uN` / `set_uN` at an arbitrary offset) and
//! carry-propagating arithmetic that works on buffers of any length, so
//! balances and supply can be handled as raw storage words without
//! converting through a native wide integer type.
//!
//! Arithmetic never fails on overflow. [`add`] and [`sub`] wrap and report
//! whether a carry or borrow fell off the top byte; the caller decides
//! whether that is fatal.
//!
//! ```text
//!   lhs: [00 .. 00 ff ff]     rhs: [00 01]
//!   add → lhs: [00 .. 01 00 00], carry = false
//! ```

pub mod arith;
pub mod codec;
pub mod word256;

pub use arith::{add, cmp, is_zero, sub};
pub use codec::{get_u16, get_u32, get_u64, get_u8, set_u16, set_u32, set_u64, set_u8};

use thiserror::Error;

/// Size in bytes of a storage word.
pub const WORD_BYTES: usize = 32;

/// Size in bytes of an address.
pub const ADDRESS_BYTES: usize = 20;

/// Errors from slice-level word arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WordError {
    /// The right-hand operand is wider than the accumulator it is folded into.
    #[error("operand too wide: rhs has {rhs} bytes, lhs only {lhs}")]
    OperandTooWide {
        /// Accumulator width
        lhs: usize,
        /// Operand width
        rhs: usize,
    },
}
