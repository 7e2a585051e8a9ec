//! Carry-propagating arithmetic on big-endian byte buffers.

use std::cmp::Ordering;

use super::WordError;

/// Add `rhs` into `lhs` in place.
///
/// `rhs` is aligned to the low-order end of `lhs`. Returns `Ok(true)` when a
/// carry fell off the top byte of `lhs`: the stored value has wrapped and the
/// caller must treat it as an overflow.
pub fn add(lhs: &mut [u8], rhs: &[u8]) -> Result<bool, WordError> {
    let shift = operand_shift(lhs, rhs)?;
    let mut carry = 0u16;
    for i in (0..lhs.len()).rev() {
        let r = if i >= shift { rhs[i - shift] as u16 } else { 0 };
        if i < shift && carry == 0 {
            break;
        }
        let sum = lhs[i] as u16 + r + carry;
        lhs[i] = sum as u8;
        carry = sum >> 8;
    }
    Ok(carry != 0)
}

/// Subtract `rhs` from `lhs` in place.
///
/// Returns `Ok(true)` when a borrow ran past the top byte of `lhs`, meaning
/// the true result was negative and `lhs` now holds its two's-complement wrap.
pub fn sub(lhs: &mut [u8], rhs: &[u8]) -> Result<bool, WordError> {
    let shift = operand_shift(lhs, rhs)?;
    let mut borrow = 0i16;
    for i in (0..lhs.len()).rev() {
        let r = if i >= shift { rhs[i - shift] as i16 } else { 0 };
        if i < shift && borrow == 0 {
            break;
        }
        let mut diff = lhs[i] as i16 - r - borrow;
        if diff < 0 {
            diff += 256;
            borrow = 1;
        } else {
            borrow = 0;
        }
        lhs[i] = diff as u8;
    }
    Ok(borrow != 0)
}

/// Compare two big-endian magnitudes of possibly different widths.
///
/// The shorter operand is treated as if zero-extended on the left, so any
/// nonzero high byte of the longer one decides the result.
pub fn cmp(lhs: &[u8], rhs: &[u8]) -> Ordering {
    let width = lhs.len().max(rhs.len());
    for i in 0..width {
        match padded_byte(lhs, width, i).cmp(&padded_byte(rhs, width, i)) {
            Ordering::Equal => continue,
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

/// Whether every byte of `buf` is zero.
pub fn is_zero(buf: &[u8]) -> bool {
    buf.iter().all(|b| *b == 0)
}

fn operand_shift(lhs: &[u8], rhs: &[u8]) -> Result<usize, WordError> {
    if rhs.len() > lhs.len() {
        return Err(WordError::OperandTooWide {
            lhs: lhs.len(),
            rhs: rhs.len(),
        });
    }
    Ok(lhs.len() - rhs.len())
}

fn padded_byte(buf: &[u8], width: usize, i: usize) -> u8 {
    let pad = width - buf.len();
    if i < pad {
        0
    } else {
        buf[i - pad]
    }
}
