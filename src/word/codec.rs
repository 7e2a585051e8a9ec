//! Fixed-width big-endian field access inside a byte buffer.
//!
//! These are pure byte moves. Nothing carries between neighbouring bytes
//! and nothing outside `offset..offset + N` is touched.
//!
//! All accessors panic if `offset + N` runs past the end of the buffer,
//! the same as slice indexing.

/// Read the byte at `offset`.
pub fn get_u8(buf: &[u8], offset: usize) -> u8 {
    buf[offset]
}

/// Write `value` at `offset`.
pub fn set_u8(buf: &mut [u8], offset: usize, value: u8) {
    buf[offset] = value;
}

/// Read a big-endian `u16` starting at `offset`.
pub fn get_u16(buf: &[u8], offset: usize) -> u16 {
    let mut bytes = [0u8; 2];
    bytes.copy_from_slice(&buf[offset..offset + 2]);
    u16::from_be_bytes(bytes)
}

/// Write `value` as big-endian starting at `offset`.
pub fn set_u16(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
}

/// Read a big-endian `u32` starting at `offset`.
pub fn get_u32(buf: &[u8], offset: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&buf[offset..offset + 4]);
    u32::from_be_bytes(bytes)
}

/// Write `value` as big-endian starting at `offset`.
pub fn set_u32(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
}

/// Read a big-endian `u64` starting at `offset`.
pub fn get_u64(buf: &[u8], offset: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&buf[offset..offset + 8]);
    u64::from_be_bytes(bytes)
}

/// Write `value` as big-endian starting at `offset`.
pub fn set_u64(buf: &mut [u8], offset: usize, value: u64) {
    buf[offset..offset + 8].copy_from_slice(&value.to_be_bytes());
}
