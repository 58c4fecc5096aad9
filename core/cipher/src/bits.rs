//! Fixed-width byte normalization and bit access.
//!
//! The cipher consumes key and IV material as exactly 80 bits each. Callers
//! may hand in buffers of any length; normalization pads or truncates rather
//! than rejecting. Bits are read LSB-first per byte, the common eSTREAM
//! loading convention.

/// Width of a normalized key or IV in bytes (80 bits).
pub(crate) const FIXED_BYTES: usize = 10;

/// Coerce an arbitrary-length buffer to exactly [`FIXED_BYTES`] bytes.
///
/// Copies `min(input.len(), FIXED_BYTES)` bytes from the front, zero-fills
/// the remainder, and silently drops trailing bytes. Never fails, including
/// for empty input.
pub(crate) fn normalize_to_fixed(input: &[u8]) -> [u8; FIXED_BYTES] {
    let mut out = [0u8; FIXED_BYTES];
    let n = input.len().min(FIXED_BYTES);
    out[..n].copy_from_slice(&input[..n]);
    out
}

/// Read bit `index` from `bytes`, LSB-first per byte.
///
/// Bit 0 is the least-significant bit of the first byte. Indices beyond the
/// buffer read as 0.
pub(crate) fn bit_lsb(bytes: &[u8], index: usize) -> u8 {
    let byte_index = index >> 3;
    if byte_index >= bytes.len() {
        return 0;
    }
    (bytes[byte_index] >> (index & 7)) & 1
}
