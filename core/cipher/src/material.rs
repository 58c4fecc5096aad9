//! Key and IV types with secure memory handling.
//!
//! Both types hold their material already normalized to the fixed 80-bit
//! width and zeroize it on drop.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::bits::{normalize_to_fixed, FIXED_BYTES};

/// Length of a normalized Trivium key in bytes (80-bit).
pub const KEY_BYTES: usize = FIXED_BYTES;

/// Length of a normalized Trivium IV in bytes (80-bit).
pub const IV_BYTES: usize = FIXED_BYTES;

/// An 80-bit Trivium key.
///
/// Construction never fails: shorter input is zero-padded on the high end,
/// longer input is truncated to the first [`KEY_BYTES`] bytes. This leniency
/// is a documented convenience; callers needing interoperability with
/// canonical Trivium test vectors must supply exactly [`KEY_BYTES`] bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key {
    bytes: [u8; KEY_BYTES],
}

impl Key {
    /// Normalize arbitrary-length input into a key.
    pub fn normalize(raw: &[u8]) -> Self {
        Self {
            bytes: normalize_to_fixed(raw),
        }
    }

    /// Get the normalized key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_BYTES] {
        &self.bytes
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key([REDACTED])")
    }
}

/// An 80-bit Trivium initialization vector.
///
/// Normalization follows the same pad/truncate policy as [`Key`].
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Iv {
    bytes: [u8; IV_BYTES],
}

impl Iv {
    /// Normalize arbitrary-length input into an IV.
    pub fn normalize(raw: &[u8]) -> Self {
        Self {
            bytes: normalize_to_fixed(raw),
        }
    }

    /// Get the normalized IV bytes.
    pub fn as_bytes(&self) -> &[u8; IV_BYTES] {
        &self.bytes
    }
}

impl fmt::Debug for Iv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iv([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_normalizes_short_input() {
        let key = Key::normalize(&[1, 2, 3]);
        assert_eq!(key.as_bytes(), &[1, 2, 3, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_key_normalizes_long_input() {
        let key = Key::normalize(&[9u8; 12]);
        assert_eq!(key.as_bytes(), &[9u8; 10]);
    }

    #[test]
    fn test_iv_normalizes_empty_input() {
        let iv = Iv::normalize(&[]);
        assert_eq!(iv.as_bytes(), &[0u8; IV_BYTES]);
    }

    #[test]
    fn test_debug_redacts_material() {
        let key = Key::normalize(&[0xFFu8; 10]);
        let iv = Iv::normalize(&[0xEEu8; 10]);
        assert_eq!(format!("{:?}", key), "Key([REDACTED])");
        assert_eq!(format!("{:?}", iv), "Iv([REDACTED])");
    }
}
