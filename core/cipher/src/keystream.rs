//! Keystream generation and the XOR transform.
//!
//! These two functions are the entire public boundary of the cipher core.
//! Key and IV buffers of any length are accepted and normalized; the only
//! failure mode is a negative requested length.

use trivium_common::{Error, Result};

use crate::material::{Iv, Key};
use crate::state::TriviumState;

/// Generate `length_bytes` bytes of Trivium keystream.
///
/// # Preconditions
/// - `length_bytes` must be >= 0
///
/// # Postconditions
/// - Returns exactly `length_bytes` bytes
/// - Identical `(key, iv, length_bytes)` inputs always yield identical
///   output; there is no hidden randomness
///
/// # Errors
/// - Returns [`Error::InvalidArgument`] if `length_bytes` is negative,
///   before any cipher state is built
pub fn keystream(key: &[u8], iv: &[u8], length_bytes: i64) -> Result<Vec<u8>> {
    if length_bytes < 0 {
        return Err(Error::InvalidArgument(
            "length_bytes must be >= 0".to_string(),
        ));
    }
    Ok(keystream_exact(key, iv, length_bytes as usize))
}

/// Infallible keystream path for lengths already known to be valid.
pub(crate) fn keystream_exact(key: &[u8], iv: &[u8], length: usize) -> Vec<u8> {
    let key = Key::normalize(key);
    let iv = Iv::normalize(iv);

    let mut state = TriviumState::new(&key, &iv);
    state.warm_up();

    let mut out = vec![0u8; length];
    for byte in &mut out {
        *byte = state.next_byte();
    }
    out
}

/// XOR `data` with a keystream of equal length.
///
/// XOR is self-inverse, so this single function both encrypts and
/// decrypts: applying it twice with the same key/IV reproduces the input.
///
/// # Postconditions
/// - Returns exactly `data.len()` bytes
pub fn xor(key: &[u8], iv: &[u8], data: &[u8]) -> Vec<u8> {
    let ks = keystream_exact(key, iv, data.len());
    data.iter().zip(ks.iter()).map(|(d, k)| d ^ k).collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_keystream_length_is_exact() {
        let key = [0u8; 10];
        let iv = [0u8; 10];

        for n in [0i64, 1, 7, 8, 100, 511] {
            let ks = keystream(&key, &iv, n).unwrap();
            assert_eq!(ks.len(), n as usize);
        }
    }

    #[test]
    fn test_keystream_is_deterministic() {
        let key = [0x11u8, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xAA];
        let iv = [0xDEu8, 0xAD, 0xBE, 0xEF, 0, 0, 0, 0, 0, 0];

        let a = keystream(&key, &iv, 64).unwrap();
        let b = keystream(&key, &iv, 64).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_length_returns_empty_buffer() {
        let ks = keystream(&[0u8; 10], &[0u8; 10], 0).unwrap();
        assert!(ks.is_empty());
    }

    #[test]
    fn test_negative_length_is_rejected() {
        let err = keystream(&[0u8; 10], &[0u8; 10], -1).unwrap_err();
        assert!(
            err.to_string().contains("length_bytes"),
            "error must name the offending parameter: {}",
            err
        );
    }

    #[test]
    fn test_short_key_matches_zero_padded_key() {
        let iv = [4u8, 5];
        let short = keystream(&[1u8, 2, 3], &iv, 32).unwrap();
        let padded = keystream(&[1u8, 2, 3, 0, 0, 0, 0, 0, 0, 0], &iv, 32).unwrap();
        assert_eq!(short, padded);
    }

    #[test]
    fn test_long_key_matches_truncated_key() {
        let iv = [0u8; 10];
        let long: Vec<u8> = (1..=14).collect();
        let a = keystream(&long, &iv, 32).unwrap();
        let b = keystream(&long[..10], &iv, 32).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_xor_roundtrip_recovers_attack_at_dawn() {
        let key = [1u8, 2, 3, 4, 5, 0, 0, 0, 0, 0];
        let iv = key;
        let msg = b"Attack at dawn";

        let ct = xor(&key, &iv, msg);
        assert_eq!(ct.len(), msg.len());
        assert_ne!(ct.as_slice(), msg.as_slice());

        let pt = xor(&key, &iv, &ct);
        assert_eq!(pt.as_slice(), msg.as_slice());
    }

    #[test]
    fn test_xor_of_empty_data_is_empty() {
        let out = xor(&[0u8; 10], &[0u8; 10], &[]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_xor_output_length_matches_data() {
        let key = [9u8; 10];
        let iv = [8u8; 10];
        for n in [1usize, 2, 15, 64, 300] {
            let data = vec![0x5Au8; n];
            assert_eq!(xor(&key, &iv, &data).len(), n);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_xor_is_an_involution(
            key in proptest::collection::vec(any::<u8>(), 10),
            iv in proptest::collection::vec(any::<u8>(), 10),
            msg in proptest::collection::vec(any::<u8>(), 0..512),
        ) {
            let ct = xor(&key, &iv, &msg);
            let pt = xor(&key, &iv, &ct);
            prop_assert_eq!(pt, msg);
        }
    }
}
