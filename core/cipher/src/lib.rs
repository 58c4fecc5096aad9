//! Trivium stream-cipher keystream core.
//!
//! This crate provides:
//! - Keystream generation from an 80-bit key and IV
//! - The XOR transform used for both encryption and decryption
//! - A wide-integer twin of the register machinery for cross-validation
//!
//! # Guarantees
//! - Identical (key, IV, length) inputs always produce identical output
//! - Key and IV material is zeroized on drop
//! - Cipher state is a per-call value; nothing persists between calls

pub mod keystream;
pub mod material;
pub mod packed;

mod bits;
mod state;

pub use keystream::{keystream, xor};
pub use material::{Iv, Key, IV_BYTES, KEY_BYTES};
