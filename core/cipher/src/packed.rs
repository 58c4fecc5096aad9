//! Wide-integer twin of the register machinery.
//!
//! Each register lives in the low bits of a `u128` instead of a per-bit
//! array; extraction is `(reg >> index) & 1` and shifting is
//! `(reg << 1) & mask | new_bit`, with the width mask applied after every
//! shift so no bit beyond the declared width is ever set.
//!
//! This representation exists to cross-check the reference implementation
//! end-to-end and carries no independent product requirement.

use trivium_common::{Error, Result};

use crate::bits::bit_lsb;
use crate::material::{Iv, Key};
use crate::state::{REG_A, REG_B, REG_C, WARMUP_STEPS};

const MASK_A: u128 = (1u128 << REG_A) - 1;
const MASK_B: u128 = (1u128 << REG_B) - 1;
const MASK_C: u128 = (1u128 << REG_C) - 1;

struct PackedState {
    a: u128,
    b: u128,
    c: u128,
}

fn bit_of(reg: u128, index: usize) -> u128 {
    (reg >> index) & 1
}

impl PackedState {
    fn new(key: &Key, iv: &Iv) -> Self {
        let mut a = 0u128;
        let mut b = 0u128;

        for i in 0..80 {
            a |= (bit_lsb(key.as_bytes(), i) as u128) << i;
            b |= (bit_lsb(iv.as_bytes(), i) as u128) << i;
        }
        let c = (1u128 << 108) | (1u128 << 109) | (1u128 << 110);

        Self { a, b, c }
    }

    fn warm_up(&mut self) {
        for _ in 0..WARMUP_STEPS {
            self.step();
        }
    }

    fn step(&mut self) -> u8 {
        let t1 = bit_of(self.a, 65) ^ bit_of(self.a, 92);
        let t2 = bit_of(self.b, 68) ^ bit_of(self.b, 83);
        let t3 = bit_of(self.c, 65) ^ bit_of(self.c, 110);
        let z = t1 ^ t2 ^ t3;

        let t1n = t1 ^ (bit_of(self.a, 90) & bit_of(self.a, 91)) ^ bit_of(self.b, 77);
        let t2n = t2 ^ (bit_of(self.b, 81) & bit_of(self.b, 82)) ^ bit_of(self.c, 86);
        let t3n = t3 ^ (bit_of(self.c, 108) & bit_of(self.c, 109)) ^ bit_of(self.a, 68);

        self.a = ((self.a << 1) & MASK_A) | t3n;
        self.b = ((self.b << 1) & MASK_B) | t1n;
        self.c = ((self.c << 1) & MASK_C) | t2n;

        z as u8
    }

    fn next_byte(&mut self) -> u8 {
        let mut byte = 0u8;
        for j in 0..8 {
            byte |= self.step() << j;
        }
        byte
    }
}

/// Generate keystream with the wide-integer representation.
///
/// Same contract as [`crate::keystream`], byte for byte.
///
/// # Errors
/// - Returns [`Error::InvalidArgument`] if `length_bytes` is negative
pub fn keystream(key: &[u8], iv: &[u8], length_bytes: i64) -> Result<Vec<u8>> {
    if length_bytes < 0 {
        return Err(Error::InvalidArgument(
            "length_bytes must be >= 0".to_string(),
        ));
    }

    let key = Key::normalize(key);
    let iv = Iv::normalize(iv);

    let mut state = PackedState::new(&key, &iv);
    state.warm_up();

    let mut out = vec![0u8; length_bytes as usize];
    for byte in &mut out {
        *byte = state.next_byte();
    }
    Ok(out)
}
