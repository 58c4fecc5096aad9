//! The three nonlinear-feedback shift registers and the step function.
//!
//! Register layout and tap positions follow the eSTREAM Trivium definition:
//! register A holds 93 bits, B holds 84, C holds 111, for 288 state bits
//! total. Index 0 is the most recently shifted-in bit; higher indices are
//! older. Each step produces one keystream bit and feeds every register
//! from a different register's feedback term.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::bits::bit_lsb;
use crate::material::{Iv, Key};

/// Width of register A in bits.
pub(crate) const REG_A: usize = 93;

/// Width of register B in bits.
pub(crate) const REG_B: usize = 84;

/// Width of register C in bits.
pub(crate) const REG_C: usize = 111;

/// Total cipher state in bits.
pub(crate) const STATE_BITS: usize = REG_A + REG_B + REG_C;

/// Number of discarded initialization steps (four full state cycles).
pub(crate) const WARMUP_STEPS: usize = 4 * STATE_BITS;

/// Working state of one keystream computation.
///
/// Built fresh per call, stepped once per output bit, and dropped (with
/// zeroization) once the caller has consumed the requested length.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct TriviumState {
    a: [u8; REG_A],
    b: [u8; REG_B],
    c: [u8; REG_C],
}

impl TriviumState {
    /// Load key, IV, and constant bits into the registers.
    ///
    /// A[0..80] = key bits, A[80..93] = 0; B[0..80] = IV bits,
    /// B[80..84] = 0; C[0..108] = 0, C[108..111] = 1. This placement is
    /// fixed by the cipher definition and determines all output.
    pub(crate) fn new(key: &Key, iv: &Iv) -> Self {
        let mut a = [0u8; REG_A];
        let mut b = [0u8; REG_B];
        let mut c = [0u8; REG_C];

        for (i, bit) in a.iter_mut().enumerate().take(80) {
            *bit = bit_lsb(key.as_bytes(), i);
        }
        for (i, bit) in b.iter_mut().enumerate().take(80) {
            *bit = bit_lsb(iv.as_bytes(), i);
        }
        c[108] = 1;
        c[109] = 1;
        c[110] = 1;

        Self { a, b, c }
    }

    /// Run [`WARMUP_STEPS`] steps, discarding every output bit.
    ///
    /// Must complete before any keystream bit is exposed; it diffuses the
    /// key/IV material through the full state.
    pub(crate) fn warm_up(&mut self) {
        for _ in 0..WARMUP_STEPS {
            self.step();
        }
    }

    /// Advance the state by one step, returning the output bit.
    ///
    /// All taps read the state as it was before any mutation.
    pub(crate) fn step(&mut self) -> u8 {
        let t1 = self.a[65] ^ self.a[92];
        let t2 = self.b[68] ^ self.b[83];
        let t3 = self.c[65] ^ self.c[110];
        let z = t1 ^ t2 ^ t3;

        let t1n = t1 ^ (self.a[90] & self.a[91]) ^ self.b[77];
        let t2n = t2 ^ (self.b[81] & self.b[82]) ^ self.c[86];
        let t3n = t3 ^ (self.c[108] & self.c[109]) ^ self.a[68];

        // Cross-wired feedback: each register's new entrant comes from a
        // different register's feedback term.
        shift_in(&mut self.a, t3n);
        shift_in(&mut self.b, t1n);
        shift_in(&mut self.c, t2n);

        z
    }

    /// Pack the next 8 step outputs into a byte, LSB-first.
    pub(crate) fn next_byte(&mut self) -> u8 {
        let mut byte = 0u8;
        for j in 0..8 {
            byte |= self.step() << j;
        }
        byte
    }
}

/// Shift every bit one position toward higher indices, dropping the bit at
/// the top index and inserting `new_bit` at index 0.
fn shift_in(reg: &mut [u8], new_bit: u8) {
    for i in (1..reg.len()).rev() {
        reg[i] = reg[i - 1];
    }
    reg[0] = new_bit;
}
