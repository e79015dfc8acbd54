//! Implementation of the 64-bit Mersenne Twister MT19937-64 based on Matsumoto-Nishimura and Wikipedia pseudo-code:
//!
//! http://www.math.sci.hiroshima-u.ac.jp/m-mat/MT/VERSIONS/C-LANG/mt19937-64.c
//! https://en.wikipedia.org/wiki/Mersenne_Twister

use rand_core::{impls, RngCore, SeedableRng};

use crate::word::{truncate64, wrap_index};

use super::Error;

pub const W: u64 = 64;

/// Register length of the reference generator
///
/// Over-allocated relative to the canonical register, and every slot takes part in the twist
pub const REFERENCE_N: usize = 340;

/// Register length of the canonical MT19937-64
pub const CANONICAL_N: usize = 312;

pub const M: usize = 156;

pub const R: u64 = 31;

pub const A: u64 = 0xb502_6f5a_a966_19e9;

pub const U: u64 = 29;
pub const D: u64 = 0x5555_5555_5555_5555;

pub const S: u64 = 17;
pub const B: u64 = 0x71d6_7fff_eda6_0000;

pub const T: u64 = 37;
pub const C: u64 = 0xfff7_eee0_0000_0000;

pub const L: u64 = 43;

pub const F: u64 = 6_364_136_223_846_793_005;

pub const LOWER_MASK: u64 = (1 << R) - 1;
pub const UPPER_MASK: u64 = !LOWER_MASK;

/// Position of the next word to temper
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Cursor {
    /// Register must be twisted before the next read
    Fresh,
    Ready(usize),
}

/// MT19937-64 PRNG with a register of `N` words
#[derive(Clone)]
pub struct Mt19937_64<const N: usize = REFERENCE_N> {
    pub(crate) state: [u64; N],
    pub(crate) cursor: Cursor,
}

impl Mt19937_64 {
    /// Create an initialized reference MT19937-64 PRNG
    pub fn new(seed: u64) -> Self {
        Self::seeded(seed)
    }
}

impl<const N: usize> Mt19937_64<N> {
    // evaluated on use, so a zero-length register fails to compile
    const NON_EMPTY: () = assert!(N > 0, "register must hold at least one word");

    /// Create an initialized MT19937-64 PRNG with an `N` word register
    ///
    /// Every seed is used as-is, including zero. `N` must be non-zero:
    ///
    /// ```compile_fail
    /// let _ = twister::Mt19937_64::<0>::seeded(1);
    /// ```
    pub fn seeded(seed: u64) -> Self {
        let () = Self::NON_EMPTY;

        let mut state = [0_u64; N];
        state[0] = seed;

        for i in 1..N {
            // xi = f × (xi−1 ⊕ (xi−1 >> (w−2))) + i
            let prev = state[i - 1] ^ (state[i - 1] >> (W - 2));
            state[i] = truncate64(F as u128 * prev as u128 + i as u128);
        }

        Self {
            state: state,
            cursor: Cursor::Fresh,
        }
    }

    /// Extract a tempered value based on MT[cursor]
    /// twisting the whole register every N numbers
    pub fn extract(&mut self) -> Result<u64, Error> {
        let index = match self.cursor {
            Cursor::Fresh => {
                self.twist();
                0
            }
            Cursor::Ready(index) if index < N => index,
            Cursor::Ready(_) => return Err(Error::UninitializedState),
        };

        Ok(self.temper(index))
    }

    // Temper MT[index] and move the cursor past it
    fn temper(&mut self, index: usize) -> u64 {
        let mut y = self.state[index];

        y ^= (y >> U) & D;
        y ^= (y << S) & B;
        y ^= (y << T) & C;
        y ^= y >> L;

        self.cursor = if index + 1 == N {
            Cursor::Fresh
        } else {
            Cursor::Ready(index + 1)
        };

        y
    }

    /// Regenerate the full register in place
    ///
    /// Slots are rewritten in ascending order, so MT[i + M] and MT[i + 1] may already hold twisted values
    pub(crate) fn twist(&mut self) {
        for i in 0..N {
            let x = (self.state[i] & UPPER_MASK) | (self.state[wrap_index(i, 1, N)] & LOWER_MASK);

            let mut x_a = x >> 1;
            if x & 1 != 0 {
                x_a ^= A;
            }

            self.state[i] = self.state[wrap_index(i, M, N)] ^ x_a;
        }

        self.cursor = Cursor::Ready(0);
    }

    /// Whether the next extraction twists the register
    pub fn at_cycle_start(&self) -> bool {
        self.cursor == Cursor::Fresh
    }
}

impl<const N: usize> Iterator for Mt19937_64<N> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.extract().ok()
    }
}

impl<const N: usize> RngCore for Mt19937_64<N> {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        match self.extract() {
            Ok(num) => num,
            Err(err) => panic!("MT19937-64 extraction failed: {}", err),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.extract()?.to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }

        Ok(())
    }
}

impl<const N: usize> SeedableRng for Mt19937_64<N> {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::seeded(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::seeded(state)
    }
}
