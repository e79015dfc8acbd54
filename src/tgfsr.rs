//! Twisted Generalized Feedback Shift Register (TGFSR)
//!
//! Based on Matsumoto-Kurita, "Twisted GFSR Generators" (1992)
//!
//! The register is regenerated lazily: each advance rewrites the current word
//! from itself and the word `tap` slots ahead, then moves on to the next slot.
//!
//! The maximal period of 2^(word size × register length) - 1 is only reached for
//! well-chosen tap and twist vector pairs, such as the reference parameters below.
use alloc::vec::Vec;
use core::fmt;

use crate::word::{wrap_index, Word};

/// Reference register length
pub const REGISTER_LEN: usize = 25;

/// Reference word size in bits
pub const WORD_SIZE: u32 = 16;

/// Reference tap index (the middle term of the trinomial)
pub const TAP: usize = 11;

/// Reference twist vector
pub const TWIST_VECTOR: u16 = 0xa875;

/// Reference initial register contents, giving a period of 2^400 - 1
pub const INITIAL_STATE: [u16; REGISTER_LEN] = [
    0xaf6e, 0xe08e, 0x0caf, 0x6f13, 0xe5a0, 0xb79b, 0xbeb4, 0x9f5c, 0x5082, 0xeeda, 0x3a57, 0xb1b6, 0x8767,
    0x98d5, 0x3a32, 0x398a, 0x5e57, 0x982b, 0xb960, 0x4d25, 0x3d6c, 0xd68b, 0x283a, 0x324e, 0xf51d,
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    EmptyRegister,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptyRegister => write!(f, "register must hold at least one word"),
        }
    }
}

/// TGFSR PRNG over words of type `W`
#[derive(Clone, Debug, PartialEq)]
pub struct Tgfsr<W: Word> {
    state: Vec<W>,
    tap: usize,
    twist_vector: W,
    cursor: usize,
}

impl Tgfsr<u16> {
    /// Create the reference 16-bit TGFSR
    pub fn reference() -> Self {
        Self {
            state: INITIAL_STATE.to_vec(),
            tap: TAP,
            twist_vector: TWIST_VECTOR,
            cursor: 0,
        }
    }
}

impl<W: Word> Tgfsr<W> {
    /// Create a TGFSR from the full initial register contents
    ///
    /// Any non-empty register is accepted, including degenerate all-zero ones.
    /// Taps past the register wrap around it.
    pub fn new(initial_state: Vec<W>, tap: usize, twist_vector: W) -> Result<Self, Error> {
        if initial_state.is_empty() {
            return Err(Error::EmptyRegister);
        }

        let tap = tap % initial_state.len();

        Ok(Self {
            state: initial_state,
            tap: tap,
            twist_vector: twist_vector,
            cursor: 0,
        })
    }

    /// Read the current word without advancing
    pub fn output(&self) -> W {
        self.state[self.cursor]
    }

    /// Rewrite the current word and move to the next slot
    pub fn advance(&mut self) {
        let len = self.state.len();
        let current = self.state[self.cursor];

        let mut word = self.state[wrap_index(self.cursor, self.tap, len)] ^ (current >> 1);
        if current.is_odd() {
            word = word ^ self.twist_vector;
        }

        self.state[self.cursor] = word;
        self.cursor = wrap_index(self.cursor, 1, len);
    }

    /// Register length
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Always false, construction rejects empty registers
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn state(&self) -> &[W] {
        &self.state
    }
}

impl<W: Word> Iterator for Tgfsr<W> {
    type Item = W;

    fn next(&mut self) -> Option<W> {
        let word = self.output();
        self.advance();
        Some(word)
    }
}
