use core::fmt::{Debug, LowerHex};
use core::ops::{BitXor, Shr};

/// All-ones mask for 64-bit words
pub const MASK_64: u128 = mask(64);

/// Fixed-width unsigned register word
pub trait Word: Copy + Debug + PartialEq + LowerHex + BitXor<Output = Self> + Shr<u32, Output = Self> {
    /// Width of the word in bits
    const BITS: u32;

    /// Whether the least significant bit is set
    fn is_odd(self) -> bool;
}

macro_rules! impl_word {
    ($($ty:ty),+) => {
        $(
            impl Word for $ty {
                const BITS: u32 = <$ty>::BITS;

                fn is_odd(self) -> bool {
                    self & 1 == 1
                }
            }
        )+
    };
}

impl_word!(u8, u16, u32, u64);

/// All-ones mask for a word of the given width
pub const fn mask(width: u32) -> u128 {
    if width >= 128 {
        u128::MAX
    } else {
        (1 << width) - 1
    }
}

/// Truncate an arbitrarily wide intermediate to 64 bits
pub fn truncate64(number: u128) -> u64 {
    (number & MASK_64) as u64
}

/// Index `offset` slots past `index` in a register of length `len`
///
/// Both terms are reduced first, so any offset is accepted
pub fn wrap_index(index: usize, offset: usize, len: usize) -> usize {
    (index % len + offset % len) % len
}
