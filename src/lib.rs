#![no_std]

extern crate alloc;

pub mod mersenne;
pub mod report;
pub mod tgfsr;
pub mod word;

pub use mersenne::mt19937_64::Mt19937_64;
pub use tgfsr::Tgfsr;
