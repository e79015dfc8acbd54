use core::fmt;
use core::num::NonZeroU32;

pub mod mt19937_64;
pub mod recovery;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// Extraction was attempted with a cursor past the end of the register
    UninitializedState,
    /// The generator is not at the start of a twist cycle
    InvalidIndex,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UninitializedState => write!(f, "state array was not seeded"),
            Self::InvalidIndex => write!(f, "generator is not at the start of a twist cycle"),
        }
    }
}

impl From<Error> for rand_core::Error {
    fn from(err: Error) -> Self {
        match NonZeroU32::new(rand_core::Error::CUSTOM_START + err as u32) {
            Some(code) => code.into(),
            None => unreachable!("custom error codes are non-zero"),
        }
    }
}
