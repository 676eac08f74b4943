use crate::alphabet;
use serde::Serialize;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Error {
    /// The input length is not a multiple of `divisor` (4 when encoding, 5 when decoding).
    InvalidLength { divisor: usize },
    /// The byte at `index` is not a Z85 character.
    InvalidByte { index: usize, character: u8 },
    /// The chunk starting at `index` decodes to a value above `u32::MAX`.
    Overflow { index: usize },
    /// The output buffer was too small to contain the entire output.
    BufferTooSmall,
}

impl Error {
    pub fn is_invalid_length(&self) -> bool {
        matches!(self, Self::InvalidLength { .. })
    }

    pub fn is_invalid_byte(&self) -> bool {
        matches!(self, Self::InvalidByte { .. })
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }

    pub fn is_buffer_too_small(&self) -> bool {
        matches!(self, Self::BufferTooSmall)
    }
}

pub fn is_invalid_length(error: &Error) -> bool {
    error.is_invalid_length()
}

pub fn is_invalid_byte(error: &Error) -> bool {
    error.is_invalid_byte()
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidLength { divisor } => write!(f, "Input length is not a multiple of {}", divisor),
            Self::InvalidByte { index, character } if character.is_ascii_graphic() => {
                write!(f, "Invalid byte at index {}: '{}'", index, character as char)
            }
            Self::InvalidByte { index, character } => write!(f, "Invalid byte at index {}: {:#04x}", index, character),
            Self::Overflow { index } => write!(f, "Chunk at index {} overflows 32 bits", index),
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::OutOfRange { character, index } | alphabet::DecodeError::Unassigned { character, index } => {
                Error::InvalidByte { index, character }
            }
        }
    }
}
