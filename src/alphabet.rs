use std::{error, fmt};

/// Reverse table entry for printable characters that are not part of the alphabet.
pub const SENTINEL: u8 = 0xFF;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonPrintableCharacter { character: u8, index: usize },
    InvalidSpan { expected: usize, actual: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// The character lies outside the code range covered by the reverse table.
    OutOfRange { character: u8, index: usize },
    /// The character lies inside the covered range but has no value assigned.
    Unassigned { character: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonPrintableCharacter { character, index } => {
                write!(f, "Non-printable character {:#04x} at index {}", character, index)
            }
            Self::InvalidSpan { expected, actual } => {
                write!(f, "Alphabet spans {} character codes instead of {}", actual, expected)
            }
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { character, index } => write!(f, "Character {:#04x} at index {} is out of range", character, index),
            Self::Unassigned { character, index } => write!(f, "Character {:#04x} at index {} is not in the alphabet", character, index),
        }
    }
}

/// A digit alphabet of `N` printable ASCII characters whose codes span `SPAN` consecutive values.
///
/// The reverse table starts at the smallest character code and holds one entry per code up to the
/// largest one, so gaps inside the alphabet keep [`SENTINEL`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alphabet<const N: usize, const SPAN: usize> {
    encode: [u8; N],
    decode: [u8; SPAN],
    offset: u8,
    max: u8,
}

impl<const N: usize, const SPAN: usize> Alphabet<N, SPAN> {
    pub fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    pub fn decode(&self, character: u8, index: usize) -> Result<u8, DecodeError> {
        if character < self.offset || character > self.max {
            return Err(DecodeError::OutOfRange { character, index });
        }
        match self.decode[(character - self.offset) as usize] {
            SENTINEL => Err(DecodeError::Unassigned { character, index }),
            value => Ok(value),
        }
    }

    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        let mut offset = u8::MAX;
        let mut max = 0u8;

        let mut index = 0;
        while index < N {
            let character = characters[index];
            if character < b'!' || character > b'~' {
                return Err(Error::NonPrintableCharacter { character, index });
            }
            if character < offset {
                offset = character;
            }
            if character > max {
                max = character;
            }
            index += 1;
        }

        let actual = if N == 0 { 0 } else { (max - offset) as usize + 1 };
        if actual != SPAN {
            return Err(Error::InvalidSpan { expected: SPAN, actual });
        }

        let mut encode = [0u8; N];
        let mut decode = [SENTINEL; SPAN];

        index = 0;
        while index < N {
            let character = characters[index];
            let slot = (character - offset) as usize;
            if decode[slot] != SENTINEL {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: decode[slot] as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[slot] = index as u8;
            index += 1;
        }

        Ok(Self { encode, decode, offset, max })
    }

    pub const fn len(&self) -> usize {
        self.encode.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.encode.is_empty()
    }

    /// Smallest character code in the alphabet, i.e. the first code covered by the reverse table.
    pub const fn offset(&self) -> u8 {
        self.offset
    }

    /// Largest character code in the alphabet.
    pub const fn max(&self) -> u8 {
        self.max
    }

    pub const fn characters(&self) -> &[u8; N] {
        &self.encode
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, DecodeError, Error};
    use crate::ALPHABET;

    const Z85: &[u8; 85] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#";

    #[test]
    fn encode() {
        assert_eq!(ALPHABET.encode(0), b'0');
        assert_eq!(ALPHABET.encode(10), b'a');
        assert_eq!(ALPHABET.encode(36), b'A');
        assert_eq!(ALPHABET.encode(84), b'#');
        assert_eq!(ALPHABET.len(), 85);
    }

    #[test]
    fn decode() {
        for (value, &character) in Z85.iter().enumerate() {
            assert_eq!(ALPHABET.decode(character, value), Ok(value as u8));
        }
    }

    #[test]
    fn range() {
        assert_eq!(ALPHABET.offset(), b'!');
        assert_eq!(ALPHABET.max(), b'}');
    }

    #[test]
    fn decode_unassigned() {
        for &character in b"\"',;\\_`|" {
            assert_eq!(ALPHABET.decode(character, 7), Err(DecodeError::Unassigned { character, index: 7 }));
        }
    }

    #[test]
    fn decode_out_of_range() {
        for &character in &[b'~', b' ', b'\n', 0x00, 0x7f, 0x80, 0xff] {
            assert_eq!(ALPHABET.decode(character, 2), Err(DecodeError::OutOfRange { character, index: 2 }));
        }
    }

    #[test]
    fn rebuild_is_identical() {
        let first = Alphabet::<85, 93>::new(Z85);
        let second = Alphabet::<85, 93>::new(Z85);
        assert_eq!(first, second);
        assert_eq!(first, Ok(ALPHABET));
    }

    #[test]
    fn new_rejects_duplicates() {
        assert_eq!(
            Alphabet::<4, 3>::new(b"abca").err(),
            Some(Error::DuplicateCharacter { character: 'a', first: 0, second: 3 })
        );
    }

    #[test]
    fn new_rejects_non_printable() {
        assert_eq!(
            Alphabet::<3, 3>::new(b"a b").err(),
            Some(Error::NonPrintableCharacter { character: b' ', index: 1 })
        );
        assert_eq!(
            Alphabet::<2, 2>::new(&[b'a', 0xe9]).err(),
            Some(Error::NonPrintableCharacter { character: 0xe9, index: 1 })
        );
    }

    #[test]
    fn new_rejects_wrong_span() {
        assert_eq!(Alphabet::<3, 3>::new(b"acd").err(), Some(Error::InvalidSpan { expected: 3, actual: 4 }));
    }

    #[test]
    fn sparse_alphabet() {
        let alphabet = Alphabet::<3, 5>::new(b"eac").unwrap();
        assert_eq!(alphabet.decode(b'a', 0), Ok(1));
        assert_eq!(alphabet.decode(b'b', 1), Err(DecodeError::Unassigned { character: b'b', index: 1 }));
        assert_eq!(alphabet.decode(b'e', 2), Ok(0));
        assert_eq!(alphabet.decode(b'f', 3), Err(DecodeError::OutOfRange { character: b'f', index: 3 }));
        assert_eq!(alphabet.characters(), b"eac");
    }
}
