use crate::{Alphabet, Error, ALPHABET, BYTE_CHUNK_LEN, ENCODED_CHUNK_LEN};

const BASE: u32 = 85;

/// Number of bytes produced by decoding `len` characters.
pub fn decoded_len(len: usize) -> Result<usize, Error> {
    if len % ENCODED_CHUNK_LEN != 0 {
        return Err(Error::InvalidLength { divisor: ENCODED_CHUNK_LEN });
    }
    Ok(len / ENCODED_CHUNK_LEN * BYTE_CHUNK_LEN)
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet<85, 93>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<85, 93>) -> Self {
        Self { alphabet }
    }

    /// Decodes `input` into the front of `output` and returns the number of bytes written.
    ///
    /// On error the contents of `output` are unspecified.
    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let len = decoded_len(input.len())?;
        let output = output.as_mut().get_mut(..len).ok_or(Error::BufferTooSmall)?;
        let chunks = input.chunks_exact(ENCODED_CHUNK_LEN).zip(output.chunks_exact_mut(BYTE_CHUNK_LEN));
        for (chunk_index, (characters, bytes)) in chunks.enumerate() {
            let start = chunk_index * ENCODED_CHUNK_LEN;
            let mut value: u32 = 0;
            for (offset, &character) in characters.iter().enumerate() {
                let digit = self.alphabet.decode(character, start + offset)?;
                value = value
                    .checked_mul(BASE)
                    .and_then(|value| value.checked_add(digit as u32))
                    .ok_or(Error::Overflow { index: start })?;
            }
            bytes.copy_from_slice(&value.to_be_bytes());
        }
        Ok(len)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        let mut output = vec![0u8; decoded_len(input.len())?];
        self.decode_into(input, &mut output)?;
        Ok(output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}
