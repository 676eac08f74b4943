use crate::{Alphabet, Error, ALPHABET, BYTE_CHUNK_LEN, ENCODED_CHUNK_LEN};

/// Positional weights of the five digits of a chunk, most significant first.
const WEIGHTS: [u32; ENCODED_CHUNK_LEN] = [85 * 85 * 85 * 85, 85 * 85 * 85, 85 * 85, 85, 1];

/// Number of characters produced by encoding `len` bytes.
pub fn encoded_len(len: usize) -> Result<usize, Error> {
    if len % BYTE_CHUNK_LEN != 0 {
        return Err(Error::InvalidLength { divisor: BYTE_CHUNK_LEN });
    }
    Ok(len / BYTE_CHUNK_LEN * ENCODED_CHUNK_LEN)
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet<85, 93>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<85, 93>) -> Self {
        Self { alphabet }
    }

    /// Encodes `input` into the front of `output` and returns the number of characters written.
    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let len = encoded_len(input.len())?;
        let output = output.as_mut().get_mut(..len).ok_or(Error::BufferTooSmall)?;
        for (bytes, characters) in input.chunks_exact(BYTE_CHUNK_LEN).zip(output.chunks_exact_mut(ENCODED_CHUNK_LEN)) {
            let mut value = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            for (character, weight) in characters.iter_mut().zip(WEIGHTS) {
                *character = self.alphabet.encode((value / weight) as usize);
                value %= weight;
            }
        }
        Ok(len)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> Result<String, Error> {
        let input = input.as_ref();
        let mut output = vec![0u8; encoded_len(input.len())?];
        self.encode_into(input, &mut output)?;
        // Alphabet::new only admits printable ASCII.
        Ok(unsafe { String::from_utf8_unchecked(output) })
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

pub fn encode(input: impl AsRef<[u8]>) -> Result<String, Error> {
    Encoder::default().encode(input)
}
