//! Z85 encoding as specified in <https://rfc.zeromq.org/spec/32>.
//!
//! Every 4 bytes of input become 5 printable characters. Input lengths must be multiples of the
//! chunk size; padding is left to the caller.
//!
//! ```
//! let encoded = z85::encode([0xab, 0xcd, 0xef, 0xaa, 0x55, 0x33, 0x11, 0x00])?;
//! assert_eq!(encoded, "TiHakrwLi!");
//!
//! let decoded = z85::decode("W!a&T%e#R0")?;
//! assert_eq!(decoded, [0xb6, 0xf4, 0x79, 0x67, 0xff, 0xaf, 0x05, 0xf5]);
//! # Ok::<(), z85::Error>(())
//! ```
//!
//! Errors carry enough detail to point at the offending input:
//!
//! ```
//! let error = z85::decode("123~5").unwrap_err();
//! assert!(z85::is_invalid_byte(&error));
//! assert_eq!(error, z85::Error::InvalidByte { index: 3, character: b'~' });
//! ```

pub mod alphabet;
pub mod decode;
pub mod encode;
pub mod error;

pub use alphabet::Alphabet;
pub use decode::{decode, decode_into, decoded_len, Decoder};
pub use encode::{encode, encode_into, encoded_len, Encoder};
pub use error::{is_invalid_byte, is_invalid_length, Error};

/// Number of bytes in an unencoded chunk.
pub const BYTE_CHUNK_LEN: usize = 4;

/// Number of characters in an encoded chunk.
pub const ENCODED_CHUNK_LEN: usize = 5;

pub const ALPHABET: Alphabet<85, 93> =
    match Alphabet::new(b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#") {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    };
