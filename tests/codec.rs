use rand::{Rng, RngCore};
use std::thread;
use z85::{Decoder, Encoder, Error, ALPHABET};

const ITERATIONS: usize = 100;
const MAX_CHUNKS: usize = 32;

fn random_bytes(rng: &mut impl RngCore) -> Vec<u8> {
    let chunks = rng.gen_range(1..=MAX_CHUNKS);
    let mut bytes = vec![0u8; chunks * z85::BYTE_CHUNK_LEN];
    rng.fill_bytes(&mut bytes);
    bytes
}

#[test]
fn round_trip() {
    let mut rng = rand::thread_rng();
    for _ in 0..ITERATIONS {
        let bytes = random_bytes(&mut rng);
        let encoded = z85::encode(&bytes).unwrap();
        assert_eq!(encoded.len(), bytes.len() / 4 * 5);
        assert!(encoded.bytes().all(|character| ALPHABET.characters().contains(&character)));
        assert_eq!(z85::decode(&encoded), Ok(bytes));
    }
}

#[test]
fn round_trip_into_reused_buffers() {
    let mut rng = rand::thread_rng();
    let mut encoded = vec![0u8; MAX_CHUNKS * z85::ENCODED_CHUNK_LEN];
    let mut decoded = vec![0u8; MAX_CHUNKS * z85::BYTE_CHUNK_LEN];
    for _ in 0..ITERATIONS {
        let bytes = random_bytes(&mut rng);
        let encoded_len = z85::encode_into(&bytes, &mut encoded).unwrap();
        let decoded_len = z85::decode_into(&encoded[..encoded_len], &mut decoded).unwrap();
        assert_eq!(&decoded[..decoded_len], &bytes[..]);
    }
}

#[test]
fn length_laws() {
    for len in 0..=20 {
        let encoded = z85::encode(vec![0x5a; len]);
        assert_eq!(encoded.is_err(), len % 4 != 0);
        if let Err(error) = encoded {
            assert_eq!(error, Error::InvalidLength { divisor: 4 });
            assert!(z85::is_invalid_length(&error));
        }

        let decoded = z85::decode("0".repeat(len));
        assert_eq!(decoded.is_err(), len % 5 != 0);
        if let Err(error) = decoded {
            assert_eq!(error, Error::InvalidLength { divisor: 5 });
            assert!(!z85::is_invalid_byte(&error));
        }
    }
}

#[test]
fn empty() {
    assert_eq!(z85::encode([0u8; 0]), Ok(String::new()));
    assert_eq!(z85::decode(""), Ok(Vec::new()));
}

#[test]
fn invalid_byte_positions() {
    let valid = "HelloWorld".repeat(3);
    for index in 0..valid.len() {
        for character in ['~', ',', '"', ' '] {
            let mut input = valid.clone();
            input.replace_range(index..=index, &character.to_string());
            assert_eq!(z85::decode(&input), Err(Error::InvalidByte { index, character: character as u8 }));
        }
    }
}

#[test]
fn every_chunk_value_boundary() {
    for value in [0u32, 1, 84, 85, 85 * 85 - 1, 0x7fff_ffff, 0x8000_0000, u32::MAX - 1, u32::MAX] {
        let encoded = z85::encode(value.to_be_bytes()).unwrap();
        assert_eq!(z85::decode(&encoded), Ok(value.to_be_bytes().to_vec()));
    }
}

#[test]
fn custom_encoder_and_decoder() {
    let encoder = Encoder::new(&ALPHABET);
    let decoder = Decoder::new(&ALPHABET);
    let encoded = encoder.encode([0x86, 0x4f, 0xd2, 0x6f, 0xb5, 0x59, 0xf7, 0x5b]).unwrap();
    assert_eq!(encoded, "HelloWorld");
    assert_eq!(decoder.decode(encoded), Ok(vec![0x86, 0x4f, 0xd2, 0x6f, 0xb5, 0x59, 0xf7, 0x5b]));
}

#[test]
fn concurrent_calls() {
    let handles: Vec<_> = (0..8u32)
        .map(|seed| {
            thread::spawn(move || {
                for value in (seed..seed + 1000).map(|value| value.wrapping_mul(2_654_435_761)) {
                    let encoded = Encoder::default().encode(value.to_be_bytes()).unwrap();
                    assert_eq!(Decoder::default().decode(encoded), Ok(value.to_be_bytes().to_vec()));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
