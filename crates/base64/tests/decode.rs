//! Tests for base64 decoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use base64_codec::{decode, encode, Codec, DecodeError};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = STANDARD.encode(&blob);
        assert_eq!(decode(&encoded).unwrap(), blob);
        assert_eq!(Codec::STRICT.decode(&encoded).unwrap(), blob);
    }
}

#[test]
fn handles_invalid_values() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = encode(&blob);
        let invalid = format!("{}!!!!", encoded);
        let at = if encoded.ends_with('=') {
            encoded.find('=').unwrap()
        } else {
            encoded.len()
        };
        let result = decode(&invalid);
        match result {
            Err(DecodeError::MisplacedPadding { at: found }) => assert_eq!(found, at),
            Err(DecodeError::InvalidSymbol { at: found, symbol }) => {
                assert_eq!(found, at);
                assert_eq!(symbol, b'!');
            }
            other => panic!("unexpected result {other:?} for {invalid:?}"),
        }
    }
}

#[test]
fn empty_input() {
    assert_eq!(decode("").unwrap(), b"");
}

#[test]
fn man() {
    assert_eq!(decode("TWFu").unwrap(), b"Man");
    assert_eq!(decode("TWE=").unwrap(), b"Ma");
    assert_eq!(decode("TQ==").unwrap(), b"M");
}

#[test]
fn result_size() {
    let mut dest = [0u8; 3];
    assert_eq!(Codec::STANDARD.decode_into("TWFu", &mut dest), Ok(3));
    assert_eq!(&dest, b"Man");
    assert_eq!(Codec::STANDARD.decode_into("TQ==", &mut dest), Ok(1));
    assert_eq!(dest[0], b'M');
}

#[test]
fn hello_world() {
    assert_eq!(decode("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
    assert_eq!(decode(b"aGVsbG8gd29ybGQ").unwrap(), b"hello world");
}

#[test]
fn rejects_padding_mid_stream() {
    assert_eq!(decode("Zg==Zm8="), Err(DecodeError::MisplacedPadding { at: 2 }));
    assert_eq!(decode("Zm=v"), Err(DecodeError::MisplacedPadding { at: 2 }));
}

#[test]
fn rejects_lone_trailing_symbol() {
    assert_eq!(decode("Zm9vY"), Err(DecodeError::DanglingSymbol { at: 4 }));
    assert_eq!(
        Codec::STRICT.decode("Zm9vY"),
        Err(DecodeError::InvalidLength { len: 5 })
    );
}

#[test]
fn rejects_url_safe_symbols() {
    assert_eq!(decode("-_8="), Err(DecodeError::InvalidSymbol { at: 0, symbol: b'-' }));
}

#[test]
fn decode_into_short_buffer() {
    let mut dest = [0u8; 5];
    assert_eq!(
        Codec::STANDARD.decode_into("Zm9vYmFy", &mut dest),
        Err(DecodeError::Overflow { need: 6, have: 5 })
    );
    assert_eq!(Codec::STANDARD.decode_into("Zm9vYmE=", &mut dest), Ok(5));
    assert_eq!(&dest, b"fooba");
}

#[test]
fn decode_into_agrees_with_decode_on_malformed_input() {
    assert_eq!(
        decode("TWFu!!!!"),
        Err(DecodeError::InvalidSymbol { at: 4, symbol: b'!' })
    );
    let mut short = [0u8; 3];
    assert_eq!(
        Codec::STANDARD.decode_into("TWFu!!!!", &mut short),
        Err(DecodeError::InvalidSymbol { at: 4, symbol: b'!' })
    );

    let mut dest = [0xAA; 6];
    assert_eq!(
        Codec::STANDARD.decode_into("TWFu!!!!", &mut dest),
        Err(DecodeError::InvalidSymbol { at: 4, symbol: b'!' })
    );
    assert_eq!(dest, [0xAA; 6]);
}

#[test]
fn error_messages() {
    assert_eq!(
        DecodeError::InvalidSymbol { at: 3, symbol: b'!' }.to_string(),
        "invalid base64 symbol 0x21 at offset 3"
    );
    assert_eq!(
        DecodeError::InvalidLength { len: 5 }.to_string(),
        "base64 input length 5 is not a multiple of 4"
    );
}
