//! Base64 encoding and decoding over the standard alphabet.
//!
//! This crate provides:
//! - Padded and unpadded encoding
//! - Decoding with an explicit padding policy and positioned errors
//! - Encoding/decoding into caller-supplied buffers
//!
//! # Example
//!
//! ```
//! use base64_codec::{decode, encode, encode_unpadded};
//!
//! let data = b"hello world";
//! let encoded = encode(data);
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//! assert_eq!(decode(&encoded).unwrap(), data);
//!
//! let bare = encode_unpadded(data);
//! assert_eq!(bare, "aGVsbG8gd29ybGQ");
//! assert_eq!(decode(&bare).unwrap(), data);
//! ```

mod alphabet;
mod codec;
mod constants;
mod decode;
mod encode;
mod error;

pub use alphabet::{symbol_of, value_of, Sextet};
pub use constants::{ALPHABET, ALPHABET_BYTES, PAD};
pub use codec::{Codec, Config, DecodePadding};
pub use decode::decoded_len_estimate;
pub use encode::encoded_len;
pub use error::{DecodeError, EncodeError};

/// Encodes `raw` with padding.
///
/// # Example
///
/// ```
/// use base64_codec::encode;
///
/// assert_eq!(encode(b"M"), "TQ==");
/// assert_eq!(encode(b"Man"), "TWFu");
/// ```
pub fn encode(raw: &[u8]) -> String {
    Codec::STANDARD.encode(raw)
}

/// Encodes `raw` without trailing `=` sentinels.
///
/// # Example
///
/// ```
/// use base64_codec::encode_unpadded;
///
/// assert_eq!(encode_unpadded(b"M"), "TQ");
/// ```
pub fn encode_unpadded(raw: &[u8]) -> String {
    Codec::UNPADDED.encode(raw)
}

/// Decodes padded or unpadded input.
///
/// # Errors
///
/// See [`Codec::decode`].
///
/// # Example
///
/// ```
/// use base64_codec::{decode, DecodeError};
///
/// assert_eq!(decode("TQ==").unwrap(), b"M");
/// assert_eq!(decode("TQ").unwrap(), b"M");
/// assert_eq!(decode("T!=="), Err(DecodeError::InvalidSymbol { at: 1, symbol: b'!' }));
/// ```
pub fn decode<T: AsRef<[u8]>>(encoded: T) -> Result<Vec<u8>, DecodeError> {
    Codec::STANDARD.decode(encoded)
}
