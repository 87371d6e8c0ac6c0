//! Padding policy and the [`Codec`] value that applies it.

use crate::decode::{decode_to_slice, decode_to_vec};
use crate::encode::{encode_to_slice, encode_to_string, try_encode_to_string};
use crate::{DecodeError, EncodeError};

/// How strictly the decoder treats padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DecodePadding {
    /// Padded and unpadded input are both accepted.
    #[default]
    Optional,
    /// Input length must be a multiple of 4, so short final groups must be padded.
    Required,
}

/// Codec configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    /// Whether encoding appends `=` so the output length is a multiple of 4.
    pub emit_padding: bool,
    /// Padding policy for decoding.
    pub decode_padding: DecodePadding,
}

impl Config {
    /// Padded output, padding optional on input.
    pub const STANDARD: Config = Config {
        emit_padding: true,
        decode_padding: DecodePadding::Optional,
    };

    /// Unpadded output, padding optional on input.
    pub const UNPADDED: Config = Config {
        emit_padding: false,
        decode_padding: DecodePadding::Optional,
    };

    /// Padded output, padding required on input.
    pub const STRICT: Config = Config {
        emit_padding: true,
        decode_padding: DecodePadding::Required,
    };

    /// Returns this config with `emit_padding` replaced.
    pub const fn with_emit_padding(mut self, emit_padding: bool) -> Self {
        self.emit_padding = emit_padding;
        self
    }

    /// Returns this config with `decode_padding` replaced.
    pub const fn with_decode_padding(mut self, decode_padding: DecodePadding) -> Self {
        self.decode_padding = decode_padding;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::STANDARD
    }
}

/// A base64 encoder/decoder over the standard alphabet.
///
/// `Codec` is a small `Copy` value; share it freely across threads.
///
/// # Example
///
/// ```
/// use base64_codec::{Codec, Config, DecodeError};
///
/// let codec = Codec::new(Config::STRICT);
/// assert_eq!(codec.encode(b"Ma"), "TWE=");
/// assert_eq!(codec.decode("TWE=").unwrap(), b"Ma");
/// assert_eq!(codec.decode("TWE"), Err(DecodeError::InvalidLength { len: 3 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Codec {
    config: Config,
}

impl Codec {
    /// Codec for [`Config::STANDARD`].
    pub const STANDARD: Codec = Codec::new(Config::STANDARD);
    /// Codec for [`Config::UNPADDED`].
    pub const UNPADDED: Codec = Codec::new(Config::UNPADDED);
    /// Codec for [`Config::STRICT`].
    pub const STRICT: Codec = Codec::new(Config::STRICT);

    /// Creates a codec with the given configuration.
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the configuration this codec was built with.
    pub const fn config(&self) -> Config {
        self.config
    }

    /// Encodes `raw`. Never fails on input content.
    pub fn encode(&self, raw: &[u8]) -> String {
        encode_to_string(raw, self.config.emit_padding)
    }

    /// Like [`Codec::encode`], but reports allocation failure instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::OutOfMemory`] if the output cannot be allocated.
    pub fn try_encode(&self, raw: &[u8]) -> Result<String, EncodeError> {
        try_encode_to_string(raw, self.config.emit_padding)
    }

    /// Encodes `raw` into `dest`, returning the number of symbols written.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Overflow`] if `dest` is shorter than
    /// [`encoded_len`](crate::encoded_len). `dest` is left untouched then.
    ///
    /// # Example
    ///
    /// ```
    /// use base64_codec::Codec;
    ///
    /// let mut dest = [0u8; 8];
    /// let len = Codec::STANDARD.encode_into(b"hello", &mut dest).unwrap();
    /// assert_eq!(&dest[..len], b"aGVsbG8=");
    /// ```
    pub fn encode_into(&self, raw: &[u8], dest: &mut [u8]) -> Result<usize, EncodeError> {
        encode_to_slice(raw, dest, self.config.emit_padding)
    }

    /// Decodes `encoded` into a freshly allocated buffer.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] for symbols outside the alphabet, misplaced
    /// padding, a dangling final symbol, a length the padding policy rejects,
    /// or allocation failure.
    pub fn decode<T: AsRef<[u8]>>(&self, encoded: T) -> Result<Vec<u8>, DecodeError> {
        let encoded = encoded.as_ref();
        decode_to_vec(encoded, self.config.decode_padding)
            .inspect_err(|err| log_rejection(encoded, err))
    }

    /// Decodes `encoded` into `dest`, returning the number of bytes written.
    ///
    /// # Errors
    ///
    /// As [`Codec::decode`], plus [`DecodeError::Overflow`] when `dest` cannot
    /// hold the decoded bytes. The whole input is validated first, so a
    /// malformed input reports its own error rather than `Overflow`, and
    /// `dest` is left untouched on any error.
    ///
    /// # Example
    ///
    /// ```
    /// use base64_codec::Codec;
    ///
    /// let mut dest = [0u8; 3];
    /// let len = Codec::STANDARD.decode_into("TWFu", &mut dest).unwrap();
    /// assert_eq!(&dest[..len], b"Man");
    /// ```
    pub fn decode_into<T: AsRef<[u8]>>(
        &self,
        encoded: T,
        dest: &mut [u8],
    ) -> Result<usize, DecodeError> {
        let encoded = encoded.as_ref();
        decode_to_slice(encoded, dest, self.config.decode_padding)
            .inspect_err(|err| log_rejection(encoded, err))
    }
}

fn log_rejection(encoded: &[u8], err: &DecodeError) {
    log::debug!("rejected base64 input of {} bytes: {err}", encoded.len());
}
