/// Standard base64 alphabet, indexed by 6-bit value.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// [`ALPHABET`] as bytes, for const evaluation and byte-level lookups.
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding sentinel. Never a member of [`ALPHABET`].
pub const PAD: u8 = b'=';
