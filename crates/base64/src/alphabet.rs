//! The 64-symbol table and its reverse lookup.

use crate::constants::{ALPHABET_BYTES, PAD};

const INVALID: u8 = 0xFF;
const PADDING: u8 = 0xFE;

/// Reverse table: symbol byte -> 6-bit value, or one of the two markers above.
static DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table[PAD as usize] = PADDING;
    table
};

/// Outcome of looking up one encoded symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sextet {
    /// An alphabet member and its 6-bit value.
    Value(u8),
    /// The `=` sentinel.
    Padding,
    /// Anything else.
    Invalid,
}

/// Maps a 6-bit value to its symbol. Bits above the low six are ignored.
///
/// # Example
///
/// ```
/// use base64_codec::symbol_of;
///
/// assert_eq!(symbol_of(0), b'A');
/// assert_eq!(symbol_of(63), b'/');
/// ```
#[inline]
pub fn symbol_of(value: u8) -> u8 {
    ALPHABET_BYTES[(value & 0b11_1111) as usize]
}

/// Classifies an encoded symbol.
///
/// # Example
///
/// ```
/// use base64_codec::{value_of, Sextet};
///
/// assert_eq!(value_of(b'T'), Sextet::Value(19));
/// assert_eq!(value_of(b'='), Sextet::Padding);
/// assert_eq!(value_of(b'-'), Sextet::Invalid);
/// ```
#[inline]
pub fn value_of(symbol: u8) -> Sextet {
    match DECODE_TABLE[symbol as usize] {
        INVALID => Sextet::Invalid,
        PADDING => Sextet::Padding,
        v => Sextet::Value(v),
    }
}
