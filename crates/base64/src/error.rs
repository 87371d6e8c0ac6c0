//! Error types for encoding and decoding.

use thiserror::Error;

/// Errors produced while encoding.
///
/// Encoding itself cannot fail on any input; these only arise from the
/// destination buffer or the allocator.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The destination slice is shorter than the encoded output.
    #[error("encoder overflow (need {need}, but only have {have})")]
    Overflow { need: usize, have: usize },
    /// The output buffer could not be allocated.
    #[error("out of memory while allocating base64 output")]
    OutOfMemory,
}

/// Errors produced while decoding.
///
/// Offsets count bytes from the start of the encoded input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A byte that is neither an alphabet symbol nor `=`.
    #[error("invalid base64 symbol {symbol:#04x} at offset {at}")]
    InvalidSymbol { at: usize, symbol: u8 },
    /// `=` outside the last two positions of the final group.
    #[error("misplaced base64 padding at offset {at}")]
    MisplacedPadding { at: usize },
    /// The final group holds a single symbol, which cannot encode a byte.
    #[error("dangling base64 symbol at offset {at}")]
    DanglingSymbol { at: usize },
    /// The length is rejected by the padding policy, or a padded final group
    /// is shorter than 4 symbols.
    #[error("base64 input length {len} is not a multiple of 4")]
    InvalidLength { len: usize },
    /// The destination slice is shorter than the decoded output.
    #[error("decoder overflow (need {need}, but only have {have})")]
    Overflow { need: usize, have: usize },
    /// The output buffer could not be allocated.
    #[error("out of memory while allocating decoded output")]
    OutOfMemory,
}
