//! Group-wise decoder: 4 symbols in, up to 3 raw bytes out.

use crate::alphabet::{value_of, Sextet};
use crate::codec::DecodePadding;
use crate::DecodeError;

/// Upper bound on the decoded size of `encoded_len` symbols, `ceil(len * 3 / 4)`.
///
/// Exact for unpadded input. Padded input decodes to 1 or 2 bytes fewer.
///
/// # Example
///
/// ```
/// use base64_codec::decoded_len_estimate;
///
/// assert_eq!(decoded_len_estimate(4), 3);
/// assert_eq!(decoded_len_estimate(6), 5);
/// ```
pub fn decoded_len_estimate(encoded_len: usize) -> usize {
    encoded_len / 4 * 3 + (encoded_len % 4 * 3).div_ceil(4)
}

fn check_length(input: &[u8], padding: DecodePadding) -> Result<(), DecodeError> {
    if padding == DecodePadding::Required && !input.len().is_multiple_of(4) {
        return Err(DecodeError::InvalidLength { len: input.len() });
    }
    Ok(())
}

/// Decodes one group of 1 to 4 symbols starting at offset `at`.
///
/// Returns the output bytes and how many of them are meaningful.
fn decode_group(
    group: &[u8],
    at: usize,
    last: bool,
    input_len: usize,
) -> Result<([u8; 3], usize), DecodeError> {
    let mut sextets = [0u8; 4];
    let mut data = 0;
    let mut pad_at = None;

    for (k, &symbol) in group.iter().enumerate() {
        match value_of(symbol) {
            Sextet::Value(v) => {
                if let Some(pad_at) = pad_at {
                    return Err(DecodeError::MisplacedPadding { at: pad_at });
                }
                sextets[k] = v;
                data += 1;
            }
            Sextet::Padding => {
                // Only the third and fourth symbols of the final group may pad.
                if !last || k < 2 {
                    return Err(DecodeError::MisplacedPadding { at: at + k });
                }
                pad_at.get_or_insert(at + k);
            }
            Sextet::Invalid => {
                return Err(DecodeError::InvalidSymbol { at: at + k, symbol });
            }
        }
    }

    if pad_at.is_some() && group.len() < 4 {
        return Err(DecodeError::InvalidLength { len: input_len });
    }

    let [s0, s1, s2, s3] = sextets;
    let bytes = [(s0 << 2) | (s1 >> 4), (s1 << 4) | (s2 >> 2), (s2 << 6) | s3];
    match data {
        0 | 1 => Err(DecodeError::DanglingSymbol { at }),
        2 => Ok((bytes, 1)),
        3 => Ok((bytes, 2)),
        _ => Ok((bytes, 3)),
    }
}

/// Iterator over decoded groups. Stops after the first error.
struct DecodedGroups<'a> {
    input: &'a [u8],
    offset: usize,
}

impl<'a> DecodedGroups<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { input, offset: 0 }
    }
}

impl Iterator for DecodedGroups<'_> {
    type Item = Result<([u8; 3], usize), DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.input.len();
        if self.offset >= len {
            return None;
        }
        let at = self.offset;
        let end = (at + 4).min(len);
        let result = decode_group(&self.input[at..end], at, end == len, len);
        self.offset = if result.is_ok() { end } else { len };
        Some(result)
    }
}

pub(crate) fn decode_to_vec(
    input: &[u8],
    padding: DecodePadding,
) -> Result<Vec<u8>, DecodeError> {
    check_length(input, padding)?;

    let mut out = Vec::new();
    out.try_reserve_exact(decoded_len_estimate(input.len()))
        .map_err(|_| DecodeError::OutOfMemory)?;

    for group in DecodedGroups::new(input) {
        let (bytes, n) = group?;
        out.extend_from_slice(&bytes[..n]);
    }
    Ok(out)
}

pub(crate) fn decode_to_slice(
    input: &[u8],
    dest: &mut [u8],
    padding: DecodePadding,
) -> Result<usize, DecodeError> {
    check_length(input, padding)?;

    // Validate everything before touching `dest`.
    let mut need = 0;
    for group in DecodedGroups::new(input) {
        need += group?.1;
    }
    let have = dest.len();
    if have < need {
        return Err(DecodeError::Overflow { need, have });
    }

    let mut written = 0;
    for group in DecodedGroups::new(input) {
        let (bytes, n) = group?;
        dest[written..written + n].copy_from_slice(&bytes[..n]);
        written += n;
    }
    Ok(written)
}
