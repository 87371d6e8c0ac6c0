//! Group-wise encoder: 3 raw bytes in, 4 symbols out.

use crate::alphabet::symbol_of;
use crate::constants::PAD;
use crate::EncodeError;

/// Returns the exact encoded length of `raw_len` bytes.
///
/// With padding the result is always a multiple of 4. Returns `None` if the
/// length does not fit in a `usize`.
///
/// # Example
///
/// ```
/// use base64_codec::encoded_len;
///
/// assert_eq!(encoded_len(1, true), Some(4));
/// assert_eq!(encoded_len(1, false), Some(2));
/// assert_eq!(encoded_len(6, false), Some(8));
/// ```
pub fn encoded_len(raw_len: usize, padding: bool) -> Option<usize> {
    let tail = match (raw_len % 3, padding) {
        (0, _) => 0,
        (_, true) => 4,
        (extra, false) => extra + 1,
    };
    (raw_len / 3).checked_mul(4)?.checked_add(tail)
}

/// Feeds the symbols for `raw` to `emit`, in order.
fn encode_groups(raw: &[u8], padding: bool, mut emit: impl FnMut(u8)) {
    let mut groups = raw.chunks_exact(3);
    for group in &mut groups {
        let (o1, o2, o3) = (group[0], group[1], group[2]);
        emit(symbol_of(o1 >> 2));
        emit(symbol_of(((o1 & 0b11) << 4) | (o2 >> 4)));
        emit(symbol_of(((o2 & 0b1111) << 2) | (o3 >> 6)));
        emit(symbol_of(o3 & 0b11_1111));
    }

    match *groups.remainder() {
        [o1] => {
            emit(symbol_of(o1 >> 2));
            emit(symbol_of((o1 & 0b11) << 4));
            if padding {
                emit(PAD);
                emit(PAD);
            }
        }
        [o1, o2] => {
            emit(symbol_of(o1 >> 2));
            emit(symbol_of(((o1 & 0b11) << 4) | (o2 >> 4)));
            emit(symbol_of((o2 & 0b1111) << 2));
            if padding {
                emit(PAD);
            }
        }
        _ => {}
    }
}

pub(crate) fn encode_to_string(raw: &[u8], padding: bool) -> String {
    let mut out = String::with_capacity(encoded_len(raw.len(), padding).unwrap_or(0));
    encode_groups(raw, padding, |symbol| out.push(char::from(symbol)));
    out
}

pub(crate) fn try_encode_to_string(raw: &[u8], padding: bool) -> Result<String, EncodeError> {
    let len = encoded_len(raw.len(), padding).ok_or(EncodeError::OutOfMemory)?;
    let mut out = String::new();
    out.try_reserve_exact(len).map_err(|_| EncodeError::OutOfMemory)?;
    encode_groups(raw, padding, |symbol| out.push(char::from(symbol)));
    Ok(out)
}

pub(crate) fn encode_to_slice(
    raw: &[u8],
    dest: &mut [u8],
    padding: bool,
) -> Result<usize, EncodeError> {
    let have = dest.len();
    let need = encoded_len(raw.len(), padding).ok_or(EncodeError::Overflow {
        need: usize::MAX,
        have,
    })?;
    if have < need {
        return Err(EncodeError::Overflow { need, have });
    }

    let mut written = 0;
    encode_groups(raw, padding, |symbol| {
        dest[written] = symbol;
        written += 1;
    });
    Ok(written)
}
