//! Fixed-width integer encoding used by the commitment preimage.
//!
//! Every integer in the preimage has a fixed width. Values that do not fit their
//! width are rejected, never truncated.
use crate::util::{Error, Result};
use byteorder::{BigEndian, ByteOrder, LittleEndian, WriteBytesExt};

/// Widest integer the codec handles, in bytes.
pub const MAX_WIDTH: usize = 8;

/// Encodes `value` into exactly `width` little-endian bytes.
///
/// # Errors
/// `Error::RangeError` if `value >= 2^(8 * width)`, `Error::BadArgument` if `width` is not in 1..=8.
///
/// # Examples
/// ```
/// use p2wpkh_sighash::util::encode_uint_le;
/// assert_eq!(encode_uint_le(1, 4).unwrap(), vec![1, 0, 0, 0]);
/// assert!(encode_uint_le(256, 1).is_err());
/// ```
#[inline]
pub fn encode_uint_le(value: u64, width: usize) -> Result<Vec<u8>> {
    encode_uint::<LittleEndian>(value, width)
}

/// Encodes `value` into exactly `width` big-endian bytes.
///
/// # Errors
/// Same as [`encode_uint_le`].
#[inline]
pub fn encode_uint_be(value: u64, width: usize) -> Result<Vec<u8>> {
    encode_uint::<BigEndian>(value, width)
}

/// Decodes a little-endian unsigned integer of 1 to 8 bytes.
///
/// # Errors
/// `Error::BadArgument` for an empty or over-wide slice.
#[inline]
pub fn decode_uint_le(bytes: &[u8]) -> Result<u64> {
    check_width(bytes.len())?;
    Ok(LittleEndian::read_uint(bytes, bytes.len()))
}

/// Decodes a big-endian unsigned integer of 1 to 8 bytes.
///
/// # Errors
/// `Error::BadArgument` for an empty or over-wide slice.
#[inline]
pub fn decode_uint_be(bytes: &[u8]) -> Result<u64> {
    check_width(bytes.len())?;
    Ok(BigEndian::read_uint(bytes, bytes.len()))
}

/// Returns true if `value` can be written in `width` bytes without loss.
#[must_use]
#[inline]
pub fn fits_in(value: u64, width: usize) -> bool {
    width >= MAX_WIDTH || value >> (8 * width) == 0
}

fn encode_uint<B: ByteOrder>(value: u64, width: usize) -> Result<Vec<u8>> {
    check_width(width)?;
    if !fits_in(value, width) {
        return Err(Error::RangeError(format!("{} does not fit in {} bytes", value, width)));
    }
    let mut v = Vec::with_capacity(width);
    v.write_uint::<B>(value, width)?;
    Ok(v)
}

fn check_width(width: usize) -> Result<()> {
    if width == 0 || width > MAX_WIDTH {
        return Err(Error::BadArgument(format!("Unsupported integer width: {}", width)));
    }
    Ok(())
}
