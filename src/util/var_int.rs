//! Variable length integer (compact size) ser/des.

use byteorder::{LittleEndian, WriteBytesExt};
use std::io;
use std::io::Write;

/// Returns the number of bytes required for the varint.
#[must_use]
#[inline]
pub fn size(n: u64) -> usize {
    if n <= 252 {
        1
    } else if n <= 0xffff {
        3
    } else if n <= 0xffffffff {
        5
    } else {
        9
    }
}

/// Writes the var int to bytes.
#[inline]
pub fn write(n: u64, writer: &mut dyn Write) -> io::Result<()> {
    if n <= 252 {
        writer.write_u8(n as u8)
    } else if n <= 0xffff {
        writer.write_u8(0xfd)?;
        writer.write_u16::<LittleEndian>(n as u16)
    } else if n <= 0xffffffff {
        writer.write_u8(0xfe)?;
        writer.write_u32::<LittleEndian>(n as u32)
    } else {
        writer.write_u8(0xff)?;
        writer.write_u64::<LittleEndian>(n)
    }
}
