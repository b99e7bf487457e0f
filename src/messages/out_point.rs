//! OutPoint, the reference to a previous transaction output being spent.

use crate::util::{Error, Hash256, Result, Serializable};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io;
use std::io::{Read, Write};

/// Reference to a transaction output.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub struct OutPoint {
    /// Txid of the referenced transaction, in wire order.
    pub hash: Hash256,
    /// Index of the output in the transaction, zero-indexed.
    pub index: u32,
}

impl OutPoint {
    /// Size of the out point in bytes (32 + 4 = 36).
    pub const SIZE: usize = 36;

    /// Builds an out point from a txid in natural (display) byte order.
    ///
    /// The txid is reversed into wire order here and nowhere else.
    ///
    /// # Errors
    /// `Error::InvalidLength` if `txid` is not 32 bytes.
    pub fn from_txid(txid: &[u8], index: u32) -> Result<OutPoint> {
        let mut hash = Hash256::from_slice(txid)
            .map_err(|_| Error::InvalidLength(format!("txid is {} bytes, expected 32", txid.len())))?;
        hash.0.reverse();
        Ok(OutPoint { hash, index })
    }

    /// Builds an out point from a txid as shown by explorers (64 hex digits).
    ///
    /// # Errors
    /// `Error::InvalidLength` for the wrong number of digits, `Error::FromHexError` for bad digits.
    pub fn from_txid_hex(txid: &str, index: u32) -> Result<OutPoint> {
        Ok(OutPoint {
            hash: Hash256::decode(txid)?,
            index,
        })
    }

    /// Parses the 36-byte wire form.
    ///
    /// # Errors
    /// `Error::InvalidLength` if `bytes` is not 36 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<OutPoint> {
        if bytes.len() != Self::SIZE {
            return Err(Error::InvalidLength(format!(
                "outpoint is {} bytes, expected {}",
                bytes.len(),
                Self::SIZE
            )));
        }
        OutPoint::read(&mut &bytes[..])
    }

    /// Returns the 36-byte wire form: txid (wire order) then the little-endian index.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 36] {
        let mut bytes = [0u8; 36];
        bytes[..32].copy_from_slice(&self.hash.0);
        bytes[32..].copy_from_slice(&self.index.to_le_bytes());
        bytes
    }

    /// Returns the size of the out point in bytes.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        Self::SIZE
    }
}

/// Serializes a previous output reference from a natural-order txid and an output index.
///
/// # Errors
/// `Error::InvalidLength` if `txid` is not 32 bytes. The index is not checked.
///
/// # Examples
/// ```
/// use p2wpkh_sighash::messages::build_outpoint;
/// let outpoint = build_outpoint(&[0x11; 32], 1).unwrap();
/// assert_eq!(&outpoint[32..], &[1, 0, 0, 0]);
/// ```
pub fn build_outpoint(txid: &[u8], output_index: u32) -> Result<[u8; 36]> {
    Ok(OutPoint::from_txid(txid, output_index)?.to_bytes())
}

impl Serializable<OutPoint> for OutPoint {
    fn read(reader: &mut dyn Read) -> Result<OutPoint> {
        let hash = Hash256::read(reader)?;
        let index = reader.read_u32::<LittleEndian>()?;
        Ok(OutPoint { hash, index })
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        self.hash.write(writer)?;
        writer.write_u32::<LittleEndian>(self.index)
    }
}
