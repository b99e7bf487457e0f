//! 256-bit hash used for txids and commitment digests.
//!
//! Txids are stored in wire order and displayed reversed.
use crate::util::{Error, Result, Serializable};
use bitcoin_hashes::{Hash as _, sha256d as bh_sha256d};
use std::fmt;
use std::io;
use std::io::{Read, Write};

/// 256-bit hash for transaction ids and digests.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// Size of the hash in bytes.
    pub const SIZE: usize = 32;

    /// Converts the hash into a hex string in display (reversed) order.
    #[must_use]
    #[inline]
    pub fn encode(&self) -> String {
        let mut r = self.0;
        r.reverse();
        hex::encode(r)
    }

    /// Converts a display-order string of 64 hex characters into a hash.
    ///
    /// # Errors
    /// `Error::InvalidLength` unless there are exactly 64 hex digits,
    /// `Error::FromHexError` for non-hex characters.
    pub fn decode(s: &str) -> Result<Hash256> {
        if s.len() != Self::SIZE * 2 {
            return Err(Error::InvalidLength(format!(
                "Expected {} hex digits, got {}",
                Self::SIZE * 2,
                s.len()
            )));
        }
        let mut hash = Self::from_slice(&hex::decode(s)?)?;
        hash.0.reverse();
        Ok(hash)
    }

    /// Copies exactly 32 bytes into a hash, without reordering.
    ///
    /// # Errors
    /// `Error::InvalidLength` if `bytes` is not 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Hash256> {
        let arr: [u8; 32] = bytes.try_into().map_err(|_| {
            Error::InvalidLength(format!("Expected {} bytes, got {}", Self::SIZE, bytes.len()))
        })?;
        Ok(Hash256(arr))
    }
}

impl Serializable<Hash256> for Hash256 {
    fn read(reader: &mut dyn Read) -> Result<Hash256> {
        let mut bytes = [0; 32];
        reader.read_exact(&mut bytes)?;
        Ok(Hash256(bytes))
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_all(&self.0)
    }
}

impl AsRef<[u8]> for Hash256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Hashes a data array twice using SHA256.
#[must_use]
#[inline]
pub fn sha256d(data: &[u8]) -> Hash256 {
    Hash256(bh_sha256d::Hash::hash(data).to_byte_array())
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn sha256d_test() {
        let x = hex!("0123456789abcdef");
        assert_eq!(
            hex::encode(sha256d(&x).0),
            "137ad663f79da06e282ed0abbec4d70523ced5ff8e39d5c2e5641d978c5925aa"
        );
        assert_eq!(
            hex::encode(sha256d(&[]).0),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn sha256d_sub_fields() {
        // hashSequence for a single final input
        assert_eq!(
            sha256d(&hex!("ffffffff")).0,
            hex!("3bb13029ce7b1f559ef5e747fcac439f1455a2ec7c5f09b72290795e70665044")
        );
    }

    #[test]
    fn sha256d_deterministic() {
        let data = b"commitment";
        assert_eq!(sha256d(data), sha256d(data));
        assert_eq!(sha256d(data).0.len(), 32);
        assert_ne!(sha256d(data), sha256d(b"commitmenT"));
    }

    #[test]
    fn hash_decode() {
        // Valid
        let s1 = "0000000000000000000000000000000000000000000000000000000000000000";
        let s2 = "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";
        let s3 = "3b7dc918e5671037effad7848727da3d3bf302b05f5ded9bec89449460473bbb";
        assert!(Hash256::decode(s1).is_ok());
        assert!(Hash256::decode(s2).is_ok());
        assert_eq!(Hash256::decode(s3).unwrap().0[0], 0xbb);
        // Invalid
        let s1 = "3b7dc918e5671037effad7848727da3d3bf302b05f5ded9bec89449460473bb";
        let s2 = "00000000000000000000000000000000000000000000000000000000000000000";
        let s3 = "000000000000000000000000000000000000000000000000000000000000000g";
        assert!(matches!(Hash256::decode(s1), Err(Error::InvalidLength(_))));
        assert!(matches!(Hash256::decode(s2), Err(Error::InvalidLength(_))));
        assert!(matches!(Hash256::decode(s3), Err(Error::FromHexError(_))));
    }

    #[test]
    fn from_slice() {
        assert!(Hash256::from_slice(&[7; 32]).is_ok());
        assert!(matches!(Hash256::from_slice(&[7; 31]), Err(Error::InvalidLength(_))));
        assert!(matches!(Hash256::from_slice(&[7; 33]), Err(Error::InvalidLength(_))));
    }

    #[test]
    fn hash_decode_write_read_encode() {
        let s1 = "abcdef0000112233445566778899abcdef000011223344556677889912345678";
        let h1 = Hash256::decode(s1).unwrap();
        let mut v = Vec::new();
        h1.write(&mut v).unwrap();
        let h2 = Hash256::read(&mut Cursor::new(v)).unwrap();
        assert_eq!(s1, h2.encode());
    }
}
