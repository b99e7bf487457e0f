//! Public key hash (SHA256 then RIPEMD160) committed to by a P2WPKH program.

use crate::util::{Error, Result};
use bitcoin_hashes::{Hash as _, hash160 as bh_hash160};
use std::fmt;

/// 20-byte public key hash.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash160(pub [u8; 20]);

impl Hash160 {
    /// Size of the hash in bytes.
    pub const SIZE: usize = 20;

    /// Copies exactly 20 bytes into a hash.
    ///
    /// # Errors
    /// `Error::InvalidLength` for any other length.
    pub fn from_slice(bytes: &[u8]) -> Result<Hash160> {
        let arr: [u8; 20] = bytes.try_into().map_err(|_| {
            Error::InvalidLength(format!("Expected {} bytes, got {}", Self::SIZE, bytes.len()))
        })?;
        Ok(Hash160(arr))
    }
}

/// Computes Hash160 (RIPEMD160(SHA256(data))).
#[must_use]
#[inline]
pub fn hash160(data: &[u8]) -> Hash160 {
    Hash160(bh_hash160::Hash::hash(data).to_byte_array())
}

impl From<[u8; 20]> for Hash160 {
    fn from(bytes: [u8; 20]) -> Self {
        Hash160(bytes)
    }
}

impl fmt::Debug for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
