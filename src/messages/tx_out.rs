//! Transaction output and its serialized form as committed to by `hashOutputs`.

use crate::script::Script;
use crate::util::{Error, Result, Serializable, encode_uint_le};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io;
use std::io::{Read, Write};

/// Maximum lock script length describable by the single length byte.
pub const MAX_LOCK_SCRIPT_LEN: usize = 255;

/// Transaction output.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct TxOut {
    /// Number of satoshis to spend.
    pub satoshis: u64,
    /// Public key script to claim the output.
    pub lock_script: Script,
}

impl TxOut {
    /// Creates an output, rejecting scripts the serializer cannot length-prefix.
    ///
    /// # Errors
    /// `Error::ScriptTooLong` if the script is over 255 bytes.
    pub fn new(lock_script: Script, satoshis: u64) -> Result<TxOut> {
        let tx_out = TxOut {
            satoshis,
            lock_script,
        };
        tx_out.validate()?;
        Ok(tx_out)
    }

    /// Returns the size of the serialized output in bytes.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        8 + 1 + self.lock_script.len()
    }

    /// Checks that the lock script fits the single length byte.
    ///
    /// # Errors
    /// `Error::ScriptTooLong` if the script is over 255 bytes.
    pub fn validate(&self) -> Result<()> {
        if self.lock_script.len() > MAX_LOCK_SCRIPT_LEN {
            return Err(Error::ScriptTooLong(self.lock_script.len()));
        }
        Ok(())
    }

    /// Serializes the output: value (8 bytes LE), script length (1 byte), script.
    ///
    /// # Errors
    /// `Error::ScriptTooLong` if the script is over 255 bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.validate()?;
        let mut v = Vec::with_capacity(self.size());
        self.write(&mut v)?;
        Ok(v)
    }
}

/// Serializes one transaction output from its lock script and value.
///
/// # Errors
/// `Error::ScriptTooLong` if `script` is over 255 bytes. Nothing is truncated.
///
/// # Examples
/// ```
/// use p2wpkh_sighash::messages::serialize_output;
/// let out = serialize_output(&[0x51], 1).unwrap();
/// assert_eq!(out, vec![1, 0, 0, 0, 0, 0, 0, 0, 1, 0x51]);
/// ```
pub fn serialize_output(script: &[u8], value: u64) -> Result<Vec<u8>> {
    if script.len() > MAX_LOCK_SCRIPT_LEN {
        return Err(Error::ScriptTooLong(script.len()));
    }
    let mut v = encode_uint_le(value, 8)?;
    v.extend(encode_uint_le(script.len() as u64, 1)?);
    v.extend_from_slice(script);
    Ok(v)
}

impl Serializable<TxOut> for TxOut {
    fn read(reader: &mut dyn Read) -> Result<TxOut> {
        let satoshis = reader.read_u64::<LittleEndian>()?;
        let script_len = reader.read_u8()? as usize;
        let mut lock_script = vec![0; script_len];
        reader.read_exact(&mut lock_script)?;
        Ok(TxOut {
            satoshis,
            lock_script: Script(lock_script),
        })
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        let script_len = u8::try_from(self.lock_script.len())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "lock script over 255 bytes"))?;
        writer.write_u64::<LittleEndian>(self.satoshis)?;
        writer.write_u8(script_len)?;
        writer.write_all(&self.lock_script.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn serialize_p2pkh_output() -> Result<()> {
        let script = hex!("76a9146085312a9c500ff9cc35b571b0a1e5efb7fb9f1688ac");
        assert_eq!(
            serialize_output(&script, 100000)?,
            hex!("a0860100000000001976a9146085312a9c500ff9cc35b571b0a1e5efb7fb9f1688ac")
        );
        Ok(())
    }

    #[test]
    fn serialize_p2wpkh_output() -> Result<()> {
        let script = hex!("0014ad4cc1cc859c57477bf90d0f944360d90a3998bf");
        assert_eq!(
            serialize_output(&script, 36977942)?,
            hex!("163d340200000000160014ad4cc1cc859c57477bf90d0f944360d90a3998bf")
        );
        Ok(())
    }

    #[test]
    fn round_trip() -> Result<()> {
        for (len, value) in [(0usize, 0u64), (1, 1), (22, 36977942), (252, u64::MAX), (255, 546)] {
            let script: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let bytes = serialize_output(&script, value)?;
            assert_eq!(bytes.len(), 9 + len);
            let t = TxOut::read(&mut Cursor::new(&bytes))?;
            assert_eq!(t.satoshis, value);
            assert_eq!(t.lock_script.0, script);
            assert_eq!(t.to_bytes()?, bytes);
        }
        Ok(())
    }

    #[test]
    fn script_too_long() {
        let script = vec![0u8; MAX_LOCK_SCRIPT_LEN + 1];
        assert!(matches!(serialize_output(&script, 1), Err(Error::ScriptTooLong(256))));
        assert!(matches!(TxOut::new(Script(script.clone()), 1), Err(Error::ScriptTooLong(256))));
        let t = TxOut {
            satoshis: 1,
            lock_script: Script(script),
        };
        assert_eq!(t.to_bytes().unwrap_err().to_string(), "Script too long: 256 bytes");
        assert!(t.write(&mut Vec::new()).is_err());
    }

    #[test]
    fn read_short() {
        // Length byte promises 3 bytes, only 2 follow
        let b = hex!("0100000000000000030102");
        assert!(matches!(TxOut::read(&mut Cursor::new(&b)), Err(Error::IOError(_))));
    }
}
