//! Pay-to-Witness-Public-Key-Hash (P2WPKH) scripts and their BIP-143 scriptcode.
//!
//! A P2WPKH output locks to `OP_0 <20-byte pubkey hash>`. When signing, BIP-143 replaces
//! the witness program with the equivalent P2PKH script, the scriptcode.
use crate::script::op_codes::{OP_0, OP_CHECKSIG, OP_DUP, OP_EQUALVERIFY, OP_HASH160, OP_PUSH};
use crate::script::Script;
use crate::util::{Error, Hash160, Result};

/// Length of a P2WPKH lock script (`OP_0 OP_PUSHBYTES_20 <hash>`).
pub const LOCK_SCRIPT_LEN: usize = 22;
/// Length of the P2WPKH scriptcode.
pub const SCRIPTCODE_LEN: usize = 25;

/// Creates the P2WPKH lock script (0 [hash]).
#[must_use]
#[inline]
pub fn create_lock_script(pubkey_hash: &Hash160) -> Script {
    let mut script = Script::new();
    script.append(OP_0);
    script.append(OP_PUSH + 20);
    script.append_slice(&pubkey_hash.0);
    script
}

/// Creates the scriptcode (DUP HASH160 [hash] EQUALVERIFY CHECKSIG) for a pubkey hash.
#[must_use]
#[inline]
pub fn create_scriptcode(pubkey_hash: &Hash160) -> Script {
    let mut script = Script::new();
    script.append(OP_DUP);
    script.append(OP_HASH160);
    script.append(OP_PUSH + 20);
    script.append_slice(&pubkey_hash.0);
    script.append(OP_EQUALVERIFY);
    script.append(OP_CHECKSIG);
    script
}

/// Checks if script is a P2WPKH lock (len=22, version 0, 20-byte push).
#[must_use]
#[inline]
pub fn check_lock_script(lock_script: &[u8]) -> bool {
    lock_script.len() == LOCK_SCRIPT_LEN && lock_script[0] == OP_0 && lock_script[1] == OP_PUSH + 20
}

/// Extracts the pubkey hash from a P2WPKH lock script.
///
/// # Errors
/// `Error::MalformedScript` if the script is not a P2WPKH lock.
pub fn extract_pubkeyhash(lock_script: &[u8]) -> Result<Hash160> {
    if !check_lock_script(lock_script) {
        return Err(Error::MalformedScript(format!(
            "Not a P2WPKH lock script: {}",
            hex::encode(lock_script)
        )));
    }
    Hash160::from_slice(&lock_script[2..])
}

/// Derives the scriptcode from a P2WPKH lock script in asm form.
///
/// Only the last whitespace separated token is read; it must be the hex of a 20-byte
/// pubkey hash. Leading tokens such as `OP_0 OP_PUSHBYTES_20` are not checked.
///
/// # Errors
/// `Error::MalformedScript` if there is no token, or the last one is not 20 bytes of hex.
///
/// # Examples
/// ```
/// use p2wpkh_sighash::transaction::p2wpkh::derive_scriptcode;
/// let sc = derive_scriptcode("OP_0 OP_PUSHBYTES_20 f8d9f2203c6f0773983392a487d45c0c818f9573").unwrap();
/// assert_eq!(hex::encode(&sc.0), "76a914f8d9f2203c6f0773983392a487d45c0c818f957388ac");
/// ```
pub fn derive_scriptcode(descriptor: &str) -> Result<Script> {
    let token = descriptor
        .split_whitespace()
        .last()
        .ok_or_else(|| Error::MalformedScript("Empty witness program descriptor".to_string()))?;
    let hash = hex::decode(token)
        .map_err(|e| Error::MalformedScript(format!("Pubkey hash {} is not hex: {}", token, e)))?;
    let hash = Hash160::from_slice(&hash).map_err(|_| {
        Error::MalformedScript(format!("Pubkey hash is {} bytes, expected 20", hash.len()))
    })?;
    Ok(create_scriptcode(&hash))
}

/// Derives the scriptcode from a raw P2WPKH lock script (`0014<hash>`).
///
/// # Errors
/// `Error::MalformedScript` if the script is not a P2WPKH lock.
pub fn scriptcode_from_lock_script(lock_script: &[u8]) -> Result<Script> {
    Ok(create_scriptcode(&extract_pubkeyhash(lock_script)?))
}
