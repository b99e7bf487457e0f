//! BIP-143 commitment hash (sighash) for segwit v0 P2WPKH inputs.
//!
//! The preimage is, in order: nVersion | hashPrevouts | hashSequence | outpoint |
//! scriptCode | value | nSequence | hashOutputs | nLockTime | sighash type.
//! Version, lock time and sighash type are fixed (1, 0, SIGHASH_ALL).
use crate::messages::OutPoint;
use crate::util::{Error, Hash256, Result, Serializable, sha256d, var_int};
use byteorder::{LittleEndian, WriteBytesExt};
use log::{debug, trace};

/// Signs all inputs and outputs.
pub const SIGHASH_ALL: u32 = 0x01;
/// Transaction version committed to.
pub const TX_VERSION: u32 = 1;
/// Lock time committed to.
pub const LOCK_TIME: u32 = 0;
/// Final sequence number, used for every input of the single-input commitment.
pub const SEQUENCE_FINAL: u32 = 0xffffffff;

/// Size of every preimage field other than the scriptcode.
const PREIMAGE_FIXED_SIZE: usize = 4 + 32 + 32 + OutPoint::SIZE + 8 + 4 + 32 + 4 + 4;

/// An input as seen by the commitment: what it spends and its sequence number.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub struct SigHashInput {
    /// Output being spent.
    pub prev_output: OutPoint,
    /// Sequence number of the input.
    pub sequence: u32,
}

impl SigHashInput {
    /// Creates an input with the final sequence number.
    #[must_use]
    pub fn new(prev_output: OutPoint) -> SigHashInput {
        SigHashInput {
            prev_output,
            sequence: SEQUENCE_FINAL,
        }
    }
}

/// Cache for the hashed preimage fields shared by every input of one transaction.
///
/// Only reuse a cache across inputs of the same transaction.
#[derive(Default, Debug)]
pub struct SigHashCache {
    hash_prevouts: Option<Hash256>,
    hash_sequence: Option<Hash256>,
    hash_outputs: Option<Hash256>,
}

impl SigHashCache {
    /// Creates a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Computes the commitment hash for a single-input transaction.
///
/// `outpoint` is the 36-byte serialized out point, `script_code` the P2WPKH scriptcode
/// and `outputs` the serialized outputs in transaction order.
///
/// `script_code` is the bare 25-byte `76a914<hash>88ac`. Its compact-size length is
/// written into the preimage here, so a scriptcode that already carries one ends up
/// prefixed twice.
///
/// # Errors
/// `Error::InvalidLength` if `outpoint` is not 36 bytes.
///
/// # Examples
/// ```
/// use p2wpkh_sighash::messages::{build_outpoint, serialize_output};
/// use p2wpkh_sighash::transaction::{p2wpkh::derive_scriptcode, sighash::commitment_hash};
///
/// let outpoint = build_outpoint(&[0x11; 32], 0).unwrap();
/// let script_code = derive_scriptcode("OP_0 OP_PUSHBYTES_20 0000000000000000000000000000000000000000").unwrap();
/// let outputs = vec![serialize_output(&[0x51], 1000).unwrap()];
/// let digest = commitment_hash(&outpoint, &script_code.0, 2000, &outputs).unwrap();
/// assert_eq!(digest.0.len(), 32);
/// ```
pub fn commitment_hash<O: AsRef<[u8]>>(
    outpoint: &[u8],
    script_code: &[u8],
    input_value: u64,
    outputs: &[O],
) -> Result<Hash256> {
    let preimage = commitment_preimage(outpoint, script_code, input_value, outputs)?;
    let digest = sha256d(&preimage);
    debug!("Commitment hash: {}", hex::encode(digest.0));
    Ok(digest)
}

/// Assembles the single-input preimage hashed by [`commitment_hash`].
///
/// # Errors
/// `Error::InvalidLength` if `outpoint` is not 36 bytes.
pub fn commitment_preimage<O: AsRef<[u8]>>(
    outpoint: &[u8],
    script_code: &[u8],
    input_value: u64,
    outputs: &[O],
) -> Result<Vec<u8>> {
    let input = SigHashInput::new(OutPoint::from_bytes(outpoint)?);
    bip143_preimage(&[input], 0, script_code, input_value, outputs, &mut SigHashCache::new())
}

/// Computes the commitment hash for input `n_input` of a transaction with several inputs.
///
/// hashPrevouts and hashSequence cover every input in order. With one final input this
/// equals [`commitment_hash`].
///
/// # Errors
/// `Error::BadArgument` if `n_input` is out of range.
pub fn commitment_hash_for_input<O: AsRef<[u8]>>(
    inputs: &[SigHashInput],
    n_input: usize,
    script_code: &[u8],
    input_value: u64,
    outputs: &[O],
    cache: &mut SigHashCache,
) -> Result<Hash256> {
    let preimage = bip143_preimage(inputs, n_input, script_code, input_value, outputs, cache)?;
    let digest = sha256d(&preimage);
    debug!(
        "Commitment hash for input {} of {}: {}",
        n_input,
        inputs.len(),
        hex::encode(digest.0)
    );
    Ok(digest)
}

fn bip143_preimage<O: AsRef<[u8]>>(
    inputs: &[SigHashInput],
    n_input: usize,
    script_code: &[u8],
    input_value: u64,
    outputs: &[O],
    cache: &mut SigHashCache,
) -> Result<Vec<u8>> {
    let input = inputs.get(n_input).ok_or_else(|| {
        Error::BadArgument(format!("Input index {} out of range ({} inputs)", n_input, inputs.len()))
    })?;
    let script_len = script_code.len() as u64;
    let mut s = Vec::with_capacity(PREIMAGE_FIXED_SIZE + var_int::size(script_len) + script_code.len());
    // 1. nVersion
    s.write_u32::<LittleEndian>(TX_VERSION)?;
    // 2. hashPrevouts
    let hash_prevouts = cache.hash_prevouts.get_or_insert_with(|| {
        let mut prevouts = Vec::with_capacity(OutPoint::SIZE * inputs.len());
        for input in inputs {
            prevouts.extend_from_slice(&input.prev_output.to_bytes());
        }
        sha256d(&prevouts)
    });
    s.extend_from_slice(&hash_prevouts.0);
    // 3. hashSequence
    let hash_sequence = cache.hash_sequence.get_or_insert_with(|| {
        let mut sequences = Vec::with_capacity(4 * inputs.len());
        for input in inputs {
            sequences.extend_from_slice(&input.sequence.to_le_bytes());
        }
        sha256d(&sequences)
    });
    s.extend_from_slice(&hash_sequence.0);
    // 4. outpoint
    input.prev_output.write(&mut s)?;
    // 5. scriptCode, length prefixed like any serialized script
    var_int::write(script_len, &mut s)?;
    s.extend_from_slice(script_code);
    // 6. value
    s.write_u64::<LittleEndian>(input_value)?;
    // 7. nSequence
    s.write_u32::<LittleEndian>(input.sequence)?;
    // 8. hashOutputs
    let hash_outputs = cache.hash_outputs.get_or_insert_with(|| {
        let size: usize = outputs.iter().map(|o| o.as_ref().len()).sum();
        let mut all = Vec::with_capacity(size);
        for out in outputs {
            all.extend_from_slice(out.as_ref());
        }
        sha256d(&all)
    });
    s.extend_from_slice(&hash_outputs.0);
    // 9. nLockTime
    s.write_u32::<LittleEndian>(LOCK_TIME)?;
    // 10. sighash type
    s.write_u32::<LittleEndian>(SIGHASH_ALL)?;
    trace!("BIP-143 preimage: {}", hex::encode(&s));
    Ok(s)
}
