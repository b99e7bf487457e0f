#![deny(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*! # p2wpkh-sighash

Computes the BIP-143 signature commitment hash ("sighash") for spending a segwit v0
pay-to-witness-public-key-hash (P2WPKH) input, along with the serialization primitives it
is built from: fixed-width integer encoding, out points, P2WPKH scriptcode and transaction
outputs.

## Usage
use p2wpkh_sighash::messages::{build_outpoint, serialize_output};
use p2wpkh_sighash::transaction::{p2wpkh::derive_scriptcode, sighash::commitment_hash};
let outpoint = build_outpoint(&txid, 16)?;
let script_code = derive_scriptcode("OP_0 OP_PUSHBYTES_20 f8d9f2203c6f0773983392a487d45c0c818f9573")?;
let outputs = vec![serialize_output(&lock_script, 100000)?];
let digest = commitment_hash(&outpoint, &script_code.0, 37079526, &outputs)?;

## Scope
- Every function is pure; there is no I/O and no shared state.
- Not a validator: signatures are neither produced nor checked here.
- Only SIGHASH_ALL with version 1 and lock time 0 is committed to.
*/

pub mod messages;
pub mod script;
pub mod transaction;
pub mod util;
