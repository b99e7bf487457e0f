//! Transaction signing support: P2WPKH scriptcode and the BIP-143 commitment hash.
//!
//! # Examples
//!
//! Compute the digest a P2WPKH signer signs:
//! ```
//! use p2wpkh_sighash::messages::{build_outpoint, serialize_output};
//! use p2wpkh_sighash::transaction::{p2wpkh::derive_scriptcode, sighash::commitment_hash};
//!
//! let txid = hex::decode("3b7dc918e5671037effad7848727da3d3bf302b05f5ded9bec89449460473bbb").unwrap();
//! let outpoint = build_outpoint(&txid, 16).unwrap();
//! let script_code = derive_scriptcode("OP_0 OP_PUSHBYTES_20 f8d9f2203c6f0773983392a487d45c0c818f9573").unwrap();
//! let outputs = vec![
//!     serialize_output(&hex::decode("76a9146085312a9c500ff9cc35b571b0a1e5efb7fb9f1688ac").unwrap(), 100000).unwrap(),
//!     serialize_output(&hex::decode("0014ad4cc1cc859c57477bf90d0f944360d90a3998bf").unwrap(), 36977942).unwrap(),
//! ];
//! let digest = commitment_hash(&outpoint, &script_code.0, 37079526, &outputs).unwrap();
//! assert_eq!(
//!     hex::encode(digest.0),
//!     "1d21cbebc663cf9214111ee52714d9e4e9e40890fd491f75e5eda20760bdee17"
//! );
//! ```
pub mod p2wpkh;
pub mod sighash;
