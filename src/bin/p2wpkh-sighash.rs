//! Prints the BIP-143 commitment hash for a single P2WPKH input.
//!
//! ```text
//! p2wpkh-sighash \
//!     --txid 3b7dc918e5671037effad7848727da3d3bf302b05f5ded9bec89449460473bbb --vout 16 \
//!     --descriptor "OP_0 OP_PUSHBYTES_20 f8d9f2203c6f0773983392a487d45c0c818f9573" \
//!     --value 37079526 \
//!     --output 76a9146085312a9c500ff9cc35b571b0a1e5efb7fb9f1688ac:100000 \
//!     --output 0014ad4cc1cc859c57477bf90d0f944360d90a3998bf:36977942
//! ```
//!
//! Set `RUST_LOG=debug` (or `trace` for the preimage) to see intermediate values.

use std::process;

use clap::Parser;
use log::{error, info};
use p2wpkh_sighash::messages::{OutPoint, serialize_output};
use p2wpkh_sighash::transaction::p2wpkh::derive_scriptcode;
use p2wpkh_sighash::transaction::sighash::{commitment_hash, commitment_preimage};
use p2wpkh_sighash::util::{Hash256, Result};

/// Computes the signature commitment hash for spending a P2WPKH output.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Txid of the transaction being spent, as shown by explorers.
    #[arg(long)]
    txid: String,

    /// Index of the output being spent.
    #[arg(long)]
    vout: u32,

    /// Lock script of the output being spent in asm form, ending with the pubkey hash.
    #[arg(long)]
    descriptor: String,

    /// Value of the output being spent, in satoshis.
    #[arg(long)]
    value: u64,

    /// An output of the spending transaction as `<script hex>:<satoshis>`, in order.
    #[arg(long = "output", required = true, value_parser = parse_output)]
    outputs: Vec<SerializedOutput>,

    /// Also print the preimage.
    #[arg(long)]
    preimage: bool,
}

/// An output already in wire form.
#[derive(Clone, Debug)]
struct SerializedOutput(Vec<u8>);

fn parse_output(s: &str) -> std::result::Result<SerializedOutput, String> {
    let (script, value) = s
        .split_once(':')
        .ok_or_else(|| format!("expected <script hex>:<satoshis>, got {:?}", s))?;
    let script = hex::decode(script).map_err(|e| format!("bad script hex: {}", e))?;
    let value = value
        .parse::<u64>()
        .map_err(|e| format!("bad satoshis {:?}: {}", value, e))?;
    serialize_output(&script, value)
        .map(SerializedOutput)
        .map_err(|e| e.to_string())
}

fn run(args: &Args) -> Result<Hash256> {
    let outpoint = OutPoint::from_txid_hex(&args.txid, args.vout)?.to_bytes();
    let script_code = derive_scriptcode(&args.descriptor)?;
    info!("Scriptcode: {:?}", script_code);
    let outputs: Vec<&[u8]> = args.outputs.iter().map(|o| o.0.as_slice()).collect();
    if args.preimage {
        let preimage = commitment_preimage(&outpoint, &script_code.0, args.value, &outputs)?;
        println!("preimage: {}", hex::encode(preimage));
    }
    let digest = commitment_hash(&outpoint, &script_code.0, args.value, &outputs)?;
    println!("{}", hex::encode(digest.0));
    Ok(digest)
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use p2wpkh_sighash::util::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_output_ok() {
        let out = parse_output("0014ad4cc1cc859c57477bf90d0f944360d90a3998bf:36977942").unwrap();
        assert_eq!(
            hex::encode(out.0),
            "163d340200000000160014ad4cc1cc859c57477bf90d0f944360d90a3998bf"
        );
    }

    #[test]
    fn parse_output_rejects() {
        assert!(parse_output("0014ad4c").is_err());
        assert!(parse_output("zz:1").is_err());
        assert!(parse_output("51:-1").is_err());
        assert!(parse_output("51:18446744073709551616").is_err());
        let long = format!("{}:1", "00".repeat(256));
        assert_eq!(parse_output(&long).unwrap_err(), "Script too long: 256 bytes");
    }

    #[test]
    fn parses_worked_example() {
        let args = Args::try_parse_from([
            "p2wpkh-sighash",
            "--txid",
            "3b7dc918e5671037effad7848727da3d3bf302b05f5ded9bec89449460473bbb",
            "--vout",
            "16",
            "--descriptor",
            "OP_0 OP_PUSHBYTES_20 f8d9f2203c6f0773983392a487d45c0c818f9573",
            "--value",
            "37079526",
            "--output",
            "76a9146085312a9c500ff9cc35b571b0a1e5efb7fb9f1688ac:100000",
            "--output",
            "0014ad4cc1cc859c57477bf90d0f944360d90a3998bf:36977942",
        ])
        .unwrap();
        assert_eq!(args.outputs.len(), 2);
        assert!(!args.preimage);
        let digest = run(&args).unwrap();
        assert_eq!(
            hex::encode(digest.0),
            "1d21cbebc663cf9214111ee52714d9e4e9e40890fd491f75e5eda20760bdee17"
        );
    }

    #[test]
    fn short_txid_is_an_error() {
        let args = Args::try_parse_from([
            "p2wpkh-sighash",
            "--txid",
            "3b7dc918e5671037effad7848727da3d3bf302b05f5ded9bec89449460473bb",
            "--vout",
            "16",
            "--descriptor",
            "OP_0 OP_PUSHBYTES_20 f8d9f2203c6f0773983392a487d45c0c818f9573",
            "--value",
            "37079526",
            "--output",
            "51:1",
        ])
        .unwrap();
        assert!(matches!(run(&args), Err(Error::InvalidLength(_))));
    }

    #[test]
    fn outputs_required() {
        let result = Args::try_parse_from([
            "p2wpkh-sighash",
            "--txid",
            "3b7dc918e5671037effad7848727da3d3bf302b05f5ded9bec89449460473bbb",
            "--vout",
            "0",
            "--descriptor",
            "f8d9f2203c6f0773983392a487d45c0c818f9573",
            "--value",
            "1",
        ]);
        assert!(result.is_err());
    }
}
