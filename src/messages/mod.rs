//! Wire structures referenced by the commitment preimage.

mod out_point;
mod tx_out;

pub use self::out_point::{OutPoint, build_outpoint};
pub use self::tx_out::{MAX_LOCK_SCRIPT_LEN, TxOut, serialize_output};
