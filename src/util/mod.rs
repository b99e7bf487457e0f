//! Byte-level helpers: integer codecs, hashes and the serialization trait.

mod codec;
pub mod hash160;
mod hash256;
mod result;
mod serdes;
pub(crate) mod var_int;

pub use self::codec::{
    MAX_WIDTH, decode_uint_be, decode_uint_le, encode_uint_be, encode_uint_le, fits_in,
};
pub use self::hash160::{Hash160, hash160};
pub use self::hash256::{Hash256, sha256d};
pub use self::result::{Error, Result};
pub use self::serdes::Serializable;
