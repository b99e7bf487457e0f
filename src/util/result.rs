//! Standard error and result types for the library.
use hex::FromHexError;
use std::io;

/// Standard error type used in the library
#[derive(Debug)]
pub enum Error {
    /// A fixed-size field (txid, outpoint) received the wrong number of bytes
    InvalidLength(String),
    /// A witness program or its descriptor cannot be turned into a scriptcode
    MalformedScript(String),
    /// An integer does not fit the requested encoded width
    RangeError(String),
    /// An output script is longer than a single length byte can describe
    ScriptTooLong(usize),
    /// An argument provided is invalid
    BadArgument(String),
    /// Hex string could not be decoded
    FromHexError(FromHexError),
    /// Standard library IO error
    IOError(io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::InvalidLength(s) => write!(f, "Invalid length: {}", s),
            Error::MalformedScript(s) => write!(f, "Malformed script: {}", s),
            Error::RangeError(s) => write!(f, "Range error: {}", s),
            Error::ScriptTooLong(len) => write!(f, "Script too long: {} bytes", len),
            Error::BadArgument(s) => write!(f, "Bad argument: {}", s),
            Error::FromHexError(e) => write!(f, "Hex decoding error: {}", e),
            Error::IOError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FromHexError(e) => Some(e),
            Error::IOError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FromHexError> for Error {
    fn from(e: FromHexError) -> Self {
        Error::FromHexError(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::IOError(e)
    }
}

/// Standard Result used in the library
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as _;

    #[test]
    fn display() {
        assert_eq!(
            Error::InvalidLength("txid is 33 bytes".to_string()).to_string(),
            "Invalid length: txid is 33 bytes"
        );
        assert_eq!(Error::ScriptTooLong(256).to_string(), "Script too long: 256 bytes");
    }

    #[test]
    fn hex_error_source() {
        let e: Error = hex::decode("zz").unwrap_err().into();
        assert!(matches!(e, Error::FromHexError(_)));
        assert!(e.source().is_some());
        assert!(Error::RangeError("x".to_string()).source().is_none());
    }
}
