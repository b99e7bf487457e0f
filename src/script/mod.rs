//! Script byte container and display helpers.
//!
//! Scripts are opaque to this crate: nothing here evaluates them. The only structure
//! it cares about is where each push or opcode starts, so that a script can be shown
//! in the asm notation used by block explorers (`OP_0 OP_PUSHBYTES_20 <hex>`).

pub mod op_codes;

use self::op_codes::{OP_PUSHBYTES_MAX, OP_PUSHDATA1, OP_PUSHDATA2, OP_PUSHDATA4};
use std::fmt;

/// Locking script, witness program or scriptcode bytes.
#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct Script(pub Vec<u8>);

impl Script {
    /// Creates a new empty script.
    #[must_use]
    #[inline]
    pub fn new() -> Script {
        Script(vec![])
    }

    /// Appends a single opcode or data byte.
    #[inline]
    pub fn append(&mut self, byte: u8) {
        self.0.push(byte);
    }

    /// Appends a slice of data without a push prefix.
    #[inline]
    pub fn append_slice(&mut self, slice: &[u8]) {
        self.0.extend_from_slice(slice);
    }

    /// Length of the script in bytes.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the script has no bytes.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the script as space separated asm tokens.
    ///
    /// Pushes show as `OP_PUSHBYTES_<n> <hex>` or `OP_PUSHDATA<k> <hex>`. A push that runs
    /// past the end of the script ends the output with `<unexpected end>`.
    #[must_use]
    pub fn to_asm(&self) -> String {
        let script = &self.0;
        let mut tokens = Vec::new();
        let mut i = 0;
        while i < script.len() {
            let op = script[i];
            let next = next_op(i, script);
            let data_start = match op {
                1..=OP_PUSHBYTES_MAX => {
                    tokens.push(format!("OP_PUSHBYTES_{}", op));
                    Some(i + 1)
                }
                OP_PUSHDATA1 => Some(i + 2),
                OP_PUSHDATA2 => Some(i + 3),
                OP_PUSHDATA4 => Some(i + 5),
                _ => None,
            };
            if matches!(op, OP_PUSHDATA1 | OP_PUSHDATA2 | OP_PUSHDATA4) {
                tokens.push(op_codes::name(op).unwrap_or_default().to_string());
            }
            match data_start {
                Some(start) if next > script.len() || start > script.len() => {
                    tokens.push("<unexpected end>".to_string());
                    break;
                }
                Some(start) => tokens.push(hex::encode(&script[start..next])),
                None => tokens.push(match op_codes::name(op) {
                    Some(name) => name.to_string(),
                    None => format!("OP_UNKNOWN_{:#04x}", op),
                }),
            }
            i = next;
        }
        tokens.join(" ")
    }
}

/// Gets the index of the operation after the one at `i`.
///
/// The result may exceed the script length when a push claims more data than remains.
#[must_use]
pub fn next_op(i: usize, script: &[u8]) -> usize {
    if i >= script.len() {
        return script.len();
    }
    let op = script[i];
    let remaining = |n: usize| if i + n >= script.len() { None } else { Some(&script[i + 1..i + 1 + n]) };
    match op {
        len @ 1..=OP_PUSHBYTES_MAX => i + 1 + len as usize,
        OP_PUSHDATA1 => match remaining(1) {
            Some(b) => i + 2 + b[0] as usize,
            None => script.len() + 1,
        },
        OP_PUSHDATA2 => match remaining(2) {
            Some(b) => i + 3 + u16::from_le_bytes([b[0], b[1]]) as usize,
            None => script.len() + 1,
        },
        OP_PUSHDATA4 => match remaining(4) {
            Some(b) => i + 5 + u32::from_le_bytes([b[0], b[1], b[2], b[3]]) as usize,
            None => script.len() + 1,
        },
        _ => i + 1,
    }
}

impl AsRef<[u8]> for Script {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Script(bytes)
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_asm())
    }
}
