//! Script opcodes appearing in the locking scripts and scriptcodes this crate handles.
//!
//! Also provides the asm names used when a script is rendered for display.
//!
//! # Examples
//! ```
//! use p2wpkh_sighash::script::op_codes::*;
//! assert_eq!(OP_DUP, 118);
//! assert_eq!(name(OP_CHECKSIG), Some("OP_CHECKSIG"));
//! ```

// Pushdata and Constants
/// Pushes empty array (0/false); also the segwit v0 witness version.
pub const OP_0: u8 = 0;
/// Base for direct pushes: `OP_PUSH + n` pushes the next n bytes (n: 1-75).
pub const OP_PUSH: u8 = 0;

/// Largest direct push length.
pub const OP_PUSHBYTES_MAX: u8 = 75;
/// Next byte is push length (up to 255 bytes).
pub const OP_PUSHDATA1: u8 = 76;
/// Next two bytes are push length (up to 65535 bytes).
pub const OP_PUSHDATA2: u8 = 77;
/// Next four bytes are push length (up to 4GB).
pub const OP_PUSHDATA4: u8 = 78;

/// Pushes 1 (true); also the segwit v1 witness version.
pub const OP_1: u8 = 81;

/// Ends execution, marks an output unspendable.
pub const OP_RETURN: u8 = 106;

// Stack and comparison
/// Duplicates top.
pub const OP_DUP: u8 = 118;
/// Pushes 1 if top two items are equal.
pub const OP_EQUAL: u8 = 135;
/// EQUAL + VERIFY.
pub const OP_EQUALVERIFY: u8 = 136;

// Cryptography
/// RIPEMD160(SHA256(top)).
pub const OP_HASH160: u8 = 169;
/// Verifies sig for pubkey/tx (1/0).
pub const OP_CHECKSIG: u8 = 172;

/// Returns the asm name of a non-push opcode known to this crate.
#[must_use]
pub fn name(op: u8) -> Option<&'static str> {
    Some(match op {
        OP_0 => "OP_0",
        OP_PUSHDATA1 => "OP_PUSHDATA1",
        OP_PUSHDATA2 => "OP_PUSHDATA2",
        OP_PUSHDATA4 => "OP_PUSHDATA4",
        OP_1 => "OP_1",
        OP_RETURN => "OP_RETURN",
        OP_DUP => "OP_DUP",
        OP_EQUAL => "OP_EQUAL",
        OP_EQUALVERIFY => "OP_EQUALVERIFY",
        OP_HASH160 => "OP_HASH160",
        OP_CHECKSIG => "OP_CHECKSIG",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn names() {
        assert_eq!(name(OP_0), Some("OP_0"));
        assert_eq!(name(OP_1), Some("OP_1"));
        assert_eq!(name(OP_EQUAL), Some("OP_EQUAL"));
        assert_eq!(name(OP_EQUALVERIFY), Some("OP_EQUALVERIFY"));
        // OP_2 and pushes are not named here
        assert_eq!(name(82), None);
        assert_eq!(name(20), None);
    }
}
