// src/block/script.rs
//! Coinbase input and output script construction.

use crate::utils::error::MinerError;

/// Leading bytes of the genesis coinbase input script: the difficulty-1
/// compact bits 0x1d00ffff pushed as a 4-byte number, followed by a pushed
/// CScriptNum(4).
const INPUT_SCRIPT_PREFIX: [u8; 7] = [0x04, 0xff, 0xff, 0x00, 0x1d, 0x01, 0x04];

/// OP_PUSHDATA1, required for pushes longer than 75 bytes.
const OP_PUSHDATA1: u8 = 0x4c;

/// OP_CHECKSIG
const OP_CHECKSIG: u8 = 0xac;

/// Builds the coinbase input script embedding the pszTimestamp message.
///
/// # Errors
/// `InputError` if the timestamp does not fit into a single-byte push
/// length (more than 255 bytes).
pub fn input_script(timestamp: &str) -> Result<Vec<u8>, MinerError> {
    let message = timestamp.as_bytes();
    if message.len() > u8::MAX as usize {
        return Err(MinerError::InputError(format!(
            "timestamp must be at most 255 bytes, got {}",
            message.len()
        )));
    }

    let mut script = Vec::with_capacity(INPUT_SCRIPT_PREFIX.len() + 2 + message.len());
    script.extend_from_slice(&INPUT_SCRIPT_PREFIX);
    if message.len() > 76 {
        script.push(OP_PUSHDATA1);
    }
    script.push(message.len() as u8);
    script.extend_from_slice(message);

    Ok(script)
}

/// Builds the pay-to-pubkey output script `<push 65> <pubkey> OP_CHECKSIG`.
///
/// # Errors
/// `InputError` on malformed hex or a key that is not the 65 bytes of an
/// uncompressed public key.
pub fn output_script(pubkey_hex: &str) -> Result<Vec<u8>, MinerError> {
    let pubkey = hex::decode(pubkey_hex)?;
    if pubkey.len() != 65 {
        return Err(MinerError::InputError(format!(
            "pubkey must be 65 bytes, got {}",
            pubkey.len()
        )));
    }

    let mut script = Vec::with_capacity(pubkey.len() + 2);
    script.push(pubkey.len() as u8);
    script.extend_from_slice(&pubkey);
    script.push(OP_CHECKSIG);

    Ok(script)
}
