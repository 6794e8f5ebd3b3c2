// src/block/transaction.rs
//! Deterministic coinbase transaction serialization.

use crate::utils::error::MinerError;

/// Serializes the single coinbase transaction of a genesis block.
///
/// Layout (scalars little-endian): version u32 = 1, input count 1, null
/// previous outpoint (32 zero bytes + index 0xFFFFFFFF), input script with
/// one-byte length, sequence 0xFFFFFFFF, output count 1, value i64, output
/// script with one-byte length, locktime u32 = 0.
///
/// # Errors
/// `InputError` if either script length does not fit in the single length
/// byte this layout uses.
pub fn coinbase_transaction(
    input_script: &[u8],
    output_script: &[u8],
    value: i64,
) -> Result<Vec<u8>, MinerError> {
    for (name, script) in [("input", input_script), ("output", output_script)] {
        if script.len() > u8::MAX as usize {
            return Err(MinerError::InputError(format!(
                "{} script must be at most 255 bytes, got {}",
                name,
                script.len()
            )));
        }
    }

    let mut tx = Vec::with_capacity(60 + input_script.len() + output_script.len());

    tx.extend_from_slice(&1u32.to_le_bytes()); // version
    tx.push(1); // input count
    tx.extend_from_slice(&[0u8; 32]); // null prevout hash
    tx.extend_from_slice(&0xffff_ffffu32.to_le_bytes()); // prevout index
    tx.push(input_script.len() as u8);
    tx.extend_from_slice(input_script);
    tx.extend_from_slice(&0xffff_ffffu32.to_le_bytes()); // sequence
    tx.push(1); // output count
    tx.extend_from_slice(&value.to_le_bytes());
    tx.push(output_script.len() as u8);
    tx.extend_from_slice(output_script);
    tx.extend_from_slice(&0u32.to_le_bytes()); // locktime

    Ok(tx)
}
