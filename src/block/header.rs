// src/block/header.rs
//! 80-byte block header serialization.

/// Serialized header length in bytes.
pub const HEADER_LEN: usize = 80;

/// Offset of the 4-byte little-endian nonce, the only field the search
/// engine mutates.
pub const NONCE_OFFSET: usize = 76;

/// Immutable 80-byte header template
///
/// Layout (all scalars little-endian): version:4, previous hash:32 (zero
/// for a genesis block), merkle root:32 (internal byte order),
/// timestamp:4, compact bits:4, nonce:4. Workers clone the buffer and
/// rewrite only the trailing nonce bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    bytes: [u8; HEADER_LEN],
}

impl BlockHeader {
    /// Serializes a genesis header from its fields.
    pub fn new(merkle_root: [u8; 32], time: u32, bits: u32, nonce: u32) -> Self {
        let mut bytes = [0u8; HEADER_LEN];

        bytes[0..4].copy_from_slice(&1u32.to_le_bytes()); // version
        // bytes 4..36 stay zero: no previous block
        bytes[36..68].copy_from_slice(&merkle_root);
        bytes[68..72].copy_from_slice(&time.to_le_bytes());
        bytes[72..76].copy_from_slice(&bits.to_le_bytes());
        bytes[NONCE_OFFSET..].copy_from_slice(&nonce.to_le_bytes());

        BlockHeader { bytes }
    }

    /// The serialized header bytes.
    pub fn as_bytes(&self) -> &[u8; HEADER_LEN] {
        &self.bytes
    }
}
