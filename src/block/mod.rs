// src/block/mod.rs
//! Block template construction
//!
//! Builds everything the search engine takes as immutable input: the
//! coinbase scripts, the serialized coinbase transaction, the merkle root
//! and the 80-byte header. No hashing happens here beyond the double
//! SHA256 producing the merkle root. All construction errors are surfaced
//! before any search starts.

/// 80-byte header buffer
pub mod header;

/// Coinbase input/output scripts
pub mod script;

/// Coinbase transaction serialization
pub mod transaction;

pub use header::BlockHeader;

use crate::miner::algorithm::double_sha256;
use crate::utils::error::MinerError;

/// Inputs to the template builder
#[derive(Debug, Clone)]
pub struct TemplateParams {
    /// Free-form pszTimestamp embedded in the coinbase input script
    pub timestamp: String,
    /// Hex-encoded 65-byte uncompressed public key for the output script
    pub pubkey: String,
    /// Unix timestamp of the block
    pub time: u32,
    /// Compact difficulty bits
    pub bits: u32,
    /// Initial nonce written into the header template
    pub nonce: u32,
    /// Coinbase output value in base currency units
    pub value: i64,
}

/// A fully built genesis block template
#[derive(Debug, Clone)]
pub struct BlockTemplate {
    input_script: Vec<u8>,
    merkle_root: [u8; 32],
    header: BlockHeader,
}

impl BlockTemplate {
    /// Builds the coinbase transaction and header for the given parameters.
    pub fn build(params: &TemplateParams) -> Result<Self, MinerError> {
        let input_script = script::input_script(&params.timestamp)?;
        let output_script = script::output_script(&params.pubkey)?;
        let tx = transaction::coinbase_transaction(&input_script, &output_script, params.value)?;

        let merkle_root = double_sha256(&tx);
        let header = BlockHeader::new(merkle_root, params.time, params.bits, params.nonce);

        Ok(BlockTemplate {
            input_script,
            merkle_root,
            header,
        })
    }

    /// The coinbase input script as hex, echoed to the user alongside the
    /// other block parameters.
    pub fn input_script_hex(&self) -> String {
        hex::encode(&self.input_script)
    }

    /// The header template the engine searches over.
    pub fn header(&self) -> &BlockHeader {
        &self.header
    }

    /// Merkle root in internal byte order.
    pub fn merkle_root(&self) -> &[u8; 32] {
        &self.merkle_root
    }

    /// Merkle root as display-order (byte-reversed) hex.
    pub fn merkle_root_hex(&self) -> String {
        let mut reversed = self.merkle_root;
        reversed.reverse();
        hex::encode(reversed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genesis_params() -> TemplateParams {
        TemplateParams {
            timestamp:
                "The Times 03/Jan/2009 Chancellor on brink of second bailout for banks"
                    .into(),
            pubkey: "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f".into(),
            time: 1231006505,
            bits: 0x1d00ffff,
            nonce: 2083236893,
            value: 5_000_000_000,
        }
    }

    #[test]
    fn test_genesis_input_script_hex() {
        let template = BlockTemplate::build(&genesis_params()).unwrap();
        assert_eq!(
            template.input_script_hex(),
            "04ffff001d0104455468652054696d65732030332f4a616e2f32303039204368\
             616e63656c6c6f72206f6e206272696e6b206f66207365636f6e64206261696c\
             6f757420666f722062616e6b73"
        );
    }

    #[test]
    fn test_genesis_merkle_root() {
        let template = BlockTemplate::build(&genesis_params()).unwrap();
        assert_eq!(
            template.merkle_root_hex(),
            "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b"
        );
    }

    #[test]
    fn test_genesis_header_hashes_to_known_block_hash() {
        let template = BlockTemplate::build(&genesis_params()).unwrap();

        let mut digest = double_sha256(template.header().as_bytes());
        digest.reverse();
        assert_eq!(
            hex::encode(digest),
            "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"
        );
    }

    #[test]
    fn test_template_build_is_deterministic() {
        let a = BlockTemplate::build(&genesis_params()).unwrap();
        let b = BlockTemplate::build(&genesis_params()).unwrap();
        assert_eq!(a.header(), b.header());
        assert_eq!(a.merkle_root(), b.merkle_root());
    }

    #[test]
    fn test_bad_pubkey_fails_before_any_search() {
        let mut params = genesis_params();
        params.pubkey = "zz".into();
        assert!(BlockTemplate::build(&params).is_err());
    }
}
