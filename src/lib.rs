//! Genesis Miner - genesis block generator in Rust
//!
//! This crate builds a single genesis block template (coinbase transaction,
//! merkle root, 80-byte header) and brute-forces the header nonce across
//! worker threads until the proof-of-work digest falls below the difficulty
//! target. Supported algorithms:
//! - Double SHA256 (Bitcoin-style)
//! - Scrypt (Litecoin-style, N=1024 r=1 p=1)

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Block template construction: scripts, coinbase transaction, header
pub mod block;

/// Miner core implementation including algorithms, target math and the
/// parallel search engine
pub mod miner;

/// Hashrate and ETA telemetry
pub mod stats;

/// Utility functions and error handling
pub mod utils;

/// Command-line interface definitions
pub mod cli;

/// Shared type definitions
pub mod types;

// Core exports
pub use block::{BlockHeader, BlockTemplate, TemplateParams};
pub use cli::Options;
pub use miner::{Algorithm, HashResult, SearchEngine, Target};
pub use stats::HashrateReporter;
pub use types::AlgorithmType;
pub use utils::{MinerError, init_logging};
