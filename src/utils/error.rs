// src/utils/error.rs
use std::io;
use thiserror::Error;

/// Main error type for the genesis miner
///
/// Every fatal condition is detected before any worker thread is spawned;
/// nothing in this enum is produced during the parallel search itself.
#[derive(Error, Debug)]
pub enum MinerError {
    /// Errors related to proof-of-work algorithms (e.g., bad scrypt params)
    #[error("Algorithm error: {0}")]
    AlgorithmError(String),

    /// Configuration file or parameter errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid user input or parameter errors
    #[error("Invalid input: {0}")]
    InputError(String),

    /// Thread communication channel errors
    #[error("Thread communication error: {0}")]
    ChannelError(String),

    /// Standard I/O operation errors
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Converts hex decoding errors into MinerError
///
/// Used when invalid hex data is encountered while parsing the coinbase
/// public key. Wraps the original error in an `InputError` variant.
impl From<hex::FromHexError> for MinerError {
    fn from(e: hex::FromHexError) -> Self {
        MinerError::InputError(format!("Hex conversion failed: {}", e))
    }
}
