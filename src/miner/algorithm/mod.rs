// src/miner/algorithm/mod.rs
//! Proof-of-work algorithm implementations
//!
//! This module contains the supported hash strategies and their common
//! interface. Currently implements:
//! - Double SHA256 (Bitcoin-style)
//! - Scrypt (Litecoin-style, N=1024 r=1 p=1)

/// Double SHA256 strategy
pub mod sha256d;

/// Scrypt key-derivation strategy
pub mod scrypt;

use crate::types::AlgorithmType;
use crate::utils::error::MinerError;
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// The two digests produced for one header buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderDigests {
    /// Byte-reversed double SHA256 of the header; this is the block hash
    /// that gets reported to the user regardless of algorithm.
    pub canonical: [u8; 32],
    /// Algorithm-specific proof-of-work digest, byte-reversed, compared
    /// against the target.
    pub pow: [u8; 32],
}

/// Common interface for all proof-of-work strategies
///
/// Implementations must be cheap to share across worker threads; any
/// fallible setup (e.g. scrypt parameter validation) happens at
/// construction, before the search starts.
pub trait Algorithm: Send + Sync {
    /// Compute the canonical and proof-of-work digests for a header buffer
    ///
    /// Both outputs are byte-reversed so they compare against the
    /// big-endian target as little-endian-ordered 256-bit integers.
    fn digests(&self, header: &[u8]) -> Result<HeaderDigests, MinerError>;

    /// Get the algorithm type
    fn algorithm_type(&self) -> AlgorithmType;
}

/// Creates an algorithm instance for the given selector
///
/// This is the single validation point for algorithm configuration: an
/// error here is fatal and reported before any worker is spawned.
pub fn create(algo: AlgorithmType) -> Result<Arc<dyn Algorithm>, MinerError> {
    match algo {
        AlgorithmType::Sha256d => Ok(Arc::new(sha256d::Sha256d)),
        AlgorithmType::Scrypt => Ok(Arc::new(scrypt::ScryptAlgo::new()?)),
    }
}

/// SHA256 applied twice in succession.
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    second.into()
}

/// Reverses digest byte order, converting between the hash primitive's
/// output convention and the display/comparison convention.
#[inline]
pub fn reversed(mut digest: [u8; 32]) -> [u8; 32] {
    digest.reverse();
    digest
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_double_sha256_known_vector() {
        // SHA256d("hello")
        let expected =
            hex!("9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50");
        assert_eq!(double_sha256(b"hello"), expected);
    }

    #[test]
    fn test_reversed_is_involutive() {
        let digest = double_sha256(b"abc");
        assert_eq!(reversed(reversed(digest)), digest);
        assert_eq!(reversed(digest)[0], digest[31]);
    }

    #[test]
    fn test_create_both_algorithms() {
        for algo in [AlgorithmType::Sha256d, AlgorithmType::Scrypt] {
            let strategy = create(algo).unwrap();
            assert_eq!(strategy.algorithm_type(), algo);
        }
    }

    #[test]
    fn test_digest_avalanche_on_single_byte_change() {
        let strategy = create(AlgorithmType::Sha256d).unwrap();
        let mut header = [0u8; 80];
        let base = strategy.digests(&header).unwrap();

        // Flip the low nonce byte; the digest must diverge in many bytes.
        header[76] ^= 0x01;
        let flipped = strategy.digests(&header).unwrap();

        let differing = base
            .canonical
            .iter()
            .zip(flipped.canonical.iter())
            .filter(|(a, b)| a != b)
            .count();
        assert!(differing > 16, "only {} bytes changed", differing);
    }
}
