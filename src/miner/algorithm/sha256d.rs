// src/miner/algorithm/sha256d.rs
//! Double SHA256 proof-of-work strategy.

use crate::miner::algorithm::{Algorithm, HeaderDigests, double_sha256, reversed};
use crate::types::AlgorithmType;
use crate::utils::error::MinerError;

/// Bitcoin-style double SHA256
///
/// The proof-of-work digest is the canonical block hash itself, so a single
/// double-hash pass serves both outputs.
pub struct Sha256d;

impl Algorithm for Sha256d {
    fn digests(&self, header: &[u8]) -> Result<HeaderDigests, MinerError> {
        let canonical = reversed(double_sha256(header));
        Ok(HeaderDigests {
            canonical,
            pow: canonical,
        })
    }

    fn algorithm_type(&self) -> AlgorithmType {
        AlgorithmType::Sha256d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow_digest_equals_canonical() {
        let digests = Sha256d.digests(&[0u8; 80]).unwrap();
        assert_eq!(digests.pow, digests.canonical);
    }

    #[test]
    fn test_digests_are_deterministic() {
        let header = [0x5au8; 80];
        assert_eq!(
            Sha256d.digests(&header).unwrap(),
            Sha256d.digests(&header).unwrap()
        );
    }

    #[test]
    fn test_canonical_is_reversed_double_sha256() {
        let header = [0x01u8; 80];
        let digests = Sha256d.digests(&header).unwrap();
        assert_eq!(digests.canonical, reversed(double_sha256(&header)));
    }
}
