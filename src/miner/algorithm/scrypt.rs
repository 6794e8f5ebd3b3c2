// src/miner/algorithm/scrypt.rs
//! Scrypt proof-of-work strategy.

use crate::miner::algorithm::{Algorithm, HeaderDigests, double_sha256, reversed};
use crate::types::AlgorithmType;
use crate::utils::error::MinerError;
use scrypt::Params;

/// Litecoin-style scrypt key derivation
///
/// The header buffer is used as both password and salt with N=1024, r=1,
/// p=1 and a 32-byte output. Parameters are validated once at construction;
/// hashing itself never fails after that.
pub struct ScryptAlgo {
    params: Params,
}

impl ScryptAlgo {
    /// Creates the strategy, validating the scrypt cost parameters.
    pub fn new() -> Result<Self, MinerError> {
        // log2(1024) = 10
        let params = Params::new(10, 1, 1, 32)
            .map_err(|e| MinerError::AlgorithmError(format!("Invalid scrypt params: {}", e)))?;
        Ok(ScryptAlgo { params })
    }
}

impl Algorithm for ScryptAlgo {
    fn digests(&self, header: &[u8]) -> Result<HeaderDigests, MinerError> {
        let canonical = reversed(double_sha256(header));

        let mut pow = [0u8; 32];
        scrypt::scrypt(header, header, &self.params, &mut pow)
            .map_err(|e| MinerError::AlgorithmError(format!("Scrypt failed: {}", e)))?;

        Ok(HeaderDigests {
            canonical,
            pow: reversed(pow),
        })
    }

    fn algorithm_type(&self) -> AlgorithmType {
        AlgorithmType::Scrypt
    }
}
