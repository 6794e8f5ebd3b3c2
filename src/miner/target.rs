// src/miner/target.rs
//! Compact difficulty target decoding and digest comparison.

use num_bigint::BigUint;

/// 256-bit proof-of-work threshold, stored big-endian.
///
/// Decoded once per run from the compact "bits" encoding and immutable for
/// the lifetime of the search. A digest satisfies the target when it is
/// strictly less than it, compared as big-endian magnitudes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Target([u8; 32]);

impl Target {
    /// Decodes a compact 32-bit difficulty encoding into a full target.
    ///
    /// The low 24 bits are the mantissa, the high 8 bits the exponent; the
    /// three mantissa bytes are placed most-significant-first at offset
    /// `32 - exponent`, with bytes falling past the end truncated. An
    /// exponent of 0 or above 32 yields the all-zero target rather than an
    /// error. The sign bit (0x00800000) of consensus-grade encodings is
    /// not interpreted.
    pub fn from_compact(bits: u32) -> Self {
        let mantissa = bits & 0x00ff_ffff;
        let exponent = (bits >> 24) as usize;

        let mut target = [0u8; 32];

        if (1..=32).contains(&exponent) {
            let pos = 32 - exponent;
            target[pos] = (mantissa >> 16) as u8;
            if pos + 1 < 32 {
                target[pos + 1] = (mantissa >> 8) as u8;
            }
            if pos + 2 < 32 {
                target[pos + 2] = mantissa as u8;
            }
        }

        Target(target)
    }

    /// Returns true if `digest` is strictly below the target.
    ///
    /// Both sides are compared as 256-bit big-endian magnitudes; an exact
    /// match does not qualify.
    pub fn is_met_by(&self, digest: &[u8; 32]) -> bool {
        for (d, t) in digest.iter().zip(self.0.iter()) {
            if d < t {
                return true;
            }
            if d > t {
                return false;
            }
        }
        false
    }

    /// The raw 32 target bytes, big-endian.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The target as an arbitrary-precision unsigned integer.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }
}
