// src/miner/mod.rs
//! Core mining functionality
//!
//! This module contains all components related to the proof-of-work search:
//! - Algorithm implementations (double SHA256, scrypt)
//! - Compact difficulty target decoding
//! - The parallel nonce search engine and its workers

/// Proof-of-work algorithm implementations
///
/// Contains the [`Algorithm`](algorithm::Algorithm) trait plus the double
/// SHA256 and scrypt strategies.
pub mod algorithm;

/// Difficulty target decoding and comparison
pub mod target;

/// Parallel nonce search engine
///
/// Owns worker lifecycle, the result rendezvous channel and cooperative
/// cancellation.
pub mod engine;

/// Worker thread implementation
///
/// Contains the per-thread loop that walks a residue class of the nonce
/// space and reports a qualifying digest back to the engine.
pub mod worker;

// Re-export main components for cleaner imports
pub use self::algorithm::{Algorithm, HeaderDigests};
pub use self::engine::{HashResult, SearchEngine};
pub use self::target::Target;
