// src/stats/mod.rs
//! Hashrate and ETA telemetry
//!
//! The main component is [`HashrateReporter`], a periodic monitor thread
//! owned by the search engine. It samples the shared attempt counter,
//! renders an in-place hashrate/elapsed/ETA line on stderr and terminates
//! when the engine raises its stop flag. Telemetry is advisory only and
//! never gates search completion.

/// Submodule containing the reporter implementation
pub mod reporter;

// Re-export main components
pub use reporter::HashrateReporter;
