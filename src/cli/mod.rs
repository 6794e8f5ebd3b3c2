// src/cli/mod.rs
//! Command-line interface definitions
//!
//! Contains the clap derive structs describing the tool's flags. The
//! defaults reproduce the Bitcoin genesis block parameters, so running
//! with no arguments but `-t 1231006505 -n 2083236893` re-derives it.

/// Command and option definitions
pub mod commands;

pub use commands::Options;
