// src/cli/commands.rs
use crate::types::AlgorithmType;
use clap::Parser;
use std::time::{SystemTime, UNIX_EPOCH};

/// Genesis Miner CLI - genesis block generator in Rust
#[derive(Parser, Debug)]
#[command(name = "genesis-miner")]
#[command(version, about, long_about = None)]
pub struct Options {
    /// The pszTimestamp found in the coinbase of the genesis block
    #[arg(
        short = 'z',
        long,
        default_value = "The Times 03/Jan/2009 Chancellor on brink of second bailout for banks"
    )]
    pub timestamp: String,

    /// The pubkey found in the output script (hex, 65 bytes uncompressed)
    #[arg(
        short = 'p',
        long,
        default_value = "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f"
    )]
    pub pubkey: String,

    /// The (unix) time when the genesis block is created (default: now)
    #[arg(short = 't', long)]
    pub time: Option<u32>,

    /// The first value of the nonce that will be incremented when searching
    /// the genesis hash
    #[arg(short = 'n', long, default_value_t = 0)]
    pub nonce: u32,

    /// The PoW algorithm
    #[arg(
        short = 'a',
        long,
        value_enum,
        ignore_case = true,
        default_value_t = AlgorithmType::Sha256d
    )]
    pub algorithm: AlgorithmType,

    /// The value in coins for the output, full value
    #[arg(short = 'v', long, default_value_t = 5_000_000_000)]
    pub value: i64,

    /// The target in compact representation (hex like 0x1d00ffff or
    /// decimal); defaults to the difficulty-1 target of the algorithm
    #[arg(short = 'b', long, value_parser = parse_bits)]
    pub bits: Option<u32>,

    /// Number of CPU cores to use for mining
    #[arg(short = 'c', long, default_value_t = num_cpus::get())]
    pub workers: usize,
}

impl Options {
    /// Compact bits to use, falling back to the algorithm's difficulty-1
    /// encoding when not given.
    pub fn bits(&self) -> u32 {
        self.bits.unwrap_or(match self.algorithm {
            AlgorithmType::Sha256d => 0x1d00ffff,
            AlgorithmType::Scrypt => 0x1e0ffff0,
        })
    }

    /// Block time to use, defaulting to the current Unix time.
    pub fn time(&self) -> u32 {
        self.time.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs() as u32)
                .unwrap_or_default()
        })
    }
}

/// Parses compact bits as `0x`-prefixed hex or plain decimal.
fn parse_bits(s: &str) -> Result<u32, String> {
    let result = if let Some(hex_digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex_digits, 16)
    } else {
        s.parse::<u32>()
    };
    result.map_err(|e| format!("invalid bits value '{}': {}", s, e))
}
