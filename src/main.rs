// src/main.rs
use clap::Parser;
use genesis_miner::block::{BlockTemplate, TemplateParams};
use genesis_miner::miner::engine::{HashResult, SearchEngine};
use genesis_miner::miner::target::Target;
use genesis_miner::miner::algorithm;
use genesis_miner::{MinerError, Options, utils};

/// Main entry point for the genesis miner
///
/// # Flow
/// 1. Parses command line arguments
/// 2. Validates the algorithm and worker count (fatal before any search)
/// 3. Builds the coinbase transaction, merkle root and header template
/// 4. Prints the block parameters, then runs the parallel search
/// 5. Announces the found nonce and genesis hash on stdout
///
/// # Returns
/// - `Ok(())` on successful execution
/// - `Err(MinerError)` if any operation fails; the process exits non-zero
fn main() -> Result<(), MinerError> {
    utils::init_logging();

    let opts = Options::parse();

    // Everything fatal is resolved here, before a single worker exists.
    let algorithm = algorithm::create(opts.algorithm)?;
    let engine = SearchEngine::new(algorithm, opts.workers)?;

    let params = TemplateParams {
        timestamp: opts.timestamp.clone(),
        pubkey: opts.pubkey.clone(),
        time: opts.time(),
        bits: opts.bits(),
        nonce: opts.nonce,
        value: opts.value,
    };
    let template = BlockTemplate::build(&params)?;

    print_block_info(&opts, &params, &template);

    let target = Target::from_compact(params.bits);
    let result = engine.search(template.header(), target, opts.nonce)?;

    announce_found_genesis(&result);
    Ok(())
}

/// Prints the block parameters the search is about to run with.
fn print_block_info(opts: &Options, params: &TemplateParams, template: &BlockTemplate) {
    println!("{}", template.input_script_hex());
    println!("algorithm: {}", opts.algorithm);
    println!("merkle hash: {}", template.merkle_root_hex());
    println!("pszTimestamp: {}", params.timestamp);
    println!("pubkey: {}", params.pubkey);
    println!("time: {}", params.time);
    println!("bits: {:#x}", params.bits);
}

/// Prints the search result.
fn announce_found_genesis(result: &HashResult) {
    println!("\ngenesis hash found!");
    println!("nonce: {}", result.nonce);
    println!("genesis hash: {}", hex::encode(result.canonical_digest));
}
