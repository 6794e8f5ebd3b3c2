// src/miner/engine.rs
//! Parallel nonce search engine
//!
//! Spawns a fixed pool of worker threads that jointly cover the 32-bit
//! nonce space, plus a hashrate monitor, and blocks the caller until the
//! first worker publishes a qualifying result. The only state shared
//! between threads is an atomic attempt counter and a one-shot stop flag;
//! the capacity-1 result channel is the single ownership-transfer point.

use crate::block::header::BlockHeader;
use crate::miner::algorithm::Algorithm;
use crate::miner::target::Target;
use crate::miner::worker::Worker;
use crate::stats::HashrateReporter;
use crate::utils::error::MinerError;
use crossbeam_channel::bounded;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

/// How often the monitor thread samples the attempt counter.
const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// The outcome of a successful search: the winning nonce and both digests
/// computed for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashResult {
    /// Nonce that produced the qualifying digest
    pub nonce: u32,
    /// Byte-reversed double SHA256 of the winning header (the block hash)
    pub canonical_digest: [u8; 32],
    /// Algorithm-specific digest that satisfied the target
    pub pow_digest: [u8; 32],
}

/// Coordinates the proof-of-work search across worker threads
pub struct SearchEngine {
    algorithm: Arc<dyn Algorithm>,
    workers: usize,
}

impl SearchEngine {
    /// Creates a new engine
    ///
    /// # Errors
    /// `ConfigError` if `workers` is zero. Validation happens here, before
    /// any thread is spawned.
    pub fn new(algorithm: Arc<dyn Algorithm>, workers: usize) -> Result<Self, MinerError> {
        if workers == 0 {
            return Err(MinerError::ConfigError(
                "worker count must be at least 1".into(),
            ));
        }
        Ok(SearchEngine { algorithm, workers })
    }

    /// Searches for a nonce whose proof-of-work digest is strictly below
    /// the target
    ///
    /// Worker `i` tries nonces `start_nonce + i + k * workers` with
    /// wrapping arithmetic. The first worker to find a qualifying digest
    /// publishes it into a single-slot channel; every other worker observes
    /// the stop flag within one hash step and exits without publishing.
    /// All workers and the monitor are joined before this returns, on
    /// success and failure alike, so no thread of the search outlives the
    /// call.
    ///
    /// Full nonce-space wraparound is not detected: if no nonce satisfies
    /// the target this blocks forever. External cancellation would have to
    /// come through the same stop mechanism.
    pub fn search(
        &self,
        header: &BlockHeader,
        target: Target,
        start_nonce: u32,
    ) -> Result<HashResult, MinerError> {
        let hash_count = Arc::new(AtomicU64::new(0));
        let stop = Arc::new(AtomicBool::new(false));
        let (result_sender, result_receiver) = bounded::<HashResult>(1);

        log::info!(
            "Searching for genesis hash with {} workers ({})",
            self.workers,
            self.algorithm.algorithm_type()
        );

        let handles: Vec<_> = (0..self.workers)
            .map(|worker_id| {
                let worker = Worker::new(
                    worker_id,
                    *header.as_bytes(),
                    self.algorithm.clone(),
                    start_nonce,
                    self.workers as u32,
                    target,
                    result_sender.clone(),
                    stop.clone(),
                    hash_count.clone(),
                );
                thread::spawn(move || worker.run())
            })
            .collect();

        // The workers hold the remaining senders.
        drop(result_sender);

        let reporter =
            HashrateReporter::new(hash_count, stop.clone(), &target, REPORT_INTERVAL);
        let monitor = reporter.start();

        let received = result_receiver.recv();

        // Teardown runs on every exit path: the stop flag is raised and all
        // threads joined before any outcome is surfaced, so nothing from
        // the search outlives this call.
        stop.store(true, Ordering::Release);

        for handle in handles {
            if handle.join().is_err() {
                log::error!("Worker thread panicked");
            }
        }
        if monitor.join().is_err() {
            log::error!("Monitor thread panicked");
        }

        // A panicked worker or monitor is logged, not propagated: telemetry
        // and cleanup never turn a found nonce into an error.
        let result = received.map_err(|_| {
            MinerError::ChannelError("all workers exited without a result".into())
        })?;

        log::info!("Found qualifying nonce {}", result.nonce);
        Ok(result)
    }
}
