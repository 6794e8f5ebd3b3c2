// src/miner/worker.rs
//! Worker thread implementation
//!
//! Each worker owns a private copy of the 80-byte header and walks its own
//! residue class of the 32-bit nonce space: worker `i` of `W` tries
//! `start + i, start + i + W, start + i + 2W, …` with wrapping arithmetic,
//! so the workers jointly cover the space with no overlap and no gap.

use crate::block::header::{HEADER_LEN, NONCE_OFFSET};
use crate::miner::algorithm::Algorithm;
use crate::miner::engine::HashResult;
use crate::miner::target::Target;
use crossbeam_channel::Sender;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Worker thread state for one residue class of the nonce space
pub struct Worker {
    /// Private header buffer; only the trailing nonce bytes are rewritten
    header: [u8; HEADER_LEN],
    /// The proof-of-work strategy shared by all workers
    algorithm: Arc<dyn Algorithm>,
    /// First nonce this worker tries
    first_nonce: u32,
    /// Distance between consecutive nonces (the worker count)
    stride: u32,
    /// Difficulty threshold the pow digest must fall below
    target: Target,
    /// Single-slot rendezvous back to the engine
    result_sender: Sender<HashResult>,
    /// Cooperative cancellation flag, set by the engine on first result
    stop: Arc<AtomicBool>,
    /// Shared attempt counter read by the hashrate monitor
    hash_count: Arc<AtomicU64>,
}

impl Worker {
    /// Creates a worker for residue class `worker_id` of `stride` classes.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        worker_id: usize,
        header: [u8; HEADER_LEN],
        algorithm: Arc<dyn Algorithm>,
        start_nonce: u32,
        stride: u32,
        target: Target,
        result_sender: Sender<HashResult>,
        stop: Arc<AtomicBool>,
        hash_count: Arc<AtomicU64>,
    ) -> Self {
        Worker {
            header,
            algorithm,
            first_nonce: start_nonce.wrapping_add(worker_id as u32),
            stride,
            target,
            result_sender,
            stop,
            hash_count,
        }
    }

    /// Runs the search loop until a qualifying digest is found or the stop
    /// flag is observed.
    ///
    /// A qualifying result is published with a non-blocking `try_send`; if
    /// the slot is already taken by another winner the result is dropped
    /// and the worker exits. Nonce wraparound is not detected: with an
    /// unsatisfiable target the loop spins until cancelled.
    pub fn run(mut self) {
        let mut nonce = self.first_nonce;

        while !self.stop.load(Ordering::Acquire) {
            self.header[NONCE_OFFSET..].copy_from_slice(&nonce.to_le_bytes());

            match self.algorithm.digests(&self.header) {
                Ok(digests) => {
                    self.hash_count.fetch_add(1, Ordering::Relaxed);

                    if self.target.is_met_by(&digests.pow) {
                        let _ = self.result_sender.try_send(HashResult {
                            nonce,
                            canonical_digest: digests.canonical,
                            pow_digest: digests.pow,
                        });
                        return;
                    }
                }
                Err(e) => log::error!("Hashing error: {}", e),
            }

            nonce = nonce.wrapping_add(self.stride);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The class a nonce belongs to under the worker striding scheme.
    fn owning_worker(nonce: u32, start: u32, workers: u32) -> u32 {
        nonce.wrapping_sub(start) % workers
    }

    #[test]
    fn test_residue_classes_partition_nonce_space() {
        // Every nonce in a sampled window maps to exactly one worker, and
        // that worker's sequence actually visits it.
        for workers in [1u32, 3, 8] {
            let start = 0xfffffff0u32; // crosses the 2^32 boundary
            for offset in 0..1000u32 {
                let nonce = start.wrapping_add(offset);
                let owner = owning_worker(nonce, start, workers);
                assert!(owner < workers);

                let step = offset / workers;
                let visited = start
                    .wrapping_add(owner)
                    .wrapping_add(step.wrapping_mul(workers));
                assert_eq!(visited, nonce);
            }
        }
    }

    #[test]
    fn test_first_nonces_are_distinct_per_worker() {
        let workers = 16u32;
        let start = 12345u32;
        let firsts: Vec<u32> = (0..workers).map(|i| start.wrapping_add(i)).collect();

        for (i, a) in firsts.iter().enumerate() {
            for b in &firsts[i + 1..] {
                assert_ne!(a, b);
            }
            assert_eq!(owning_worker(*a, start, workers), i as u32);
        }
    }
}
