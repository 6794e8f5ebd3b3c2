// src/stats/reporter.rs
//! Periodic hashrate/ETA reporting for a running search.

use crate::miner::target::Target;
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Expected attempts when the target decodes to zero and the real figure
/// (2^256 / target) is undefined.
const FALLBACK_EXPECTED_HASHES: f64 = 4_294_967_296.0; // 2^32

/// Periodic monitor reading the engine's shared attempt counter
///
/// Each tick reads-and-resets the counter, computes the instantaneous rate
/// and rewrites a single stderr line with rate, elapsed wall-clock time and
/// the ETA derived from the target difficulty. The engine joins the handle
/// returned by [`start`](Self::start) before returning to its caller, so no
/// telemetry can race past process exit.
pub struct HashrateReporter {
    /// Attempt counter shared with the workers, reset on every tick
    hash_count: Arc<AtomicU64>,
    /// Stop flag shared with the engine
    stop: Arc<AtomicBool>,
    /// Attempts a search at this difficulty needs on average
    expected_hashes: f64,
    /// Interval at which the counter is sampled
    report_interval: Duration,
}

impl HashrateReporter {
    /// Creates a reporter for one search run
    ///
    /// The expected-attempt figure `2^256 / target` is computed here, once,
    /// with arbitrary-precision arithmetic.
    pub fn new(
        hash_count: Arc<AtomicU64>,
        stop: Arc<AtomicBool>,
        target: &Target,
        report_interval: Duration,
    ) -> Self {
        HashrateReporter {
            hash_count,
            stop,
            expected_hashes: expected_hashes(target),
            report_interval,
        }
    }

    /// Starts the monitor thread and returns its handle
    ///
    /// The thread exits within one report interval of the stop flag being
    /// raised; the caller is expected to join the handle.
    pub fn start(self) -> JoinHandle<()> {
        thread::spawn(move || {
            let started = Instant::now();
            let mut last_tick = Instant::now();

            loop {
                thread::sleep(self.report_interval);
                if self.stop.load(Ordering::Acquire) {
                    return;
                }

                let elapsed = last_tick.elapsed().as_secs_f64();
                if elapsed <= 0.0 {
                    continue;
                }

                // Read-and-reset: the next tick only sees attempts made
                // after this one.
                let count = self.hash_count.swap(0, Ordering::Relaxed);
                let rate = count as f64 / elapsed;
                last_tick = Instant::now();

                let line = if rate > 0.0 {
                    format!(
                        "{}, elapsed: {}, estimate: {}",
                        format_hashrate(rate),
                        format_duration(started.elapsed()),
                        format_duration(eta_duration(self.expected_hashes, rate))
                    )
                } else {
                    format!("0.00 h/s, elapsed: {}", format_duration(started.elapsed()))
                };

                // Trailing spaces clear leftovers from a longer line.
                eprint!("\r{:<60}", line);
            }
        })
    }
}

/// Time to exhaust the expected attempts at the current rate, saturating
/// at `Duration::MAX` when the figure does not fit a `Duration` (a target
/// of 1 needs ~2^256 attempts; nothing renders that many seconds).
fn eta_duration(expected_hashes: f64, rate: f64) -> Duration {
    Duration::try_from_secs_f64(expected_hashes / rate).unwrap_or(Duration::MAX)
}

/// Average attempts needed for a digest below `target`: `2^256 / target`,
/// or a fixed 2^32 when the target is zero.
pub fn expected_hashes(target: &Target) -> f64 {
    let target_int = target.to_biguint();
    if target_int.is_zero() {
        return FALLBACK_EXPECTED_HASHES;
    }

    let max_space: BigUint = BigUint::one() << 256u16;
    (max_space / target_int).to_f64().unwrap_or(f64::MAX)
}

/// Formats a hashrate with magnitude-scaled units.
pub fn format_hashrate(rate: f64) -> String {
    if rate >= 1_000_000.0 {
        format!("{:.2} mh/s", rate / 1_000_000.0)
    } else if rate >= 1_000.0 {
        format!("{:.2} kh/s", rate / 1_000.0)
    } else {
        format!("{:.2} h/s", rate)
    }
}

/// Formats a duration in adaptive units: seconds below one minute,
/// minutes+seconds below one hour, fractional hours otherwise.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs >= 3600 {
        format!("{:.1}h", d.as_secs_f64() / 3600.0)
    } else if secs >= 60 {
        format!("{}m{}s", secs / 60, secs % 60)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_hashes_zero_target_falls_back() {
        let target = Target::from_compact(0);
        assert_eq!(expected_hashes(&target), 4_294_967_296.0);
    }

    #[test]
    fn test_expected_hashes_genesis_difficulty() {
        // 2^256 / (0xffff << 208) = 2^48 / 0xffff, just above 2^32.
        let target = Target::from_compact(0x1d00ffff);
        let expected = expected_hashes(&target);
        let reference = 281_474_976_710_656.0 / 65_535.0;
        assert!((expected / reference - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_expected_hashes_scales_with_difficulty() {
        let easy = expected_hashes(&Target::from_compact(0x1e0ffff0));
        let hard = expected_hashes(&Target::from_compact(0x1d00ffff));
        assert!(hard > easy);
    }

    #[test]
    fn test_format_hashrate_units() {
        assert_eq!(format_hashrate(950.0), "950.00 h/s");
        assert_eq!(format_hashrate(1_500.0), "1.50 kh/s");
        assert_eq!(format_hashrate(2_500_000.0), "2.50 mh/s");
    }

    #[test]
    fn test_format_duration_adaptive_units() {
        assert_eq!(format_duration(Duration::from_secs(45)), "45s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m5s");
        assert_eq!(format_duration(Duration::from_secs(5400)), "1.5h");
    }

    #[test]
    fn test_counter_read_and_reset_semantics() {
        let counter = AtomicU64::new(0);
        counter.fetch_add(7, Ordering::Relaxed);

        assert_eq!(counter.swap(0, Ordering::Relaxed), 7);
        // Attempts after the tick are counted fresh.
        counter.fetch_add(3, Ordering::Relaxed);
        assert_eq!(counter.swap(0, Ordering::Relaxed), 3);
    }

    #[test]
    fn test_eta_duration_normal_case() {
        assert_eq!(
            eta_duration(4_000_000.0, 1_000.0),
            Duration::from_secs(4_000)
        );
    }

    #[test]
    fn test_eta_duration_saturates_for_astronomical_estimates() {
        // bits 0x03000001 decodes to a target of 1: the expected attempt
        // count is ~2^256 and cannot fit a Duration at any rate.
        let expected = expected_hashes(&Target::from_compact(0x03000001));
        let eta = eta_duration(expected, 1_000.0);

        assert_eq!(eta, Duration::MAX);
        // Rendering the saturated value must not panic either.
        assert!(format_duration(eta).ends_with('h'));
    }

    #[test]
    fn test_monitor_survives_astronomical_eta() {
        // A monitor tick with a target of 1 and a nonzero rate must report
        // a capped estimate, not die converting it.
        let counter = Arc::new(AtomicU64::new(1_000));
        let stop = Arc::new(AtomicBool::new(false));
        let target = Target::from_compact(0x03000001);
        let reporter = HashrateReporter::new(
            counter,
            stop.clone(),
            &target,
            Duration::from_millis(10),
        );

        let handle = reporter.start();
        thread::sleep(Duration::from_millis(50));
        stop.store(true, Ordering::Release);
        handle.join().unwrap();
    }

    #[test]
    fn test_reporter_stops_on_flag() {
        let counter = Arc::new(AtomicU64::new(0));
        let stop = Arc::new(AtomicBool::new(false));
        let target = Target::from_compact(0x1d00ffff);
        let reporter = HashrateReporter::new(
            counter,
            stop.clone(),
            &target,
            Duration::from_millis(10),
        );

        let handle = reporter.start();
        stop.store(true, Ordering::Release);
        handle.join().unwrap();
    }
}
