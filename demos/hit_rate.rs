//! Hit-rate comparison under a shifting hot set.
//!
//! A Zipf(s=1.0) trace is replayed in two phases.  Halfway through, the key
//! ranks are rotated so the previously hot keys go cold.  A plain LFU keeps
//! the stale favourites pinned by their old counts; with decay enabled the
//! old counts fade and the new hot set gets admitted.  Moka runs the same
//! trace as a reference point.
//!
//! Time is simulated: every access advances a manual clock by one
//! millisecond, so the run is deterministic.
//!
//! Run with:
//!     RUST_LOG=aging_lfu=debug cargo run --example hit_rate --release

use aging_lfu::{ManualClock, WeightedAgingLfuCache};
use moka::sync::Cache as MokaCache;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Cache capacity (number of unit-weight entries each cache may hold).
const CAP: usize = 1_000;
/// Key universe size.
const POOL: usize = 50_000;
/// Number of accesses per phase.
const PHASE: usize = 100_000;
/// Simulated time between two accesses.
const TICK: Duration = Duration::from_millis(1);

struct Xorshift64(u64);

impl Xorshift64 {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    /// Uniform float in (0, 1].
    fn uniform(&mut self) -> f64 {
        let bits = self.next() >> 11;
        (bits + 1) as f64 / (1u64 << 53) as f64
    }

    /// Zipf(s=1) rank in [0, pool), via k = pool^u.
    fn zipf(&mut self, pool: usize) -> usize {
        let k = (pool as f64).powf(self.uniform()) as usize;
        k.saturating_sub(1).min(pool - 1)
    }
}

/// Two phases over the same distribution; the second maps rank `r` to a
/// different key so yesterday's hot keys are never asked for again.
fn generate_trace(seed: u64) -> Vec<usize> {
    let mut rng = Xorshift64(seed);
    let mut trace: Vec<usize> = (0..PHASE).map(|_| rng.zipf(POOL)).collect();
    trace.extend((0..PHASE).map(|_| rng.zipf(POOL) + POOL));
    trace
}

fn run_aging_lfu(trace: &[usize], decay_interval: Duration) -> (usize, Duration) {
    let clock = ManualClock::new();
    let mut cache: WeightedAgingLfuCache<usize, usize> = WeightedAgingLfuCache::builder(CAP as u64)
        .decay_interval(decay_interval)
        .clock(clock.clone())
        .build();
    let start = Instant::now();
    let mut hits = 0usize;
    for &key in trace {
        clock.advance(TICK);
        if cache.get(&key).is_ok() {
            hits += 1;
        } else if let Err(err) = cache.put(key, key) {
            tracing::warn!(%err, "put failed");
        }
    }
    (hits, start.elapsed())
}

fn run_moka(trace: &[usize]) -> (usize, Duration) {
    let cache: MokaCache<usize, usize> = MokaCache::new(CAP as u64);
    let start = Instant::now();
    let mut hits = 0usize;
    for &key in trace {
        if cache.get(&key).is_some() {
            hits += 1;
        } else {
            cache.insert(key, key);
        }
    }
    (hits, start.elapsed())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("aging-lfu hit rate under a shifting Zipf(s = 1.0) workload");
    println!();
    println!("  Key universe : {POOL:>10} keys per phase");
    println!("  Capacity     : {CAP:>10} entries");
    println!("  Trace length : {:>10} accesses (2 phases)", PHASE * 2);
    println!();

    let trace = generate_trace(0xDEAD_BEEF_1234_5678);

    println!(
        "{:<24} {:>10} {:>10} {:>10}",
        "Cache", "Hits", "Hit Rate", "Time (ms)"
    );
    println!("{}", "-".repeat(57));

    let print_row = |name: &str, hits: usize, elapsed: Duration| {
        println!(
            "{:<24} {:>10} {:>9.2}% {:>10}",
            name,
            hits,
            hits as f64 / trace.len() as f64 * 100.0,
            elapsed.as_millis(),
        );
    };

    let (hits, elapsed) = run_aging_lfu(&trace, Duration::from_secs(2));
    print_row("aging-lfu (decay 2s)", hits, elapsed);

    let (hits, elapsed) = run_aging_lfu(&trace, Duration::from_secs(30));
    print_row("aging-lfu (decay 30s)", hits, elapsed);

    let (hits, elapsed) = run_aging_lfu(&trace, Duration::from_secs(1 << 40));
    print_row("aging-lfu (no decay)", hits, elapsed);

    let (hits, elapsed) = run_moka(&trace);
    print_row("moka", hits, elapsed);
}
