//! Throughput benchmarks: aging-lfu vs Moka vs QuickCache.
//!
//! Each group benchmarks the same workload across all three caches so
//! criterion can generate side-by-side HTML reports.  aging-lfu is
//! single-threaded, so only single-threaded workloads are compared.
//!
//! Run with:
//!     cargo bench --bench throughput

use aging_lfu::{ManualClock, WeightedAgingLfuCache};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use moka::sync::Cache as MokaCache;
use quick_cache::sync::Cache as QuickCache;
use std::time::Duration;

/// Number of entries each cache is pre-filled with and its logical capacity.
const CAP: u64 = 10_000;

/// Operations executed per criterion iteration (hot-loop size).
const OPS: u64 = 1_000;

fn filled(cap: u64) -> WeightedAgingLfuCache<u64, u64> {
    let mut cache = WeightedAgingLfuCache::new(cap);
    for i in 0..cap {
        let _ = cache.put(i, i * 2);
    }
    cache
}

// ---------------------------------------------------------------------------
// Group 1: get_hit
// ---------------------------------------------------------------------------
// All keys are present → measures read throughput including repositioning.

fn bench_get_hit(c: &mut Criterion) {
    let mut lfu = filled(CAP);

    let moka: MokaCache<u64, u64> = MokaCache::new(CAP);
    for i in 0..CAP {
        moka.insert(i, i * 2);
    }

    let qc: QuickCache<u64, u64> = QuickCache::new(CAP as usize);
    for i in 0..CAP {
        qc.insert(i, i * 2);
    }

    let mut group = c.benchmark_group("get_hit");
    group.throughput(Throughput::Elements(OPS));

    group.bench_function("aging_lfu", |b| {
        b.iter(|| {
            for i in 0..OPS {
                let _ = black_box(lfu.get(black_box(&i)));
            }
        })
    });

    group.bench_function("moka", |b| {
        b.iter(|| {
            for i in 0..OPS {
                black_box(moka.get(black_box(&i)));
            }
        })
    });

    group.bench_function("quick_cache", |b| {
        b.iter(|| {
            for i in 0..OPS {
                black_box(qc.get(black_box(&i)));
            }
        })
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Group 2: insert_evicting
// ---------------------------------------------------------------------------
// Sequential inserts of always-new keys, so every put must evict.

fn bench_insert_evicting(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_evicting");
    group.throughput(Throughput::Elements(OPS));

    group.bench_function("aging_lfu", |b| {
        let mut cache: WeightedAgingLfuCache<u64, u64> = WeightedAgingLfuCache::new(CAP);
        let mut key = 0u64;
        b.iter(|| {
            for _ in 0..OPS {
                let _ = cache.put(black_box(key), black_box(key));
                key = key.wrapping_add(1);
            }
        })
    });

    group.bench_function("moka", |b| {
        let cache: MokaCache<u64, u64> = MokaCache::new(CAP);
        let mut key = 0u64;
        b.iter(|| {
            for _ in 0..OPS {
                cache.insert(black_box(key), black_box(key));
                key = key.wrapping_add(1);
            }
        })
    });

    group.bench_function("quick_cache", |b| {
        let cache: QuickCache<u64, u64> = QuickCache::new(CAP as usize);
        let mut key = 0u64;
        b.iter(|| {
            for _ in 0..OPS {
                cache.insert(black_box(key), black_box(key));
                key = key.wrapping_add(1);
            }
        })
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Group 3: mixed_80r_20w
// ---------------------------------------------------------------------------
// 80 % reads, 20 % writes, working set = 2× capacity (produces eviction).
// Keys cycle with a prime step to vary the access pattern.

fn bench_mixed_80r_20w(c: &mut Criterion) {
    const WORKING_SET: u64 = CAP * 2;
    const STEP: u64 = 7_919; // prime

    let mut group = c.benchmark_group("mixed_80r_20w");
    group.throughput(Throughput::Elements(OPS));

    group.bench_function("aging_lfu", |b| {
        let mut cache = filled(CAP);
        let mut cursor = 0u64;
        b.iter(|| {
            for i in 0..OPS {
                let k = cursor % WORKING_SET;
                if i % 5 == 0 {
                    let _ = cache.put(black_box(k), black_box(k));
                } else {
                    let _ = black_box(cache.get(black_box(&k)));
                }
                cursor = cursor.wrapping_add(STEP);
            }
        })
    });

    group.bench_function("moka", |b| {
        let cache: MokaCache<u64, u64> = MokaCache::new(CAP);
        for i in 0..CAP {
            cache.insert(i, i);
        }
        let mut cursor = 0u64;
        b.iter(|| {
            for i in 0..OPS {
                let k = cursor % WORKING_SET;
                if i % 5 == 0 {
                    cache.insert(black_box(k), black_box(k));
                } else {
                    black_box(cache.get(black_box(&k)));
                }
                cursor = cursor.wrapping_add(STEP);
            }
        })
    });

    group.bench_function("quick_cache", |b| {
        let cache: QuickCache<u64, u64> = QuickCache::new(CAP as usize);
        for i in 0..CAP {
            cache.insert(i, i);
        }
        let mut cursor = 0u64;
        b.iter(|| {
            for i in 0..OPS {
                let k = cursor % WORKING_SET;
                if i % 5 == 0 {
                    cache.insert(black_box(k), black_box(k));
                } else {
                    black_box(cache.get(black_box(&k)));
                }
                cursor = cursor.wrapping_add(STEP);
            }
        })
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Group 4: decay_pass
// ---------------------------------------------------------------------------
// Every get lands after a full decay interval, so each one pays for an
// O(n) aging pass over a full cache.

fn bench_decay_pass(c: &mut Criterion) {
    let clock = ManualClock::new();
    let mut cache: WeightedAgingLfuCache<u64, u64> = WeightedAgingLfuCache::builder(CAP)
        .decay_interval(Duration::from_secs(1))
        .clock(clock.clone())
        .build();
    for i in 0..CAP {
        let _ = cache.put_with(i, i, 1, u64::MAX);
    }

    let mut group = c.benchmark_group("decay_pass");
    group.throughput(Throughput::Elements(CAP));
    group.bench_function("aging_lfu", |b| {
        let mut key = 0u64;
        b.iter(|| {
            clock.advance(Duration::from_secs(1));
            let _ = black_box(cache.get(black_box(&(key % CAP))));
            key = key.wrapping_add(1);
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_get_hit,
    bench_insert_evicting,
    bench_mixed_80r_20w,
    bench_decay_pass,
);
criterion_main!(benches);
