//! Replay Benchmarks
//!
//! Building the fixture for case `i` replays every shared setup before it,
//! so cost grows with the position of the case. These benchmarks track:
//! - Building the last case as the registry grows
//! - A full runner pass (build every case once)
//! - Enumeration alone, without building
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench replay
//! cargo bench --bench replay -- "replay/last_case"
//! ```

use casechain::CaseRegistry;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// =============================================================================
// Constants and Configuration
// =============================================================================

/// Registry sizes for scaling benchmarks.
const CASE_COUNTS: &[usize] = &[1, 10, 100, 1000];

// =============================================================================
// Helper Functions
// =============================================================================

#[derive(Default)]
struct Counters {
    values: Vec<u64>,
}

fn registry_with(cases: usize) -> CaseRegistry<Counters, u64, usize> {
    let mut registry: CaseRegistry<Counters, u64, usize> = CaseRegistry::new();
    for i in 0..cases {
        registry
            .register(format!("case-{}", i))
            .with_shared_setup(move |_, sut, total| {
                sut.values.push(i as u64);
                *total += i as u64;
            })
            .with_own_setup(|_, _, total| *total += 1)
            .with_assertion(i);
    }
    registry
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_last_case(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay/last_case");
    for &count in CASE_COUNTS {
        let registry = registry_with(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| black_box(registry.build(count - 1).map(|fixture| fixture.state)))
        });
    }
    group.finish();
}

fn bench_full_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay/full_pass");
    for &count in CASE_COUNTS {
        let registry = registry_with(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &registry, |b, registry| {
            b.iter(|| {
                let mut total = 0u64;
                for (_, builder) in registry {
                    total = total.wrapping_add(builder.build().state);
                }
                black_box(total)
            })
        });
    }
    group.finish();
}

fn bench_enumerate(c: &mut Criterion) {
    let registry = registry_with(1000);
    c.bench_function("replay/enumerate_only", |b| {
        b.iter(|| black_box(registry.cases().map(|(name, _)| name.len()).sum::<usize>()))
    });
}

criterion_group!(benches, bench_last_case, bench_full_pass, bench_enumerate);
criterion_main!(benches);
