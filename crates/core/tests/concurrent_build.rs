//! Concurrent fixture building
//!
//! Once registration is finished the registry is only read, so fixtures can
//! be built from several threads at once, the way a parallel test runner
//! would. Each build must still see only its own SUT and state.
//!
//! ## Running These Tests
//!
//! ```bash
//! cargo test -p casechain-core --test concurrent_build
//! ```

use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use casechain_core::CaseRegistry;

const CASES: usize = 16;
const THREADS: usize = 8;

fn prefix_registry(calls: Arc<AtomicUsize>) -> CaseRegistry<Vec<usize>, u64> {
    let mut registry: CaseRegistry<Vec<usize>, u64> = CaseRegistry::new();
    for i in 0..CASES {
        let calls = calls.clone();
        registry
            .register(format!("step-{}", i))
            .with_shared_setup(move |_, sut, sum| {
                calls.fetch_add(1, Ordering::Relaxed);
                sut.push(i);
                *sum += i as u64;
            });
    }
    registry
}

fn assert_send_sync<T: Send + Sync>(_: &T) {}

#[test]
fn test_registry_is_send_and_sync() {
    let registry = prefix_registry(Arc::new(AtomicUsize::new(0)));
    assert_send_sync(&registry);
}

#[test]
fn test_parallel_builds_are_isolated() {
    let calls = Arc::new(AtomicUsize::new(0));
    let registry = prefix_registry(calls.clone());
    let results = Mutex::new(Vec::new());
    let barrier = Barrier::new(THREADS);

    thread::scope(|scope| {
        for t in 0..THREADS {
            let registry = &registry;
            let results = &results;
            let barrier = &barrier;
            scope.spawn(move || {
                barrier.wait();
                for (_, builder) in registry.cases().skip(t % 2) {
                    let fixture = builder.build();
                    results.lock().push((builder.index(), fixture.sut, fixture.state));
                }
            });
        }
    });

    let results = results.into_inner();
    for (index, sut, sum) in &results {
        let expected: Vec<usize> = (0..=*index).collect();
        assert_eq!(sut, &expected);
        assert_eq!(*sum, expected.iter().map(|&i| i as u64).sum::<u64>());
    }

    // Every build replays its own prefix: index i costs i + 1 calls.
    let expected_calls: usize = results.iter().map(|(index, _, _)| index + 1).sum();
    assert_eq!(calls.load(Ordering::Relaxed), expected_calls);
}

#[test]
fn test_builders_moved_across_threads() {
    let registry = prefix_registry(Arc::new(AtomicUsize::new(0)));
    let builders: Vec<_> = registry.cases().map(|(_, builder)| builder).collect();

    let sums: Vec<u64> = thread::scope(|scope| {
        let handles: Vec<_> = builders
            .iter()
            .map(|builder| scope.spawn(move || builder.build().state))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    for (i, sum) in sums.iter().enumerate() {
        assert_eq!(*sum, (0..=i as u64).sum::<u64>());
    }
}
