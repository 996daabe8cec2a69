// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the shared permutation cache.
//!
//! Several contexts on several threads share one cache. Racing first
//! accesses must leave exactly one entry per length.

use integer_refactor::{enumerate, PermutationCache, RefactorContext};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_concurrent_population_is_idempotent() {
    const THREADS: usize = 8;
    let cache = Arc::new(PermutationCache::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                cache.lookup(6)
            })
        })
        .collect();

    let lookups: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(lookups.iter().filter(|lookup| lookup.populated).count(), 1);
    let winner = &lookups[0].permutations;
    for lookup in &lookups {
        assert!(Arc::ptr_eq(winner, &lookup.permutations));
    }
    assert_eq!(cache.lengths(), vec![6]);
    assert_eq!(winner.to_vec(), enumerate(6));
}

#[test]
fn test_contexts_on_threads_share_enumerations() {
    let cache = Arc::new(PermutationCache::new());

    let handles: Vec<_> = (0..4u64)
        .map(|worker| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let mut ctx = RefactorContext::with_cache(cache);
                (1..=2000u64)
                    .filter(|n| n % 4 == worker)
                    .map(|n| ctx.refactor(n).map(|result| result.refactors.len()))
                    .collect::<Result<Vec<_>, _>>()
            })
        })
        .collect();

    for handle in handles {
        let counts = handle.join().unwrap().unwrap();
        assert!(counts.iter().all(|&count| count >= 1));
    }

    // Factors of integers up to 2000 have at most four digits
    assert!(cache.lengths().iter().all(|&length| (2..=4).contains(&length)));
}

#[test]
fn test_cache_survives_context() {
    let cache = Arc::new(PermutationCache::new());
    {
        let mut ctx = RefactorContext::with_cache(Arc::clone(&cache));
        ctx.refactor(26).unwrap();
    }
    assert_eq!(cache.lengths(), vec![2]);
    assert_eq!(cache.get(2).unwrap().len(), 2);
}
