//! B-tree integration tests.
//!
//! These exercise the public surface only: construction, insertion,
//! search, rendering, and the structural self-check. Worst-case split
//! cascades come from degree 3, the minimum branching factor.

use memtree::{BTree, Error};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

const ITEMS: i32 = 1000;

/// Insert 1000 ascending items for every degree from 3 to 14.
#[test]
fn test_ascending_inserts_across_degrees() {
    for degree in 3..15 {
        let mut tree = BTree::new(degree).unwrap();

        for item in 0..ITEMS {
            tree.insert(item);
        }

        assert!(tree.is_valid(), "invalid tree at degree {}", degree);
        for item in 0..ITEMS {
            assert!(tree.search(&item));
        }
        assert!(!tree.search(&ITEMS));
        assert!(!tree.search(&-1));
    }
}

/// Insert 1000 descending items for every degree from 3 to 14.
#[test]
fn test_descending_inserts_across_degrees() {
    for degree in 3..15 {
        let mut tree = BTree::new(degree).unwrap();

        for item in (1..=ITEMS).rev() {
            tree.insert(item);
        }

        assert!(tree.is_valid(), "invalid tree at degree {}", degree);
        for item in 1..=ITEMS {
            assert!(tree.search(&item));
        }
        assert!(!tree.search(&0));
    }
}

/// Insert 1000 distinct random values for several seeds and degrees.
#[test]
fn test_random_inserts_across_seeds_and_degrees() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);

        for degree in 3..15 {
            let mut tree = BTree::new(degree).unwrap();
            let mut inserted = HashSet::new();

            while inserted.len() < ITEMS as usize {
                let value: i32 = rng.gen_range(0..100_000);
                if inserted.insert(value) {
                    tree.insert(value);
                }
            }

            assert!(
                tree.is_valid(),
                "invalid tree at degree {} seed {}",
                degree,
                seed
            );

            for value in &inserted {
                assert!(tree.search(value));
            }
            // Everything outside the generated range is absent.
            for value in [-1, 100_000, 250_000] {
                assert!(!tree.search(&value));
            }
        }
    }
}

/// Degree 5 with a random permutation of 1000 distinct integers.
#[test]
fn test_random_permutation_membership() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut values: Vec<i32> = (0..ITEMS).map(|i| i * 2).collect();
    values.shuffle(&mut rng);

    let mut tree = BTree::new(5).unwrap();
    for &value in &values {
        tree.insert(value);
    }

    assert!(tree.is_valid());
    for &value in &values {
        assert!(tree.search(&value));
    }
    // The odd numbers form a disjoint sample.
    for i in 0..ITEMS {
        assert!(!tree.search(&(i * 2 + 1)));
    }
}

/// Degree 3 maximizes split-cascade frequency; 1000 inserts must not
/// blow the stack and must leave a well-formed tree.
#[test]
fn test_minimum_degree_cascade_stress() {
    let mut tree = BTree::new(3).unwrap();
    for item in 0..ITEMS {
        tree.insert(item);
    }

    let stats = tree.stats();
    assert_eq!(stats.keys_inserted, ITEMS as u64);
    assert!(stats.node_splits > 0);
    assert!(stats.root_splits > 1);
    assert!(tree.is_valid());
    assert!(tree.search(&999));
    assert!(!tree.search(&1000));
}

/// Construction with a degree below 3 fails before any insertion.
#[test]
fn test_degree_two_is_rejected() {
    for degree in 0..3 {
        match BTree::<i32>::new(degree) {
            Err(Error::DegreeTooSmall(got)) => assert_eq!(got, degree),
            Ok(_) => panic!("degree {} should be rejected", degree),
        }
    }
}

/// Duplicate keys are allowed and do not break the structure.
///
/// Ties resolve through the split child's own slot on both descent and
/// median promotion, so a run of equal keys may straddle separators
/// without losing any distinct key. This pins the current behavior
/// rather than mandating it.
#[test]
fn test_duplicates_survive_cascades() {
    let mut tree = BTree::new(3).unwrap();
    for _ in 0..200 {
        tree.insert(5);
    }
    for item in 0..20 {
        tree.insert(item);
    }

    assert!(tree.is_valid());
    assert!(tree.search(&5));
    assert!(tree.search(&19));
    assert!(!tree.search(&20));
}

/// Repeated searches leave the tree bit-for-bit identical.
#[test]
fn test_search_is_idempotent() {
    let mut tree = BTree::new(4).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        tree.insert(rng.gen_range(0..10_000i32));
    }

    let before = tree.render();
    let height = tree.height();

    for value in 0..10_000 {
        let first = tree.search(&value);
        let second = tree.search(&value);
        assert_eq!(first, second);
    }

    assert_eq!(tree.render(), before);
    assert_eq!(tree.height(), height);
}

/// The rendered dump matches the actual shape of a small known tree.
#[test]
fn test_render_matches_shape() {
    let mut tree = BTree::new(3).unwrap();
    for item in [10, 20, 30] {
        tree.insert(item);
    }

    assert_eq!(tree.render(), "Keys: [ 20 ]\n  Keys: [ 10 ]\n  Keys: [ 30 ]\n");
}
