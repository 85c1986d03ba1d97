//! Tests for the sparse container and the merge combinator.
//! Run with: cargo test --test sparse

use sparsepower::{merge_with, Key, Semiring, SparseWeightVec, TropicalWeight};

type W = TropicalWeight<f64>;
type V = SparseWeightVec<W>;

fn t(value: f64) -> W {
    TropicalWeight(value)
}

#[test]
fn test_construction_normalizes() {
    // Out-of-order pairs with an explicit Zero in the middle
    let v = V::from_pairs([(5, t(1.0)), (1, t(2.0)), (3, W::zero())]);

    let keys: Vec<i32> = v.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec![1, 5]);
    assert!(v.value(3).is_zero());
}

#[test]
fn test_equality_ignores_insertion_order() {
    let a = V::from_pairs([(1, t(2.0)), (2, t(3.0))]);
    let b = V::from_pairs([(2, t(3.0)), (1, t(2.0))]);
    assert_eq!(a, b);
}

#[test]
fn test_identity_vectors() {
    // Zero, One, and NoWeight are all empty but pairwise distinct
    assert!(V::zero().is_empty());
    assert!(V::one().is_empty());
    assert!(V::no_weight().is_empty());
    assert_ne!(V::zero(), V::one());
    assert_ne!(V::zero(), V::no_weight());
    assert_ne!(V::one(), V::no_weight());
}

#[test]
fn test_merge_disjoint_overlapping_identical() {
    let w1 = V::from_pairs([(1, t(2.0)), (2, t(5.0))]);
    let w2 = V::from_pairs([(1, t(3.0)), (3, t(1.0))]);

    // Overlapping
    let sum = merge_with(&w1, &w2, |_, a, b| a.plus(b));
    assert_eq!(
        sum.iter().map(|(k, v)| (k, *v)).collect::<Vec<_>>(),
        vec![(1, t(2.0)), (2, t(5.0)), (3, t(1.0))]
    );

    // Identical key sets
    let doubled = merge_with(&w1, &w1, |_, a, b| a.times(b));
    assert_eq!(
        doubled.iter().map(|(k, v)| (k, *v)).collect::<Vec<_>>(),
        vec![(1, t(4.0)), (2, t(10.0))]
    );

    // Disjoint key sets
    let w3 = V::from_pairs([(7, t(0.5))]);
    let union = merge_with(&w1, &w3, |_, a, b| a.plus(b));
    assert_eq!(union.len(), 3);
}

#[test]
fn test_merge_canonical_regardless_of_operand_order() {
    let w1 = V::from_pairs([(4, t(1.0)), (1, t(2.0))]);
    let w2 = V::from_pairs([(2, t(3.0))]);

    let ab = merge_with(&w1, &w2, |_, a, b| a.plus(b));
    let ba = merge_with(&w2, &w1, |_, a, b| a.plus(b));
    assert_eq!(ab, ba);

    let keys: Vec<i32> = ab.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec![1, 2, 4]);
}

#[test]
fn test_merge_passes_reserved_key_for_default_slot() {
    let w1 = V::from_default(t(1.0));
    let w2 = V::from_default(t(2.0));

    let mut default_key = None;
    let merged = merge_with(&w1, &w2, |k, a, b| {
        default_key = Some(k);
        a.times(b)
    });
    assert_eq!(default_key, Some(<i32 as Key>::NO_KEY));
    assert_eq!(merged.default_value(), &t(3.0));
}

#[test]
fn test_sentinel_values_never_suppressed() {
    let w1 = V::from_pairs([(1, t(2.0))]);
    let w2 = V::zero();

    // Force an invalid value on a coordinate: it must stay materialized
    // even though the merge also produces an invalid default
    let merged = merge_with(&w1, &w2, |_, a, b| a.divide(b, Default::default()));
    assert!(!merged.default_value().is_member());
    assert_eq!(merged.len(), 1);
    assert!(!merged.value(1).is_member());
}

#[test]
fn test_member_checks_all_coordinates() {
    let mut v = V::from_pairs([(1, t(2.0))]);
    assert!(v.is_member());
    v.push(2, W::no_weight());
    assert!(!v.is_member());
}
