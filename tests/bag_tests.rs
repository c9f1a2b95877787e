//! Bag randomizer tests

use std::collections::HashSet;

use pixel_tetris::core::Bag;
use pixel_tetris::types::Shape;

#[test]
fn test_seven_draws_deal_every_shape_once() {
    for seed in [1, 42, 12345, u32::MAX] {
        let mut bag = Bag::new(seed);
        let dealt: HashSet<Shape> = (0..7).map(|_| bag.next()).collect();
        assert_eq!(dealt.len(), 7, "seed {}", seed);
        assert!(bag.cycle_complete());
    }
}

#[test]
fn test_every_cycle_is_a_permutation() {
    let mut bag = Bag::new(987);
    for cycle in 0..20 {
        let dealt: HashSet<Shape> = (0..7).map(|_| bag.next()).collect();
        assert_eq!(dealt.len(), 7, "cycle {}", cycle);
    }
}

#[test]
fn test_same_seed_same_sequence() {
    let mut a = Bag::new(2024);
    let mut b = Bag::new(2024);
    let seq_a: Vec<Shape> = (0..21).map(|_| a.next()).collect();
    let seq_b: Vec<Shape> = (0..21).map(|_| b.next()).collect();
    assert_eq!(seq_a, seq_b);
}

#[test]
fn test_restricted_shape_set() {
    let mut bag = Bag::with_shapes(&[Shape::T, Shape::I, Shape::T], 5);
    let dealt: Vec<Shape> = (0..6).map(|_| bag.next()).collect();

    assert!(dealt.iter().all(|s| matches!(s, Shape::I | Shape::T)));
    for pair in dealt.chunks(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn test_remaining_shrinks_within_a_cycle() {
    let mut bag = Bag::new(77);
    assert_eq!(bag.remaining().count(), 7);

    let first = bag.next();
    assert_eq!(bag.remaining().count(), 6);
    assert!(bag.remaining().all(|s| s != first));
}
