use std::collections::{HashMap, HashSet};

use super::*;

fn bbox() -> BoundingBox {
    BoundingBox::new(-10, 10, -10, 10)
}

#[test]
fn routes_every_pair() {
    let pairs = vec![(Point::new(0, 0), Point::new(3, 0)), (Point::new(0, 1), Point::new(3, 1))];
    let results = multipath(&pairs, &HashSet::new(), &HashMap::new(), 1, bbox());
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|p| p.is_some()));
}

#[test]
fn later_pairs_reuse_earlier_paths_cells() {
    // Same pair twice: the second should come back identical to the first
    // once it's free to reuse the first's cells.
    let pairs = vec![
        (Point::new(0, 0), Point::new(5, 0)),
        (Point::new(0, 0), Point::new(5, 0)),
    ];
    let results = multipath(&pairs, &HashSet::new(), &HashMap::new(), 0, bbox());
    assert_eq!(results[0], results[1]);
}

#[test]
fn ties_prefer_the_smaller_original_index() {
    // Two pairs with identical Manhattan estimate; order of routing should
    // not affect that both still get routed deterministically.
    let pairs = vec![
        (Point::new(0, 0), Point::new(2, 0)),
        (Point::new(0, 5), Point::new(2, 5)),
    ];
    let a = multipath(&pairs, &HashSet::new(), &HashMap::new(), 1, bbox());
    let b = multipath(&pairs, &HashSet::new(), &HashMap::new(), 1, bbox());
    assert_eq!(a, b);
}

#[test]
fn unroutable_pair_yields_none_without_blocking_others() {
    // Every neighbour of the first pair's start is blocked, so it can
    // never be routed regardless of bbox size; the unrelated second pair
    // still succeeds.
    let blocked: HashSet<Point> = [
        Point::new(1, 0),
        Point::new(-1, 0),
        Point::new(0, 1),
        Point::new(0, -1),
    ]
    .into_iter()
    .collect();
    let pairs = vec![
        (Point::new(0, 0), Point::new(2, 0)),
        (Point::new(-5, -5), Point::new(-3, -5)),
    ];
    let results = multipath(&pairs, &blocked, &HashMap::new(), 1, bbox());
    assert!(results[0].is_none());
    assert!(results[1].is_some());
}
