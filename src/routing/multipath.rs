//! Multipath optimizer (§4.4, C7): routes several (start, end) pairs
//! successively, each reusing the cells of every path routed before it.

use std::collections::{HashMap, HashSet};

use crate::geometry::{BoundingBox, Point};

use super::router::route;

/// Route every pair in `pairs`, cheapest-Manhattan-distance-first, each
/// reusing earlier paths' cells for free. Not globally optimal — the
/// greedy contract is the documented behaviour (§4.4), not a defect.
/// Ties in the cheapest-first estimate prefer the smaller original index.
pub fn multipath(
    pairs: &[(Point, Point)],
    blocked: &HashSet<Point>,
    penalty: &HashMap<Point, u32>,
    bend_penalty: u32,
    bbox: BoundingBox,
) -> Vec<Option<Vec<Point>>> {
    let mut results: Vec<Option<Vec<Point>>> = vec![None; pairs.len()];
    let mut free_set: HashSet<Point> = HashSet::new();
    let mut remaining: Vec<usize> = (0..pairs.len()).collect();

    while !remaining.is_empty() {
        let mut best_pos = 0;
        let mut best_estimate = i64::MAX;
        for (pos, &i) in remaining.iter().enumerate() {
            let (s, e) = pairs[i];
            let estimate = s.manhattan_distance(e);
            if estimate < best_estimate {
                best_estimate = estimate;
                best_pos = pos;
            }
        }
        let i = remaining.remove(best_pos);
        let (start, end) = pairs[i];
        let path = route(
            start,
            end,
            blocked,
            penalty,
            &free_set,
            bend_penalty,
            bbox,
            None,
            None,
        );
        if let Some(cells) = &path {
            free_set.extend(cells.iter().copied());
        }
        results[i] = path;
    }

    results
}

#[cfg(test)]
#[path = "../../tests/rust/test_multipath.rs"]
mod tests;
