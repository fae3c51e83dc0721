//! The router (§4.2, C5): weighted A* over axis-aligned grid states,
//! carrying entry direction for bend-penalty accounting and a "free set"
//! discount for path reuse.
//!
//! Grounded on the corpus's own `layout/pathfinder.rs`: a
//! `BinaryHeap<(Reverse<f>, Reverse<counter>, ...)>` with a monotonically
//! increasing `counter` for deterministic tie-breaking, and a `came_from`
//! map for path reconstruction. Generalised from that file's binary
//! occupancy grid to a weighted cost field with bend penalties and the
//! free-set discount neither mermaid diagram needed.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::debug;

use crate::geometry::{BoundingBox, Direction, Point};

type State = (Point, Option<Direction>);

/// A heap entry ordered only by `(f, counter)` — `Direction` carries no
/// `Ord` impl of its own, so the rest of the payload rides along without
/// taking part in comparison.
struct HeapEntry {
    f: i64,
    counter: u64,
    p: Point,
    d_in: Option<Direction>,
    g: i64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.counter == other.counter
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f.cmp(&other.f).then(self.counter.cmp(&other.counter))
    }
}

/// Manhattan distance is admissible only while every step costs at least 1
/// (§4.2): once `free_set` is non-empty, a zero-cost detour through it can
/// undercut that bound, so the heuristic falls back to 0 rather than risk
/// returning a non-minimal path.
fn heuristic(p: Point, end: Point, free_set: &HashSet<Point>) -> i64 {
    if free_set.is_empty() {
        p.manhattan_distance(end)
    } else {
        0
    }
}

fn step_cost(
    p_prime: Point,
    d_in: Option<Direction>,
    d_out: Direction,
    penalty: &HashMap<Point, u32>,
    free_set: &HashSet<Point>,
    bend_penalty: u32,
) -> i64 {
    let base = 1 + *penalty.get(&p_prime).unwrap_or(&0) as i64;
    let bend = match d_in {
        Some(din) if din != d_out => bend_penalty as i64,
        _ => 0,
    };
    let mut cost = base + bend;
    if free_set.contains(&p_prime) {
        // Stepping into a free cell costs only the bend contribution.
        cost -= base;
    }
    cost
}

fn reconstruct(came_from: &HashMap<State, Option<State>>, mut state: State) -> Vec<Point> {
    let mut path = vec![state.0];
    while let Some(Some(prev)) = came_from.get(&state) {
        path.push(prev.0);
        state = *prev;
    }
    path.reverse();
    path
}

/// Weighted shortest path from `start` to `end`, axis-aligned, respecting
/// `blocked`, discounted by `free_set`, penalized by `penalty` and
/// `bend_penalty`, confined to `bbox`. Returns `None` if unroutable — never
/// an error (§7).
#[tracing::instrument(skip(blocked, penalty, free_set), fields(start = ?start, end = ?end, bbox = ?bbox))]
#[allow(clippy::too_many_arguments)]
pub fn route(
    start: Point,
    end: Point,
    blocked: &HashSet<Point>,
    penalty: &HashMap<Point, u32>,
    free_set: &HashSet<Point>,
    bend_penalty: u32,
    bbox: BoundingBox,
    start_dir: Option<Direction>,
    end_dir: Option<Direction>,
) -> Option<Vec<Point>> {
    if !bbox.contains(start) || !bbox.contains(end) {
        debug!("start or end outside bbox, unroutable");
        return None;
    }

    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    let mut counter: u64 = 0;
    let mut best_g: HashMap<State, i64> = HashMap::new();
    let mut came_from: HashMap<State, Option<State>> = HashMap::new();

    let start_state: State = (start, None);
    best_g.insert(start_state, 0);
    came_from.insert(start_state, None);
    heap.push(Reverse(HeapEntry {
        f: heuristic(start, end, free_set),
        counter,
        p: start,
        d_in: None,
        g: 0,
    }));
    counter += 1;

    while let Some(Reverse(HeapEntry { p, d_in, g, .. })) = heap.pop() {
        let state: State = (p, d_in);
        if best_g.get(&state).copied() != Some(g) {
            continue; // stale entry from lazy decrease-key
        }
        if p == end && end_dir.map_or(true, |d| d_in == Some(d)) {
            return Some(reconstruct(&came_from, state));
        }
        for d_out in Direction::ALL {
            if state == start_state {
                if let Some(required) = start_dir {
                    if d_out != required {
                        continue;
                    }
                }
            }
            let p_prime = p + d_out.delta();
            if !bbox.contains(p_prime) || blocked.contains(&p_prime) {
                continue;
            }
            let cost = step_cost(p_prime, d_in, d_out, penalty, free_set, bend_penalty);
            let new_g = g + cost;
            let new_state: State = (p_prime, Some(d_out));
            let improves = best_g.get(&new_state).map_or(true, |&old| new_g < old);
            if improves {
                best_g.insert(new_state, new_g);
                came_from.insert(new_state, Some(state));
                let h = heuristic(p_prime, end, free_set);
                heap.push(Reverse(HeapEntry {
                    f: new_g + h,
                    counter,
                    p: p_prime,
                    d_in: Some(d_out),
                    g: new_g,
                }));
                counter += 1;
            }
        }
    }

    debug!("search exhausted with no path to end");
    None
}

#[cfg(test)]
#[path = "../../tests/rust/test_router.rs"]
mod tests;
