//! The routing pipeline: cost field (C4) → router (C5) → glyph selection
//! (C6) → multipath ordering (C7). `TextPath` (in `crate::textpath`) is the
//! only consumer; these modules stay free of object-model concerns.

pub mod costfield;
pub mod glyph;
pub mod multipath;
pub mod router;

pub use costfield::CostField;
pub use glyph::{Arms, BoxChars, CharSet, LineStyle};
pub use multipath::multipath;
pub use router::route;

use std::collections::HashMap;

use crate::geometry::{Direction, Point};

/// Assign each point of a routed path its arm signature by looking at its
/// immediate predecessor/successor in the sequence, merging signatures at
/// any cell the path itself revisits so a self-crossing path still gets a
/// T-junction or cross there instead of overwriting one arm with another
/// (§4.3).
pub fn arms_for_path(path: &[Point]) -> HashMap<Point, Arms> {
    let mut arms: HashMap<Point, Arms> = HashMap::new();
    for i in 0..path.len() {
        let mut a = Arms::default();
        if i > 0 {
            if let Some(d) = Direction::between(path[i], path[i - 1]) {
                a = a.with(d);
            }
        }
        if i + 1 < path.len() {
            if let Some(d) = Direction::between(path[i], path[i + 1]) {
                a = a.with(d);
            }
        }
        arms.entry(path[i])
            .and_modify(|existing| *existing = existing.merge(a))
            .or_insert(a);
    }
    arms
}

#[cfg(test)]
#[path = "../../tests/rust/test_routing_mod.rs"]
mod tests;
