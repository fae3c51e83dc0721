//! Cost field builder (§4.1, C4): turns a set of environment/barrier pixels
//! into the blocked-cell set and penalty map the router consumes.

use std::collections::{HashMap, HashSet};

use crate::geometry::Point;
use crate::pixel::StyledChar;

#[derive(Debug, Clone, Default)]
pub struct CostField {
    pub blocked: HashSet<Point>,
    pub penalty: HashMap<Point, u32>,
}

impl CostField {
    /// Build from `environment` (penalty-only) and `barriers` (blocking,
    /// regardless of weight), then force `start`/`end` unblocked — they are
    /// endpoints, never obstacles (§4.1).
    pub fn build(
        environment: &[StyledChar],
        barriers: &[StyledChar],
        start: Point,
        end: Point,
    ) -> CostField {
        let mut field = CostField::default();
        for sc in environment {
            if let Some(w) = sc.weight {
                *field.penalty.entry(sc.point).or_insert(0) += w;
            }
        }
        for sc in barriers {
            field.blocked.insert(sc.point);
        }
        field.blocked.remove(&start);
        field.blocked.remove(&end);
        field
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_costfield.rs"]
mod tests;
