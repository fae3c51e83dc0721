//! The compositor (§4.5, C8): merges every object's `StyledChar`s onto one
//! grid, resolves per-cell winners by weight, and serializes the result.
//!
//! Grounded on the corpus's `renderers/canvas.rs` `render_to_string`
//! (final-grid serialization) generalised from a single mutable canvas to
//! a z-ordered merge of many independent objects' pixel streams.

use std::collections::HashMap;

use tracing::debug;

use crate::geometry::{BoundingBox, Point};
use crate::object::{Object, TextObject};
use crate::pixel::StyledChar;

/// Merge every object's `StyledChar`s into one grid and render it to a
/// string (§4.5). Objects are stable-sorted by z-order before
/// enumeration, so "later in render order" for the per-cell tie-break
/// means later z-order, then later original position within that z-order.
pub fn render(objects: &[Object]) -> String {
    let mut ordered: Vec<(usize, &Object)> = objects.iter().enumerate().collect();
    ordered.sort_by_key(|(i, o)| (o.z_order(), *i));

    let mut winners: HashMap<Point, (u32, u64, StyledChar)> = HashMap::new();
    let mut seq: u64 = 0;
    for (_, object) in ordered {
        for sc in object.chars() {
            let Some(weight) = sc.weight else { continue };
            let point = sc.point;
            let candidate = (weight, seq, sc);
            seq += 1;
            let loses = match winners.get(&point) {
                Some((w, s, _)) => candidate.0 < *w || (candidate.0 == *w && candidate.1 < *s),
                None => false,
            };
            if !loses {
                winners.insert(point, candidate);
            }
        }
    }

    let Some(bbox) = BoundingBox::union_all(winners.keys().copied().map(BoundingBox::from_point))
    else {
        debug!(width = 0, height = 0, painted_cells = 0, "composited empty grid");
        return String::new();
    };

    debug!(
        width = bbox.width(),
        height = bbox.height(),
        painted_cells = winners.len(),
        "composited grid"
    );

    let mut rows = Vec::with_capacity(bbox.height() as usize);
    for y in (bbox.bottom..=bbox.top).rev() {
        let mut row = String::new();
        for x in bbox.left..=bbox.right {
            match winners.get(&Point::new(x, y)) {
                Some((_, _, sc)) => row.push_str(&sc.style.escape(sc.glyph)),
                None => row.push(' '),
            }
        }
        rows.push(row);
    }
    rows.join("\n")
}

#[cfg(test)]
#[path = "../tests/rust/test_compositor.rs"]
mod tests;
