//! `StyledChar` (§3): one painted (or barrier-only) cell.

use crate::geometry::Point;
use crate::style::Style;

/// A single glyph at a coordinate, with its style, routing weight, and an
/// optional penalty-group tag.
///
/// `weight = None` is the barrier sentinel (§3): the cell is never painted
/// by the compositor, and only ever matters to the router when the
/// `StyledChar` appears in a `barriers` list (§4.1).
#[derive(Debug, Clone, PartialEq)]
pub struct StyledChar {
    pub glyph: char,
    pub style: Style,
    pub weight: Option<u32>,
    pub point: Point,
    pub penalty_group: Option<String>,
}

impl StyledChar {
    pub fn new(glyph: char, point: Point) -> Self {
        Self {
            glyph,
            style: Style::new(),
            weight: Some(0),
            point,
            penalty_group: None,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_weight(mut self, weight: Option<u32>) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_penalty_group(mut self, group: impl Into<String>) -> Self {
        self.penalty_group = Some(group.into());
        self
    }

    pub fn translated(&self, by: Point) -> Self {
        Self {
            point: self.point + by,
            ..self.clone()
        }
    }

    pub fn is_barrier_only(&self) -> bool {
        self.weight.is_none()
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_pixel.rs"]
mod tests;
