//! `TextPath` (§4.6): a routed connector between two points, lazily
//! materialized into styled, glyph-selected cells and memoized once
//! (§5, §9) via a `OnceCell`.

use std::cell::OnceCell;
use std::collections::HashSet;
use std::rc::Rc;

use tracing::debug;

use crate::config::RenderConfig;
use crate::error::TextDrawError;
use crate::geometry::{BoundingBox, Direction, Point};
use crate::object::TextObject;
use crate::pixel::StyledChar;
use crate::routing::{arms_for_path, route, BoxChars, CharSet, CostField, LineStyle};
use crate::style::Style;

/// A routed connector. Reused paths are held as `Rc<TextPath>` — shared,
/// already-constructed, immutable — which makes a reuse cycle
/// structurally unconstructible (a path cannot name a `TextPath` that
/// does not exist yet), the simplest form of the acyclicity guarantee §9
/// asks for.
#[derive(Debug)]
pub struct TextPath {
    start: Point,
    end: Point,
    start_direction: Option<Direction>,
    end_direction: Option<Direction>,
    style: Style,
    end_style: Style,
    start_arrow: bool,
    end_arrow: bool,
    line_style: LineStyle,
    charset: CharSet,
    bend_penalty: Option<u32>,
    weight: u32,
    barriers: Vec<StyledChar>,
    environment: Vec<StyledChar>,
    paths: Vec<Rc<TextPath>>,
    bbox_override: Option<BoundingBox>,
    bbox_margin: i64,
    z_order: i32,
    cells: OnceCell<Vec<StyledChar>>,
}

impl Clone for TextPath {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            end: self.end,
            start_direction: self.start_direction,
            end_direction: self.end_direction,
            style: self.style,
            end_style: self.end_style,
            start_arrow: self.start_arrow,
            end_arrow: self.end_arrow,
            line_style: self.line_style,
            charset: self.charset,
            bend_penalty: self.bend_penalty,
            weight: self.weight,
            barriers: self.barriers.clone(),
            environment: self.environment.clone(),
            paths: self.paths.clone(),
            bbox_override: self.bbox_override,
            bbox_margin: self.bbox_margin,
            z_order: self.z_order,
            // Recomputed on demand; inputs are immutable so a fresh cache
            // always converges to the same result (§5, §9).
            cells: OnceCell::new(),
        }
    }
}

impl TextPath {
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            start_direction: None,
            end_direction: None,
            style: Style::new(),
            end_style: Style::new(),
            start_arrow: false,
            end_arrow: false,
            line_style: LineStyle::Thin,
            charset: CharSet::Unicode,
            bend_penalty: None,
            weight: 0,
            barriers: Vec::new(),
            environment: Vec::new(),
            paths: Vec::new(),
            bbox_override: None,
            bbox_margin: RenderConfig::DEFAULT_BBOX_MARGIN,
            z_order: 0,
            cells: OnceCell::new(),
        }
    }

    pub fn with_start_direction(mut self, d: Direction) -> Self {
        self.start_direction = Some(d);
        self
    }

    pub fn with_end_direction(mut self, d: Direction) -> Self {
        self.end_direction = Some(d);
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_end_style(mut self, style: Style) -> Self {
        self.end_style = style;
        self
    }

    pub fn with_start_arrow(mut self, arrow: bool) -> Self {
        self.start_arrow = arrow;
        self
    }

    pub fn with_end_arrow(mut self, arrow: bool) -> Self {
        self.end_arrow = arrow;
        self
    }

    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    pub fn with_charset(mut self, charset: CharSet) -> Self {
        self.charset = charset;
        self
    }

    /// Weight is already unsigned in this port, so the type system rules
    /// out `NegativeWeight` here; see `with_weight_signed` for the one
    /// entry point that makes that variant reachable (§7).
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Entry point for externally-supplied (signed) weights, e.g. a CLI
    /// argument parsed as `i64` (§7).
    pub fn with_weight_signed(self, weight: i64) -> Result<Self, TextDrawError> {
        if weight < 0 {
            return Err(TextDrawError::NegativeWeight);
        }
        Ok(self.with_weight(weight as u32))
    }

    /// Overrides the default bend penalty, which otherwise scales to the
    /// routing bbox's area at materialize time (§4.2).
    pub fn with_bend_penalty(mut self, bend_penalty: u32) -> Self {
        self.bend_penalty = Some(bend_penalty);
        self
    }

    /// Entry point for externally-supplied (signed) bend penalties (§7).
    pub fn with_bend_penalty_signed(self, bend_penalty: i64) -> Result<Self, TextDrawError> {
        if bend_penalty < 0 {
            return Err(TextDrawError::NegativeBendPenalty);
        }
        Ok(self.with_bend_penalty(bend_penalty as u32))
    }

    pub fn with_barriers(mut self, barriers: Vec<StyledChar>) -> Self {
        self.barriers = barriers;
        self
    }

    pub fn with_environment(mut self, environment: Vec<StyledChar>) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_paths(mut self, paths: Vec<Rc<TextPath>>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_bbox_margin(mut self, margin: i64) -> Self {
        self.bbox_margin = margin;
        self
    }

    pub fn with_z_order(mut self, z: i32) -> Self {
        self.z_order = z;
        self
    }

    /// Constrain the routing bbox explicitly. Fatal (`OutOfBbox`) if it
    /// does not contain both endpoints (§7) — the one point at which this
    /// builder can fail, since the auto-derived default always contains
    /// both endpoints by construction.
    pub fn with_bbox(mut self, bbox: BoundingBox) -> Result<Self, TextDrawError> {
        if !bbox.contains(self.start) || !bbox.contains(self.end) {
            return Err(TextDrawError::OutOfBbox);
        }
        self.bbox_override = Some(bbox);
        Ok(self)
    }

    /// The working routing bbox: the explicit override, or a box enclosing
    /// start + end + every environment/barrier cell, expanded by
    /// `bbox_margin` (§4.6, §9 Open Questions).
    pub fn effective_bbox(&self) -> BoundingBox {
        if let Some(bbox) = self.bbox_override {
            return bbox;
        }
        let points = std::iter::once(self.start)
            .chain(std::iter::once(self.end))
            .chain(self.barriers.iter().map(|sc| sc.point))
            .chain(self.environment.iter().map(|sc| sc.point));
        let boxes = points.map(BoundingBox::from_point);
        BoundingBox::union_all(boxes)
            .unwrap_or_else(|| BoundingBox::from_point(self.start))
            .expand(self.bbox_margin)
    }

    fn materialize(&self) -> Vec<StyledChar> {
        let bbox = self.effective_bbox();
        let bend_penalty = self
            .bend_penalty
            .unwrap_or_else(|| RenderConfig::bend_penalty_for_bbox(bbox));
        let cost = CostField::build(&self.environment, &self.barriers, self.start, self.end);
        let free_set: HashSet<Point> = self
            .paths
            .iter()
            .flat_map(|p| p.chars())
            .map(|sc| sc.point)
            .collect();

        let Some(path) = route(
            self.start,
            self.end,
            &cost.blocked,
            &cost.penalty,
            &free_set,
            bend_penalty,
            bbox,
            self.start_direction,
            self.end_direction,
        ) else {
            debug!(start = ?self.start, end = ?self.end, "path unroutable, emitting no cells");
            return Vec::new();
        };

        let mut arms = arms_for_path(&path);
        // A cell this path shares with a reused path (via `free_set`) needs
        // both paths' arms unioned in, or the divergence point would render
        // as a corner/straight instead of the T-junction §4.3 requires.
        for reused in &self.paths {
            let reused_path: Vec<Point> = reused.chars().iter().map(|sc| sc.point).collect();
            for (point, external) in arms_for_path(&reused_path) {
                if let Some(existing) = arms.get_mut(&point) {
                    *existing = existing.merge(external);
                }
            }
        }
        let bc = BoxChars::for_charset(self.line_style, self.charset);
        let mut out = Vec::with_capacity(path.len());

        for (i, &p) in path.iter().enumerate() {
            let is_start = i == 0;
            let is_end = i == path.len() - 1;
            let mut glyph = arms.get(&p).copied().unwrap_or_default().to_char(bc);
            let mut style = self.style;

            if is_end {
                style = style + self.end_style;
                if self.end_arrow && path.len() > 1 {
                    if let Some(d) = Direction::between(path[i - 1], p) {
                        glyph = bc.arrow_for(d);
                    }
                }
            }
            if is_start && self.start_arrow && path.len() > 1 {
                if let Some(d) = Direction::between(p, path[i + 1]) {
                    glyph = bc.arrow_for(d);
                }
            }

            out.push(
                StyledChar::new(glyph, p)
                    .with_style(style)
                    .with_weight(Some(self.weight)),
            );
        }

        out
    }
}

impl TextObject for TextPath {
    fn chars(&self) -> Vec<StyledChar> {
        self.cells.get_or_init(|| self.materialize()).clone()
    }

    fn z_order(&self) -> i32 {
        self.z_order
    }

    fn bounding_box(&self) -> BoundingBox {
        self.effective_bbox()
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_textpath.rs"]
mod tests;
