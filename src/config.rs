//! `RenderConfig` (§4.9, ambient): renderer-wide defaults the distilled
//! spec left as implicit constants.

use crate::geometry::BoundingBox;
use crate::routing::{CharSet, LineStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub bend_penalty: u32,
    pub bbox_margin: i64,
    pub line_style: LineStyle,
    pub charset: CharSet,
}

impl RenderConfig {
    /// Margin added beyond the extremum of every endpoint/barrier when a
    /// `TextPath` is not given an explicit `bbox` (§9 Open Questions).
    pub const DEFAULT_BBOX_MARGIN: i64 = 2;

    /// Floor for `bend_penalty_for_bbox`, used only when a bbox degenerates
    /// to a single row or column (area too small to discourage bends on its
    /// own).
    pub const MIN_BEND_PENALTY: u32 = 10;

    /// Recommended default (§4.2): at least the number of cells in the
    /// routing bbox, so that no single-bend detour through the whole box
    /// can ever undercut a path that bends twice. A fixed constant can't
    /// satisfy this across arbitrarily-sized diagrams, so `TextPath`
    /// resolves its default at materialize time against its own
    /// `effective_bbox` rather than reading a static value from here.
    pub fn bend_penalty_for_bbox(bbox: BoundingBox) -> u32 {
        let area = bbox.width().saturating_mul(bbox.height()).max(0) as u64;
        area.min(u32::MAX as u64).max(Self::MIN_BEND_PENALTY as u64) as u32
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bend_penalty: Self::MIN_BEND_PENALTY,
            bbox_margin: Self::DEFAULT_BBOX_MARGIN,
            line_style: LineStyle::Thin,
            charset: CharSet::Unicode,
        }
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
