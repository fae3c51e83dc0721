//! `TextBox` (§4.8): a labelled frame drawn from the same box-drawing tables
//! the router's glyph selector uses, exposing edge midpoints so callers can
//! anchor `TextPath`s to it without hand-computing geometry.
//!
//! Grounded on the original package's `Box`/`BorderType` (see
//! `examples/original_source/examples/connected_boxes.py`'s
//! `bounding_box.right`/`.bottom`/`.left`/`.top` usage) and the corpus's
//! `draw_box`/`BoxChars` pairing in `renderers/canvas.rs` + `charset.rs`.

use super::TextObject;
use crate::geometry::{BoundingBox, Point};
use crate::pixel::StyledChar;
use crate::routing::glyph::{BoxChars, CharSet, LineStyle};
use crate::style::Style;

/// The line style a box's frame is drawn in — an alias onto the router's
/// own `LineStyle`, matching the original package's `BorderType` name.
pub type BorderType = LineStyle;

/// A multi-line label framed in box-drawing glyphs.
#[derive(Debug, Clone)]
pub struct TextBox {
    label: String,
    origin: Point,
    border_style: Style,
    label_style: Style,
    line_style: LineStyle,
    charset: CharSet,
    z_order: i32,
}

impl TextBox {
    /// `origin` is the frame's top-left corner.
    pub fn new(label: impl Into<String>, origin: impl Into<Point>) -> Self {
        Self {
            label: label.into(),
            origin: origin.into(),
            border_style: Style::new(),
            label_style: Style::new(),
            line_style: LineStyle::Thin,
            charset: CharSet::Unicode,
            z_order: 0,
        }
    }

    pub fn with_border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    pub fn with_label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    pub fn with_border_type(mut self, border: BorderType) -> Self {
        self.line_style = border;
        self
    }

    pub fn with_charset(mut self, charset: CharSet) -> Self {
        self.charset = charset;
        self
    }

    pub fn with_z_order(mut self, z: i32) -> Self {
        self.z_order = z;
        self
    }

    fn lines(&self) -> Vec<&str> {
        let lines: Vec<&str> = self.label.split('\n').collect();
        if lines.is_empty() {
            vec![""]
        } else {
            lines
        }
    }

    fn inner_width(&self) -> i64 {
        self.lines()
            .iter()
            .map(|l| l.chars().count() as i64)
            .max()
            .unwrap_or(0)
    }

    fn width(&self) -> i64 {
        self.inner_width() + 2
    }

    fn height(&self) -> i64 {
        self.lines().len() as i64 + 2
    }

    fn left_x(&self) -> i64 {
        self.origin.x
    }

    fn right_x(&self) -> i64 {
        self.origin.x + self.width() - 1
    }

    fn top_y(&self) -> i64 {
        self.origin.y
    }

    fn bottom_y(&self) -> i64 {
        self.origin.y - self.height() + 1
    }

    /// Midpoint of the left edge, for anchoring an incoming path.
    pub fn left(&self) -> Point {
        Point::new(self.left_x(), self.top_y() - (self.height() - 1) / 2)
    }

    pub fn right(&self) -> Point {
        Point::new(self.right_x(), self.top_y() - (self.height() - 1) / 2)
    }

    pub fn top(&self) -> Point {
        Point::new(self.left_x() + (self.width() - 1) / 2, self.top_y())
    }

    pub fn bottom(&self) -> Point {
        Point::new(self.left_x() + (self.width() - 1) / 2, self.bottom_y())
    }
}

impl TextObject for TextBox {
    fn chars(&self) -> Vec<StyledChar> {
        let bc = BoxChars::for_charset(self.line_style, self.charset);
        let (left_x, right_x, top_y, bottom_y) =
            (self.left_x(), self.right_x(), self.top_y(), self.bottom_y());
        let mut out = Vec::new();

        let mut push = |glyph: char, x: i64, y: i64, style: Style| {
            out.push(StyledChar::new(glyph, Point::new(x, y)).with_style(style));
        };

        push(bc.top_left, left_x, top_y, self.border_style);
        push(bc.top_right, right_x, top_y, self.border_style);
        push(bc.bottom_left, left_x, bottom_y, self.border_style);
        push(bc.bottom_right, right_x, bottom_y, self.border_style);
        for x in (left_x + 1)..right_x {
            push(bc.horizontal, x, top_y, self.border_style);
            push(bc.horizontal, x, bottom_y, self.border_style);
        }
        for y in (bottom_y + 1)..top_y {
            push(bc.vertical, left_x, y, self.border_style);
            push(bc.vertical, right_x, y, self.border_style);
        }

        for (i, line) in self.lines().into_iter().enumerate() {
            let row_y = top_y - 1 - i as i64;
            for (j, ch) in line.chars().enumerate() {
                push(ch, left_x + 1 + j as i64, row_y, self.label_style);
            }
        }

        out
    }

    fn z_order(&self) -> i32 {
        self.z_order
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.left_x(), self.right_x(), self.bottom_y(), self.top_y())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_textbox.rs"]
mod tests;
