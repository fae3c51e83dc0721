//! The object model (§3, C3): anything that can enumerate its own
//! `StyledChar`s, carries a z-order, and reports a bounding box.
//!
//! `Object` is a closed tagged enum over the four variants the spec names
//! (leaf `Pixel`, `Group`, `Box`, `TextPath`) rather than a trait-object
//! hierarchy — the corpus favors concrete enums + a thin capability trait
//! over dynamic dispatch at this layer (see its `Renderer`/`Parser` traits).

pub mod group;
pub mod textbox;

pub use group::{Group, PixelGroup};
pub use textbox::{BorderType, TextBox};

use crate::geometry::{BoundingBox, Point};
use crate::pixel::StyledChar;
use crate::style::Style;
use crate::textpath::TextPath;

/// Capability shared by every diagram object.
pub trait TextObject {
    fn chars(&self) -> Vec<StyledChar>;
    fn z_order(&self) -> i32;
    fn bounding_box(&self) -> BoundingBox;
}

/// A single glyph at a point (§3 leaf Pixel).
#[derive(Debug, Clone, PartialEq)]
pub struct Pixel {
    glyph: char,
    point: Point,
    style: Style,
    weight: Option<u32>,
    penalty_group: Option<String>,
    z_order: i32,
}

impl Pixel {
    pub fn new(glyph: char, point: impl Into<Point>) -> Self {
        Self {
            glyph,
            point: point.into(),
            style: Style::new(),
            weight: Some(0),
            penalty_group: None,
            z_order: 0,
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

    pub fn with_z_order(mut self, z: i32) -> Self {
        self.z_order = z;
        self
    }

    /// Reposition this pixel at an absolute point (overrides, does not add).
    pub fn at(&self, point: impl Into<Point>) -> Self {
        Self {
            point: point.into(),
            ..self.clone()
        }
    }

    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    pub fn point(&self) -> Point {
        self.point
    }
}

impl TextObject for Pixel {
    fn chars(&self) -> Vec<StyledChar> {
        let mut sc = StyledChar::new(self.glyph, self.point)
            .with_style(self.style)
            .with_weight(self.weight);
        if let Some(group) = &self.penalty_group {
            sc = sc.with_penalty_group(group.clone());
        }
        vec![sc]
    }

    fn z_order(&self) -> i32 {
        self.z_order
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_point(self.point)
    }
}

/// The closed set of diagram object kinds.
#[derive(Debug, Clone)]
pub enum Object {
    Pixel(Pixel),
    Group(Group<Object>),
    Box(TextBox),
    Path(TextPath),
}

impl From<Pixel> for Object {
    fn from(p: Pixel) -> Self {
        Object::Pixel(p)
    }
}

impl From<Group<Object>> for Object {
    fn from(g: Group<Object>) -> Self {
        Object::Group(g)
    }
}

impl From<TextBox> for Object {
    fn from(b: TextBox) -> Self {
        Object::Box(b)
    }
}

impl From<TextPath> for Object {
    fn from(p: TextPath) -> Self {
        Object::Path(p)
    }
}

impl TextObject for Object {
    fn chars(&self) -> Vec<StyledChar> {
        match self {
            Object::Pixel(p) => p.chars(),
            Object::Group(g) => g.chars(),
            Object::Box(b) => b.chars(),
            Object::Path(p) => p.chars(),
        }
    }

    fn z_order(&self) -> i32 {
        match self {
            Object::Pixel(p) => p.z_order(),
            Object::Group(g) => g.z_order(),
            Object::Box(b) => b.z_order(),
            Object::Path(p) => p.z_order(),
        }
    }

    fn bounding_box(&self) -> BoundingBox {
        match self {
            Object::Pixel(p) => p.bounding_box(),
            Object::Group(g) => g.bounding_box(),
            Object::Box(b) => b.bounding_box(),
            Object::Path(p) => p.bounding_box(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_object.rs"]
mod tests;
