//! `Group` (§3): a container of child objects with an optional style and/or
//! weight overlay applied to every child, plus a translation offset.
//!
//! The original package exports this specialised to a group of leaf pixels
//! as `PixelGroup`; the expanded spec generalises it to arbitrary child
//! objects (C3's "Group (contains child objects...)"), so `PixelGroup` here
//! is simply `Group<Pixel>`.

use std::ops::{Index, IndexMut};

use super::TextObject;
use crate::geometry::{BoundingBox, Point};
use crate::pixel::StyledChar;
use crate::style::Style;

/// A group of child objects, repositioned as a unit and optionally
/// overlaid with a style and/or weight.
#[derive(Debug, Clone)]
pub struct Group<T> {
    children: Vec<T>,
    offset: Point,
    style_overlay: Option<Style>,
    weight_overlay: Option<u32>,
    z_order: i32,
}

/// A group specialised to leaf pixels, matching the original package's
/// exported `PixelGroup` and its by-index style mutation idiom
/// (`group[1].style += "bold"`).
pub type PixelGroup = Group<super::Pixel>;

impl<T> Group<T> {
    pub fn new(children: Vec<T>) -> Self {
        Self {
            children,
            offset: Point::new(0, 0),
            style_overlay: None,
            weight_overlay: None,
            z_order: 0,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style_overlay = Some(style);
        self
    }

    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight_overlay = Some(weight);
        self
    }

    pub fn with_z_order(mut self, z: i32) -> Self {
        self.z_order = z;
        self
    }

    /// Reposition the whole group at an absolute offset added to every
    /// child's own (relative) coordinates (§3: "producing a new logical
    /// object that shares child identity").
    pub fn at(&self, point: impl Into<Point>) -> Self
    where
        T: Clone,
    {
        Self {
            offset: point.into(),
            ..self.clone()
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T> Index<usize> for Group<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.children[i]
    }
}

impl<T> IndexMut<usize> for Group<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.children[i]
    }
}

impl<T: TextObject> TextObject for Group<T> {
    fn chars(&self) -> Vec<StyledChar> {
        self.children
            .iter()
            .flat_map(|c| c.chars())
            .map(|sc| {
                let sc = sc.translated(self.offset);
                let sc = match self.style_overlay {
                    Some(overlay) => sc.clone().with_style(sc.style + overlay),
                    None => sc,
                };
                match self.weight_overlay {
                    Some(w) if sc.weight.is_some() => sc.with_weight(Some(w)),
                    _ => sc,
                }
            })
            .collect()
    }

    fn z_order(&self) -> i32 {
        self.z_order
    }

    fn bounding_box(&self) -> BoundingBox {
        let boxes = self
            .children
            .iter()
            .map(|c| c.bounding_box().expand(0))
            .map(|b| {
                BoundingBox::new(
                    b.left + self.offset.x,
                    b.right + self.offset.x,
                    b.bottom + self.offset.y,
                    b.top + self.offset.y,
                )
            });
        BoundingBox::union_all(boxes).unwrap_or_else(|| BoundingBox::from_point(self.offset))
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_group.rs"]
mod tests;
