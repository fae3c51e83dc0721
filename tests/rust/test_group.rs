use super::*;
use crate::object::Pixel;
use crate::style::{Color, Style};

#[test]
fn at_translates_children_additively() {
    let group = PixelGroup::new(vec![Pixel::new('x', (-1, 0)), Pixel::new('x', (1, 0))])
        .at((4, 5));
    let points: Vec<Point> = group.chars().iter().map(|sc| sc.point).collect();
    assert_eq!(points, vec![Point::new(3, 5), Point::new(5, 5)]);
}

#[test]
fn style_overlay_composes_over_child_style() {
    let group = PixelGroup::new(vec![Pixel::new('x', (0, 0)).with_style(Style::new().with_fg(Color::Red))])
        .with_style(Style::new().with_fg(Color::Blue));
    assert_eq!(group.chars()[0].style.escape('x'), Style::new().with_fg(Color::Blue).escape('x'));
}

#[test]
fn weight_overlay_never_resurrects_a_barrier() {
    let group = PixelGroup::new(vec![Pixel::new('x', (0, 0)).with_weight(None)]).with_weight(9);
    assert_eq!(group.chars()[0].weight, None);
}

#[test]
fn weight_overlay_applies_to_painted_children() {
    let group = PixelGroup::new(vec![Pixel::new('x', (0, 0))]).with_weight(9);
    assert_eq!(group.chars()[0].weight, Some(9));
}

#[test]
fn index_mut_allows_by_child_style_mutation() {
    let mut group = PixelGroup::new(vec![Pixel::new('x', (0, 0)), Pixel::new('y', (1, 0))]);
    *group[1].style_mut() = Style::new().with_effect(crate::style::Effect::Bold);
    assert!(group.chars()[1].style.has_effect(crate::style::Effect::Bold));
}

#[test]
fn bounding_box_unions_children_and_respects_offset() {
    let group = PixelGroup::new(vec![Pixel::new('x', (-1, 0)), Pixel::new('x', (1, 0))]).at((4, 5));
    assert_eq!(group.bounding_box(), BoundingBox::new(3, 5, 5, 5));
}

#[test]
fn empty_group_bounding_box_is_the_offset_point() {
    let group: PixelGroup = PixelGroup::new(vec![]).at((2, 2));
    assert_eq!(group.bounding_box(), BoundingBox::from_point(Point::new(2, 2)));
}
