use std::rc::Rc;

use super::*;
use crate::object::TextObject;
use crate::pixel::StyledChar;

#[test]
fn straight_path_renders_horizontal_glyphs() {
    let path = TextPath::new((0, 0), (3, 0));
    let chars = path.chars();
    assert!(chars.iter().all(|sc| sc.glyph == '─'));
    assert_eq!(chars.len(), 4);
}

#[test]
fn materialization_is_memoized() {
    let path = TextPath::new((0, 0), (3, 0));
    let first = path.chars();
    let second = path.chars();
    assert_eq!(first, second);
}

#[test]
fn unroutable_path_emits_no_cells() {
    // Every neighbour of `start` is a barrier, so no bbox margin helps.
    let barriers = vec![
        StyledChar::new('#', Point::new(1, 0)),
        StyledChar::new('#', Point::new(-1, 0)),
        StyledChar::new('#', Point::new(0, 1)),
        StyledChar::new('#', Point::new(0, -1)),
    ];
    let path = TextPath::new((0, 0), (2, 0)).with_barriers(barriers);
    assert!(path.chars().is_empty());
}

#[test]
fn later_path_reuses_an_earlier_paths_cells_for_free() {
    let p1 = Rc::new(TextPath::new((0, 0), (5, 0)).with_bend_penalty(0));
    let p2 = TextPath::new((0, 0), (5, 0))
        .with_bend_penalty(0)
        .with_paths(vec![p1.clone()]);

    assert_eq!(p1.chars(), p2.chars());
}

#[test]
fn explicit_bbox_rejects_out_of_bounds_endpoints() {
    let result = TextPath::new((0, 0), (20, 0)).with_bbox(BoundingBox::new(-5, 5, -5, 5));
    assert_eq!(result.unwrap_err(), TextDrawError::OutOfBbox);
}

#[test]
fn explicit_bbox_accepts_endpoints_within_range() {
    let result = TextPath::new((0, 0), (3, 0)).with_bbox(BoundingBox::new(-5, 5, -5, 5));
    assert!(result.is_ok());
}

#[test]
fn negative_weight_signed_entry_point_is_fatal() {
    let err = TextPath::new((0, 0), (1, 0)).with_weight_signed(-1).unwrap_err();
    assert_eq!(err, TextDrawError::NegativeWeight);
}

#[test]
fn negative_bend_penalty_signed_entry_point_is_fatal() {
    let err = TextPath::new((0, 0), (1, 0))
        .with_bend_penalty_signed(-1)
        .unwrap_err();
    assert_eq!(err, TextDrawError::NegativeBendPenalty);
}

#[test]
fn end_arrow_overrides_the_final_glyph() {
    let path = TextPath::new((0, 0), (3, 0)).with_end_arrow(true);
    let chars = path.chars();
    assert_eq!(chars.last().unwrap().glyph, '▶');
}

#[test]
fn end_style_overlays_only_the_final_cell() {
    let path = TextPath::new((0, 0), (3, 0)).with_end_style(Style::new().with_effect(crate::style::Effect::Bold));
    let chars = path.chars();
    assert!(!chars[0].style.has_effect(crate::style::Effect::Bold));
    assert!(chars.last().unwrap().style.has_effect(crate::style::Effect::Bold));
}

#[test]
fn default_bbox_always_contains_both_endpoints() {
    let path = TextPath::new((-3, 4), (10, -2));
    let bbox = path.effective_bbox();
    assert!(bbox.contains(Point::new(-3, 4)));
    assert!(bbox.contains(Point::new(10, -2)));
}

#[test]
fn weight_participates_in_compositor_resolution() {
    let path = TextPath::new((0, 0), (1, 0)).with_weight(5);
    assert!(path.chars().iter().all(|sc| sc.weight == Some(5)));
}

#[test]
fn reused_path_divergence_renders_a_t_junction() {
    let p1 = Rc::new(TextPath::new((0, 0), (4, 0)).with_bend_penalty(0));
    let p2 = TextPath::new((2, 0), (2, 3))
        .with_bend_penalty(0)
        .with_paths(vec![p1.clone()]);

    let divergence = p2
        .chars()
        .into_iter()
        .find(|sc| sc.point == Point::new(2, 0))
        .unwrap();
    assert_eq!(divergence.glyph, '┴');
}

#[test]
fn ascii_charset_draws_plain_straight_glyphs() {
    let path = TextPath::new((0, 0), (3, 0)).with_charset(crate::routing::CharSet::Ascii);
    let chars = path.chars();
    assert!(chars.iter().all(|sc| sc.glyph == '-'));
}
