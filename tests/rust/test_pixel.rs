use super::*;
use crate::style::Color;

#[test]
fn default_weight_is_zero_and_painted() {
    let sc = StyledChar::new('x', Point::new(0, 0));
    assert_eq!(sc.weight, Some(0));
    assert!(!sc.is_barrier_only());
}

#[test]
fn none_weight_is_barrier_only() {
    let sc = StyledChar::new('x', Point::new(0, 0)).with_weight(None);
    assert!(sc.is_barrier_only());
}

#[test]
fn translated_shifts_the_point_only() {
    let sc = StyledChar::new('x', Point::new(1, 1)).with_style(Style::new().with_fg(Color::Red));
    let moved = sc.translated(Point::new(2, -1));
    assert_eq!(moved.point, Point::new(3, 0));
    assert_eq!(moved.style, sc.style);
}

#[test]
fn with_penalty_group_tags_the_cell() {
    let sc = StyledChar::new('x', Point::new(0, 0)).with_penalty_group("line");
    assert_eq!(sc.penalty_group.as_deref(), Some("line"));
}
