use super::*;

#[test]
fn frame_size_accounts_for_label_and_border() {
    let b = TextBox::new("hi", (0, 0));
    // "hi" is 2 wide, 1 tall; +2 for the border on each axis.
    let bbox = b.bounding_box();
    assert_eq!(bbox.width(), 4);
    assert_eq!(bbox.height(), 3);
}

#[test]
fn multiline_label_widens_to_the_longest_line() {
    let b = TextBox::new("a\nbcd", (0, 0));
    let bbox = b.bounding_box();
    assert_eq!(bbox.width(), 5);
    assert_eq!(bbox.height(), 4);
}

#[test]
fn corners_use_the_configured_border_type() {
    let b = TextBox::new("x", (0, 0)).with_border_type(BorderType::Double);
    let chars = b.chars();
    let top_left = chars.iter().find(|sc| sc.point == b.top() + Point::new(-1, 0)).unwrap();
    assert_eq!(top_left.glyph, '╔');
}

#[test]
fn edge_midpoints_lie_on_the_bounding_box() {
    let b = TextBox::new("hello", (0, 0));
    let bbox = b.bounding_box();
    assert_eq!(b.left().x, bbox.left);
    assert_eq!(b.right().x, bbox.right);
    assert_eq!(b.top().y, bbox.top);
    assert_eq!(b.bottom().y, bbox.bottom);
}

#[test]
fn label_characters_are_painted_inside_the_frame() {
    let b = TextBox::new("Z", (0, 0));
    let chars = b.chars();
    assert!(chars.iter().any(|sc| sc.glyph == 'Z'));
}

#[test]
fn ascii_charset_draws_a_plain_frame() {
    let b = TextBox::new("x", (0, 0)).with_charset(CharSet::Ascii);
    let chars = b.chars();
    let top_left = chars.iter().find(|sc| sc.point == b.top() + Point::new(-1, 0)).unwrap();
    assert_eq!(top_left.glyph, '+');
}
