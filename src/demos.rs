//! Built-in worked examples for the CLI's `--demo` flag, reproducing the
//! shapes shown in the original package's own example scripts
//! (`examples/connected_boxes.py`, `test.py`) without vendoring their code.

use textdraw::{render, CharSet, Color, Group, Object, Pixel, Style, TextBox, TextPath};

pub fn render_demo(name: &str, charset: CharSet) -> Option<String> {
    match name {
        "boxes" => Some(connected_boxes(charset)),
        "pixels" => Some(pixel_group()),
        _ => None,
    }
}

/// Three labelled boxes connected by routed, arrow-terminated paths —
/// mirrors `examples/connected_boxes.py`'s layout (S6).
fn connected_boxes(charset: CharSet) -> String {
    let a = TextBox::new("A", (0, 10))
        .with_border_style(Style::new().with_fg(Color::Green))
        .with_charset(charset);
    let b = TextBox::new("B", (20, 10))
        .with_border_style(Style::new().with_fg(Color::Blue))
        .with_charset(charset);
    let c = TextBox::new("C", (10, 0))
        .with_border_style(Style::new().with_fg(Color::Magenta))
        .with_charset(charset);

    let path_ab = TextPath::new(a.right(), b.left())
        .with_style(Style::new().with_fg(Color::Yellow))
        .with_end_arrow(true)
        .with_charset(charset);
    let path_bc = TextPath::new(b.bottom(), c.right())
        .with_style(Style::new().with_fg(Color::Cyan))
        .with_end_arrow(true)
        .with_charset(charset);
    let path_ca = TextPath::new(c.left(), a.bottom())
        .with_style(Style::new().with_fg(Color::Red))
        .with_end_arrow(true)
        .with_charset(charset);

    render(&[
        Object::from(a),
        Object::from(b),
        Object::from(c),
        Object::from(path_ab),
        Object::from(path_bc),
        Object::from(path_ca),
    ])
}

/// A small group of styled pixels, repositioned as a unit — mirrors
/// `test.py`'s minimal `Pixel`/`Group`/`render` usage.
fn pixel_group() -> String {
    let group: Group<Object> = Group::new(vec![
        Object::from(Pixel::new('X', (-1, 0))),
        Object::from(Pixel::new('O', (0, 0))),
        Object::from(Pixel::new('X', (1, 0))),
    ])
    .with_style(Style::new().with_fg(Color::Blue))
    .at((4, 5));

    render(&[Object::from(group)])
}
