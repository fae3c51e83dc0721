//! Glyph selector (§4.3, C6): maps a routed cell-set to box-drawing
//! characters by 4-neighbourhood connectivity, plus the arrow glyphs used
//! to decorate endpoints, and the static corner/straight tables `TextBox`
//! reuses for its frame.
//!
//! Mirrors the corpus's own `charset.rs` (`Arms` + `BoxChars`), generalised
//! from a 2-way unicode/ascii split to the spec's 3-way thin/heavy/double
//! line-style split.

use crate::geometry::Direction;

// ─── LineStyle ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Thin,
    Heavy,
    Double,
}

impl LineStyle {
    pub fn parse(token: &str) -> Option<LineStyle> {
        match token {
            "thin" => Some(LineStyle::Thin),
            "thick" | "heavy" => Some(LineStyle::Heavy),
            "double" => Some(LineStyle::Double),
            _ => None,
        }
    }
}

// ─── CharSet ─────────────────────────────────────────────────────────────────

/// Unicode box-drawing vs. a plain-ASCII fallback, mirroring the corpus's
/// own `CharSet` split in `renderers/charset.rs` for terminals that can't
/// render the Unicode glyph blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    #[default]
    Unicode,
    Ascii,
}

// ─── BoxChars ────────────────────────────────────────────────────────────────

/// The full box-drawing character set for one line style — straight runs,
/// corners, T-junctions, and the cross, exactly as the external contract of
/// §4.3/§6 requires.
#[derive(Debug, Clone, Copy)]
pub struct BoxChars {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub tee_up: char,
    pub tee_down: char,
    pub tee_left: char,
    pub tee_right: char,
    pub cross: char,
    pub arrow_up: char,
    pub arrow_down: char,
    pub arrow_left: char,
    pub arrow_right: char,
}

impl BoxChars {
    pub const ASCII: Self = Self {
        horizontal: '-',
        vertical: '|',
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        tee_up: '+',
        tee_down: '+',
        tee_left: '+',
        tee_right: '+',
        cross: '+',
        arrow_up: '^',
        arrow_down: 'v',
        arrow_left: '<',
        arrow_right: '>',
    };

    /// Ascii has no heavy/double distinction — every line style collapses
    /// to the same `+-|` table, matching the teacher's own ascii fallback.
    pub const fn for_charset(style: LineStyle, charset: CharSet) -> Self {
        match charset {
            CharSet::Ascii => Self::ASCII,
            CharSet::Unicode => Self::for_style(style),
        }
    }

    pub const fn for_style(style: LineStyle) -> Self {
        match style {
            LineStyle::Thin => Self {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                tee_up: '┴',
                tee_down: '┬',
                tee_left: '┤',
                tee_right: '├',
                cross: '┼',
                arrow_up: '▲',
                arrow_down: '▼',
                arrow_left: '◀',
                arrow_right: '▶',
            },
            LineStyle::Heavy => Self {
                horizontal: '━',
                vertical: '┃',
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                tee_up: '┻',
                tee_down: '┳',
                tee_left: '┫',
                tee_right: '┣',
                cross: '╋',
                arrow_up: '▲',
                arrow_down: '▼',
                arrow_left: '◀',
                arrow_right: '▶',
            },
            LineStyle::Double => Self {
                horizontal: '═',
                vertical: '║',
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                tee_up: '╩',
                tee_down: '╦',
                tee_left: '╣',
                tee_right: '╠',
                cross: '╬',
                arrow_up: '▲',
                arrow_down: '▼',
                arrow_left: '◀',
                arrow_right: '▶',
            },
        }
    }

    pub fn arrow_for(self, incoming: Direction) -> char {
        match incoming {
            Direction::Up => self.arrow_up,
            Direction::Down => self.arrow_down,
            Direction::Left => self.arrow_left,
            Direction::Right => self.arrow_right,
        }
    }
}

// ─── Arms ────────────────────────────────────────────────────────────────────

/// Which of the four cardinal arms are occupied at a cell — the NESW
/// signature of §4.3's table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Arms {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Arms {
    pub fn new(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    pub fn with(mut self, d: Direction) -> Self {
        match d {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
        self
    }

    pub fn merge(self, other: Arms) -> Arms {
        Arms {
            up: self.up || other.up,
            down: self.down || other.down,
            left: self.left || other.left,
            right: self.right || other.right,
        }
    }

    pub fn count(self) -> u32 {
        self.up as u32 + self.down as u32 + self.left as u32 + self.right as u32
    }

    /// Select the glyph for this arm signature, per §4.3's table. Falls
    /// back to a space for a degenerate (all-false) signature — never a
    /// panic (§7).
    pub fn to_char(self, bc: BoxChars) -> char {
        match (self.up, self.down, self.left, self.right) {
            (false, false, false, false) => ' ',
            (false, false, true, true) => bc.horizontal,
            (true, true, false, false) => bc.vertical,
            (true, false, false, false) => bc.vertical,
            (false, true, false, false) => bc.vertical,
            (false, false, true, false) => bc.horizontal,
            (false, false, false, true) => bc.horizontal,
            (true, false, false, true) => bc.bottom_left,
            (true, false, true, false) => bc.bottom_right,
            (false, true, false, true) => bc.top_left,
            (false, true, true, false) => bc.top_right,
            (true, true, false, true) => bc.tee_right,
            (true, true, true, false) => bc.tee_left,
            (false, true, true, true) => bc.tee_down,
            (true, false, true, true) => bc.tee_up,
            (true, true, true, true) => bc.cross,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_glyph.rs"]
mod tests;
