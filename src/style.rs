//! Style grammar (§6, §4.7): a whitespace-token parser over foreground
//! colour, background colour, and boolean effects, plus the ANSI-escape
//! serializer the compositor calls to paint one glyph.
//!
//! Modeled as a sum-of-slots value, not a string — parsing and serialising
//! are isolated here at the boundary (§3, §9).

use crate::error::TextDrawError;

// ─── Color ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    fn parse(token: &str) -> Option<Color> {
        Some(match token {
            "default" => Color::Default,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "bright_black" => Color::BrightBlack,
            "bright_red" => Color::BrightRed,
            "bright_green" => Color::BrightGreen,
            "bright_yellow" => Color::BrightYellow,
            "bright_blue" => Color::BrightBlue,
            "bright_magenta" => Color::BrightMagenta,
            "bright_cyan" => Color::BrightCyan,
            "bright_white" => Color::BrightWhite,
            _ => return None,
        })
    }

    fn fg_code(self) -> &'static str {
        match self {
            Color::Default => "39",
            Color::Black => "30",
            Color::Red => "31",
            Color::Green => "32",
            Color::Yellow => "33",
            Color::Blue => "34",
            Color::Magenta => "35",
            Color::Cyan => "36",
            Color::White => "37",
            Color::BrightBlack => "90",
            Color::BrightRed => "91",
            Color::BrightGreen => "92",
            Color::BrightYellow => "93",
            Color::BrightBlue => "94",
            Color::BrightMagenta => "95",
            Color::BrightCyan => "96",
            Color::BrightWhite => "97",
        }
    }

    fn bg_code(self) -> &'static str {
        match self {
            Color::Default => "49",
            Color::Black => "40",
            Color::Red => "41",
            Color::Green => "42",
            Color::Yellow => "43",
            Color::Blue => "44",
            Color::Magenta => "45",
            Color::Cyan => "46",
            Color::White => "47",
            Color::BrightBlack => "100",
            Color::BrightRed => "101",
            Color::BrightGreen => "102",
            Color::BrightYellow => "103",
            Color::BrightBlue => "104",
            Color::BrightMagenta => "105",
            Color::BrightCyan => "106",
            Color::BrightWhite => "107",
        }
    }
}

// ─── Effect ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Effect {
    Bold = 1 << 0,
    Dim = 1 << 1,
    Italic = 1 << 2,
    Underline = 1 << 3,
    Blink = 1 << 4,
    Reverse = 1 << 5,
    Strike = 1 << 6,
}

impl Effect {
    fn parse(token: &str) -> Option<Effect> {
        Some(match token {
            "bold" => Effect::Bold,
            "dim" => Effect::Dim,
            "italic" => Effect::Italic,
            "underline" => Effect::Underline,
            "blink" => Effect::Blink,
            "reverse" => Effect::Reverse,
            "strike" => Effect::Strike,
            _ => return None,
        })
    }

    fn sgr_code(self) -> &'static str {
        match self {
            Effect::Bold => "1",
            Effect::Dim => "2",
            Effect::Italic => "3",
            Effect::Underline => "4",
            Effect::Blink => "5",
            Effect::Reverse => "7",
            Effect::Strike => "9",
        }
    }

    const ALL: [Effect; 7] = [
        Effect::Bold,
        Effect::Dim,
        Effect::Italic,
        Effect::Underline,
        Effect::Blink,
        Effect::Reverse,
        Effect::Strike,
    ];
}

/// A bitset of effects, cheap to copy and to union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct EffectSet(u8);

impl EffectSet {
    fn with(self, e: Effect) -> EffectSet {
        EffectSet(self.0 | e as u8)
    }

    fn without(self, other: EffectSet) -> EffectSet {
        EffectSet(self.0 & !other.0)
    }

    fn union(self, other: EffectSet) -> EffectSet {
        EffectSet(self.0 | other.0)
    }

    fn contains(self, e: Effect) -> bool {
        self.0 & (e as u8) != 0
    }
}

// ─── Style ───────────────────────────────────────────────────────────────────

/// A style declaration. `fg`/`bg` are the last-set colour (right-override);
/// `on`/`off` are the effects this style turns on or explicitly clears.
///
/// Composition (`+`) is literal function composition of "apply this style's
/// on/off masks to the current render state" — which is why it associates:
/// `(a + b) + c == a + (b + c)` regardless of the effect masks involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    fg: Option<Color>,
    bg: Option<Color>,
    on: EffectSet,
    off: EffectSet,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fg(mut self, c: Color) -> Self {
        self.fg = Some(c);
        self
    }

    pub fn with_bg(mut self, c: Color) -> Self {
        self.bg = Some(c);
        self
    }

    pub fn with_effect(mut self, e: Effect) -> Self {
        self.on = self.on.with(e);
        self
    }

    pub fn without_effect(mut self, e: Effect) -> Self {
        self.off = self.off.with(e);
        self
    }

    /// Whether `e` ends up set when this style is applied starting from a
    /// blank render state. `off` only matters when this style is later
    /// composed as the left-hand side of another `+` (see `add`'s derivation).
    pub fn has_effect(&self, e: Effect) -> bool {
        self.on.contains(e)
    }

    /// Parse the whitespace-token grammar of §6. Fatal (`InvalidStyle`) on
    /// any token that is not a colour, `on <colour>`, an effect, or
    /// `not <effect>`.
    pub fn parse(src: &str) -> Result<Style, TextDrawError> {
        // Each token composes via `+` in sequence, so "bold not bold" and
        // "a on red" resolve with the same right-override rule used when
        // combining two already-parsed Style values (§3).
        let mut style = Style::new();
        let tokens: Vec<&str> = src.split_whitespace().collect();
        let mut i = 0;
        while i < tokens.len() {
            let tok = tokens[i];
            if tok == "on" {
                i += 1;
                let Some(color_tok) = tokens.get(i) else {
                    return Err(TextDrawError::InvalidStyle(src.to_string()));
                };
                let Some(color) = Color::parse(color_tok) else {
                    return Err(TextDrawError::InvalidStyle(src.to_string()));
                };
                style += Style::new().with_bg(color);
            } else if tok == "not" {
                i += 1;
                let Some(effect_tok) = tokens.get(i) else {
                    return Err(TextDrawError::InvalidStyle(src.to_string()));
                };
                let Some(effect) = Effect::parse(effect_tok) else {
                    return Err(TextDrawError::InvalidStyle(src.to_string()));
                };
                style += Style::new().without_effect(effect);
            } else if let Some(color) = Color::parse(tok) {
                style += Style::new().with_fg(color);
            } else if let Some(effect) = Effect::parse(tok) {
                style += Style::new().with_effect(effect);
            } else {
                return Err(TextDrawError::InvalidStyle(src.to_string()));
            }
            i += 1;
        }
        Ok(style)
    }

    /// Serialize this style wrapped around `glyph` as a terminal escape.
    pub fn escape(&self, glyph: char) -> String {
        let mut codes: Vec<&str> = Vec::new();
        if let Some(fg) = self.fg {
            codes.push(fg.fg_code());
        }
        if let Some(bg) = self.bg {
            codes.push(bg.bg_code());
        }
        for e in Effect::ALL {
            if self.has_effect(e) {
                codes.push(e.sgr_code());
            }
        }
        if codes.is_empty() {
            return glyph.to_string();
        }
        format!("\x1b[{}m{}\x1b[0m", codes.join(";"), glyph)
    }
}

impl std::ops::Add for Style {
    type Output = Style;

    /// Right-override composition (§3): every attribute of `self` survives
    /// unless `rhs` sets that slot; an effect in `rhs.on` adds, an effect in
    /// `rhs.off` clears — regardless of what `self` held.
    fn add(self, rhs: Style) -> Style {
        Style {
            fg: rhs.fg.or(self.fg),
            bg: rhs.bg.or(self.bg),
            on: self.on.without(rhs.off).union(rhs.on),
            off: self.off.union(rhs.off),
        }
    }
}

impl std::ops::AddAssign for Style {
    fn add_assign(&mut self, rhs: Style) {
        *self = *self + rhs;
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_style.rs"]
mod tests;
