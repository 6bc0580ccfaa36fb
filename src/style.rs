use std::fmt;
use std::iter::repeat;

/// Columns reserved around the bar body for `[`, `]` and the ` 100%` suffix.
pub const OVERHEAD: u16 = 7;

/// A glyph that may be used to draw the body of a bar.
///
/// The set is closed on purpose: every glyph is a single-column ASCII
/// character, so the bar body width in columns equals its length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BarChar {
    Space,
    Hash,
    Asterisk,
    Equal,
    Plus,
    Dash,
    GreaterThan,
    LessThan,
    Colon,
    Exclamation,
    Dollar,
    At,
    Percent,
    Caret,
    Ampersand,
}

/// Glyphs accepted for the completed part of the bar.
const COMPLETE_CHARS: &[BarChar] = &[
    BarChar::Hash,
    BarChar::Asterisk,
    BarChar::Equal,
    BarChar::Plus,
    BarChar::Dash,
    BarChar::GreaterThan,
    BarChar::LessThan,
    BarChar::Colon,
    BarChar::Exclamation,
    BarChar::Dollar,
    BarChar::At,
    BarChar::Percent,
    BarChar::Caret,
    BarChar::Ampersand,
];

/// Glyphs accepted for the pending part of the bar: the complete set plus space.
const INCOMPLETE_CHARS: &[BarChar] = &[
    BarChar::Space,
    BarChar::Hash,
    BarChar::Asterisk,
    BarChar::Equal,
    BarChar::Plus,
    BarChar::Dash,
    BarChar::GreaterThan,
    BarChar::LessThan,
    BarChar::Colon,
    BarChar::Exclamation,
    BarChar::Dollar,
    BarChar::At,
    BarChar::Percent,
    BarChar::Caret,
    BarChar::Ampersand,
];

impl BarChar {
    /// Returns the character drawn for this glyph.
    pub const fn as_char(self) -> char {
        match self {
            BarChar::Space => ' ',
            BarChar::Hash => '#',
            BarChar::Asterisk => '*',
            BarChar::Equal => '=',
            BarChar::Plus => '+',
            BarChar::Dash => '-',
            BarChar::GreaterThan => '>',
            BarChar::LessThan => '<',
            BarChar::Colon => ':',
            BarChar::Exclamation => '!',
            BarChar::Dollar => '$',
            BarChar::At => '@',
            BarChar::Percent => '%',
            BarChar::Caret => '^',
            BarChar::Ampersand => '&',
        }
    }

    /// Looks up the glyph for `c`, if `c` is one of the known bar glyphs.
    pub fn from_char(c: char) -> Option<BarChar> {
        INCOMPLETE_CHARS
            .iter()
            .copied()
            .find(|glyph| glyph.as_char() == c)
    }
}

impl From<BarChar> for char {
    fn from(glyph: BarChar) -> char {
        glyph.as_char()
    }
}

impl fmt::Display for BarChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_char(), f)
    }
}

/// The part of the bar a glyph is drawn in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Complete,
    Incomplete,
}

impl Region {
    /// Returns the allow-list for this region.
    pub fn chars(self) -> &'static [BarChar] {
        match self {
            Region::Complete => COMPLETE_CHARS,
            Region::Incomplete => INCOMPLETE_CHARS,
        }
    }

    pub fn allows(self, glyph: BarChar) -> bool {
        self.chars().contains(&glyph)
    }

    /// Resolves `c` to a glyph permitted in this region.
    pub fn glyph(self, c: char) -> Option<BarChar> {
        BarChar::from_char(c).filter(|glyph| self.allows(*glyph))
    }
}

/// Computes the bar body width for a configured width and the terminal
/// column count, if one is known.
///
/// Without a terminal width the configured width is used as is, and a
/// non-positive one yields an empty body. With a terminal width, the body
/// shrinks to fit next to the decoration but never below one column.
pub fn effective_width(configured: i32, term_cols: Option<u16>) -> usize {
    match term_cols {
        Some(cols) => {
            let available = i64::from(cols) - i64::from(OVERHEAD);
            i64::from(configured).min(available).max(1) as usize
        }
        None => configured.max(0) as usize,
    }
}

/// Builds the bar body: `floor(progress * width)` complete glyphs followed by
/// incomplete glyphs up to `width`.
///
/// Progress outside `[0, 1]` is clamped for the fill count and NaN fills
/// nothing, so the body is always exactly `width` glyphs long.
pub(crate) fn format_bar(
    complete: BarChar,
    incomplete: BarChar,
    width: usize,
    progress: f64,
) -> String {
    let fill = if progress.is_nan() {
        0
    } else {
        let fill = (progress.clamp(0.0, 1.0) * width as f64).floor() as usize;
        fill.min(width)
    };

    let mut bar = String::with_capacity(width);
    bar.extend(repeat(complete.as_char()).take(fill));
    bar.extend(repeat(incomplete.as_char()).take(width - fill));
    bar
}
