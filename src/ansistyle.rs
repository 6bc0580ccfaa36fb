use std::fmt;

/// An ANSI foreground color used for status output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
}

impl Color {
    #[inline(always)]
    fn ansi_num(self) -> usize {
        match self {
            Color::Red => 1,
            Color::Green => 2,
        }
    }
}

/// A formatting wrapper that can be colored for a terminal.
///
/// A colored value is always followed by the `\x1b[0m` reset, even when the
/// value itself formats to nothing.
#[derive(Copy, Clone, Debug)]
pub struct Styled<D> {
    fg: Option<Color>,
    val: D,
}

/// Wraps an object for formatting for styling.
///
/// Example:
///
/// ```rust
/// use linebar::style;
///
/// assert_eq!(format!("{}", style("done").green()), "\x1b[32mdone\x1b[0m");
/// ```
pub fn style<D>(val: D) -> Styled<D> {
    Styled { fg: None, val }
}

impl<D> Styled<D> {
    /// Sets a foreground color.
    #[inline(always)]
    pub fn fg(mut self, color: Color) -> Styled<D> {
        self.fg = Some(color);
        self
    }

    #[inline(always)]
    pub fn red(self) -> Styled<D> {
        self.fg(Color::Red)
    }

    #[inline(always)]
    pub fn green(self) -> Styled<D> {
        self.fg(Color::Green)
    }
}

impl<D: fmt::Display> fmt::Display for Styled<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(fg) = self.fg {
            write!(f, "\x1b[{}m", fg.ansi_num() + 30)?;
        }
        fmt::Display::fmt(&self.val, f)?;
        if self.fg.is_some() {
            write!(f, "\x1b[0m")?;
        }
        Ok(())
    }
}
