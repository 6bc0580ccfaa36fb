use std::fmt::Debug;
use std::io;

use console::Term;

/// A trait for minimal terminal-like behavior.
///
/// Anything that implements this trait can be used as a draw target via
/// [`ProgressDrawTarget::term_like`]. It doubles as the terminal size provider
/// for width adaptation.
///
/// [`ProgressDrawTarget::term_like`]: crate::ProgressDrawTarget::term_like
pub trait TermLike: Debug + Send + Sync {
    /// Return the terminal width in columns, or `None` when it cannot be
    /// determined (output is not a terminal, or the query failed)
    fn width(&self) -> Option<u16>;

    /// Write a string
    fn write_str(&self, s: &str) -> io::Result<()>;

    fn flush(&self) -> io::Result<()>;
}

impl TermLike for Term {
    fn width(&self) -> Option<u16> {
        self.size_checked()
            .map(|(_rows, cols)| cols)
            .filter(|&cols| cols > 0)
    }

    fn write_str(&self, s: &str) -> io::Result<()> {
        self.write_str(s)
    }

    fn flush(&self) -> io::Result<()> {
        self.flush()
    }
}
