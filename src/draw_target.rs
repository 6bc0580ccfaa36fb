use std::io;

use console::Term;

use crate::TermLike;

/// Target for draw operations
///
/// This tells a progress bar where to paint to and where to ask for the
/// terminal width. Unlike a hidden target, a terminal target keeps writing
/// when the stream is redirected; it just reports no width.
#[derive(Debug)]
pub struct ProgressDrawTarget {
    kind: TargetKind,
}

impl ProgressDrawTarget {
    /// Draw to an unbuffered stdout terminal.
    ///
    /// This is the default draw target for progress bars.
    pub fn stdout() -> Self {
        Self::term(Term::stdout())
    }

    /// Draw to an unbuffered stderr terminal.
    pub fn stderr() -> Self {
        Self::term(Term::stderr())
    }

    /// Draw to a terminal.
    pub fn term(term: Term) -> Self {
        Self {
            kind: TargetKind::Term { term },
        }
    }

    /// Draw to a boxed object that implements the [`TermLike`] trait.
    pub fn term_like(term_like: Box<dyn TermLike>) -> Self {
        Self {
            kind: TargetKind::TermLike { inner: term_like },
        }
    }

    /// A hidden draw target.
    ///
    /// This forces a progress bar to be not rendered at all.
    pub fn hidden() -> Self {
        Self {
            kind: TargetKind::Hidden,
        }
    }

    /// Returns true if the draw target is hidden.
    pub fn is_hidden(&self) -> bool {
        matches!(self.kind, TargetKind::Hidden)
    }

    /// Returns the current width of the draw target, if it is known.
    pub(crate) fn width(&self) -> Option<u16> {
        match self.kind {
            TargetKind::Term { ref term } => TermLike::width(term),
            TargetKind::TermLike { ref inner } => inner.width(),
            TargetKind::Hidden => None,
        }
    }

    /// Writes `s` in one piece and flushes it.
    pub(crate) fn write(&self, s: &str) -> io::Result<()> {
        match self.kind {
            TargetKind::Term { ref term } => {
                term.write_str(s)?;
                term.flush()
            }
            TargetKind::TermLike { ref inner } => {
                inner.write_str(s)?;
                inner.flush()
            }
            TargetKind::Hidden => Ok(()),
        }
    }
}

#[derive(Debug)]
enum TargetKind {
    Term { term: Term },
    TermLike { inner: Box<dyn TermLike> },
    Hidden,
}
