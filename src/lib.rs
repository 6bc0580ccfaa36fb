//! linebar is a single-line progress bar for terminal programs.
//!
//! A bar is described by a [`BarConfig`]: the body width, the glyphs for the
//! completed and pending parts, and the messages printed when the work
//! succeeds or fails. Configurations are validated once when they are built,
//! after which a [`ProgressBar`] renders any progress fraction as
//!
//! ```text
//! [=========================                         ] 50%
//! ```
//!
//! overwriting the same terminal line on every draw.
//!
//! # Building a configuration
//!
//! Options are applied in order on top of the defaults (width 50, `=` for
//! completed, space for pending). Every glyph comes from a fixed allow-list,
//! and the two glyphs must differ:
//!
//! ```rust
//! use linebar::{BarConfig, BarOption, ConfigError, Messages};
//!
//! let config = BarConfig::new([
//!     BarOption::Width(30),
//!     BarOption::CompleteChar('#'),
//!     BarOption::IncompleteChar('-'),
//!     BarOption::Messages(Messages::new("copy failed", "")),
//! ])
//! .unwrap();
//! assert_eq!(config.messages().success, "Operation successful");
//!
//! let err = BarConfig::builder().complete_char('-').incomplete_char('-').build();
//! assert_eq!(err, Err(ConfigError::IdenticalChars('-')));
//! ```
//!
//! # Drawing
//!
//! ```rust,no_run
//! use linebar::{BarConfig, ProgressBar};
//!
//! let bar = ProgressBar::new(BarConfig::default());
//! for i in 0..=20 {
//!     bar.draw(i as f64 / 20.0);
//! }
//! bar.success();
//! ```
//!
//! A bar drawn at `1.0` or more is colored green and ends its line. By
//! default the body shrinks so the line fits the terminal (see
//! [`WidthMode`]); when the output is not a terminal the configured width is
//! used as is.
//!
//! # Testing and embedding
//!
//! [`ProgressDrawTarget::term_like`] accepts anything implementing
//! [`TermLike`], which is both the output sink and the terminal size
//! provider. [`InMemoryTerm`] records the raw output; with the `in_memory`
//! feature it can also show what a terminal would display.

mod ansistyle;
mod config;
mod draw_target;
mod error;
mod format;
mod in_memory;
mod progress_bar;
mod style;
mod term_like;

pub use crate::ansistyle::{style, Color, Styled};
pub use crate::config::{BarConfig, BarConfigBuilder, BarOption, Messages};
pub use crate::draw_target::ProgressDrawTarget;
pub use crate::error::{ConfigError, Result};
pub use crate::format::{FailureReport, Percent};
pub use crate::in_memory::InMemoryTerm;
pub use crate::progress_bar::{ProgressBar, WidthMode};
pub use crate::style::{effective_width, BarChar, Region, OVERHEAD};
pub use crate::term_like::TermLike;
