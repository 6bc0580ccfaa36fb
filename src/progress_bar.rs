use std::fmt;

use crate::ansistyle::style;
use crate::config::BarConfig;
use crate::draw_target::ProgressDrawTarget;
use crate::format::{FailureReport, Percent};
use crate::style::{effective_width, format_bar};

/// How the bar body width is chosen on every draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMode {
    /// Shrink the configured width to fit the terminal when its width is known.
    #[default]
    Adaptive,
    /// Always use the configured width, whatever the terminal size.
    Fixed,
}

/// A single-line progress bar
///
/// The bar keeps no progress state of its own: every [`draw`] renders the given fraction from
/// scratch and starts with a carriage return, so successive draws overwrite the same terminal
/// line. Callers drawing from several threads must serialize the calls themselves.
///
/// ```no_run
/// use linebar::{BarConfig, ProgressBar};
///
/// let bar = ProgressBar::new(BarConfig::builder().width(30).build().unwrap());
/// for i in 0..=100 {
///     bar.draw(i as f64 / 100.0);
/// }
/// bar.success();
/// ```
///
/// [`draw`]: ProgressBar::draw
#[derive(Debug)]
pub struct ProgressBar {
    config: BarConfig,
    draw_target: ProgressDrawTarget,
    width_mode: WidthMode,
}

impl ProgressBar {
    /// Creates a new progress bar drawing to stdout
    pub fn new(config: BarConfig) -> ProgressBar {
        ProgressBar::with_draw_target(config, ProgressDrawTarget::stdout())
    }

    /// Creates a completely hidden progress bar
    pub fn hidden(config: BarConfig) -> ProgressBar {
        ProgressBar::with_draw_target(config, ProgressDrawTarget::hidden())
    }

    /// Creates a new progress bar with a given draw target
    pub fn with_draw_target(config: BarConfig, draw_target: ProgressDrawTarget) -> ProgressBar {
        ProgressBar {
            config,
            draw_target,
            width_mode: WidthMode::default(),
        }
    }

    /// A convenience builder-like function for a progress bar with a given width mode
    pub fn with_width_mode(mut self, width_mode: WidthMode) -> ProgressBar {
        self.width_mode = width_mode;
        self
    }

    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    pub fn width_mode(&self) -> WidthMode {
        self.width_mode
    }

    /// A quick convenience check if the progress bar is hidden
    pub fn is_hidden(&self) -> bool {
        self.draw_target.is_hidden()
    }

    /// Returns the number of glyphs the bar body would have if drawn now
    pub fn bar_width(&self) -> usize {
        match self.width_mode {
            WidthMode::Fixed => effective_width(self.config.width(), None),
            WidthMode::Adaptive => {
                let term_cols = self.draw_target.width();
                if term_cols.is_none() {
                    log::trace!(
                        "terminal width unavailable, using configured width {}",
                        self.config.width()
                    );
                }
                effective_width(self.config.width(), term_cols)
            }
        }
    }

    /// Renders the line [`draw`](ProgressBar::draw) would write for `progress`
    ///
    /// A complete bar (`progress >= 1.0`) is colored green and ends the line.
    pub fn render_line(&self, progress: f64) -> String {
        let bar = format_bar(
            self.config.complete_char(),
            self.config.incomplete_char(),
            self.bar_width(),
            progress,
        );
        let line = format!("[{}] {}", bar, Percent(progress));

        if progress >= 1.0 {
            format!("\r{}\n", style(line).green())
        } else {
            format!("\r{}", line)
        }
    }

    /// Draws the bar for `progress`, expected to be in `[0.0, 1.0]`
    pub fn draw(&self, progress: f64) {
        if self.is_hidden() {
            return;
        }
        self.emit(&self.render_line(progress));
    }

    /// Prints the configured success message
    pub fn success(&self) {
        let line = format!("Success: {}", self.config.messages().success);
        self.emit(&format!("{}\n", style(line).green()));
    }

    /// Prints the configured failure message
    pub fn fail(&self) {
        self.fail_with(None, None)
    }

    /// Prints `error` followed by the configured failure message
    pub fn fail_with_error(&self, error: &dyn fmt::Display) {
        self.fail_with(Some(error), None)
    }

    /// Prints an optional error followed by `message`, or by the configured
    /// failure message when no override is given
    pub fn fail_with(&self, error: Option<&dyn fmt::Display>, message: Option<&str>) {
        let report = FailureReport {
            error,
            message: message.unwrap_or(self.config.messages().failed.as_str()),
        };
        self.emit(&format!("\n{}\n", style(report).red()));
    }

    fn emit(&self, s: &str) {
        if let Err(err) = self.draw_target.write(s) {
            log::debug!("failed to write progress bar output: {}", err);
        }
    }
}
