use crate::error::{ConfigError, Result};
use crate::style::{BarChar, Region};

/// Status messages printed by [`ProgressBar::fail`](crate::ProgressBar::fail)
/// and [`ProgressBar::success`](crate::ProgressBar::success).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Messages {
    pub failed: String,
    pub success: String,
}

impl Messages {
    pub fn new(failed: impl Into<String>, success: impl Into<String>) -> Messages {
        Messages {
            failed: failed.into(),
            success: success.into(),
        }
    }

    /// Overrides the messages with the non-empty fields of `overrides`.
    ///
    /// An empty field keeps the current message.
    pub fn merge(&mut self, overrides: Messages) {
        if !overrides.failed.is_empty() {
            self.failed = overrides.failed;
        }
        if !overrides.success.is_empty() {
            self.success = overrides.success;
        }
    }
}

impl Default for Messages {
    fn default() -> Messages {
        Messages::new("Operation failed", "Operation successful")
    }
}

/// A single configuration override, applied by [`BarConfig::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BarOption {
    /// Target column count for the bar body. Not validated.
    Width(i32),
    /// Glyph for the completed part; must not be a space.
    CompleteChar(char),
    /// Glyph for the pending part; a space is allowed.
    IncompleteChar(char),
    /// Partial message override, see [`Messages::merge`].
    Messages(Messages),
}

impl BarOption {
    /// Applies this option on top of `config`.
    pub fn apply(self, mut config: BarConfig) -> Result<BarConfig> {
        match self {
            BarOption::Width(width) => config.width = width,
            BarOption::CompleteChar(c) => {
                config.complete_char = Region::Complete
                    .glyph(c)
                    .ok_or(ConfigError::InvalidCompleteChar(c))?;
            }
            BarOption::IncompleteChar(c) => {
                config.incomplete_char = Region::Incomplete
                    .glyph(c)
                    .ok_or(ConfigError::InvalidIncompleteChar(c))?;
            }
            BarOption::Messages(messages) => config.messages.merge(messages),
        }
        Ok(config)
    }
}

/// The validated look of a progress bar.
///
/// A `BarConfig` can only be obtained through [`BarConfig::new`],
/// [`BarConfig::builder`] or [`Default`], so its complete and incomplete glyphs
/// always differ.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarConfig {
    width: i32,
    complete_char: BarChar,
    incomplete_char: BarChar,
    messages: Messages,
}

impl BarConfig {
    pub const DEFAULT_WIDTH: i32 = 50;

    /// Builds a configuration from the defaults and the given options.
    ///
    /// Options are applied in order and the first failing option aborts the
    /// build. Afterwards the complete and incomplete glyphs must differ.
    ///
    /// ```
    /// use linebar::{BarConfig, BarOption};
    ///
    /// let config = BarConfig::new([BarOption::Width(10), BarOption::CompleteChar('#')]).unwrap();
    /// assert_eq!(config.width(), 10);
    ///
    /// assert!(BarConfig::new([BarOption::IncompleteChar('=')]).is_err());
    /// ```
    pub fn new<I>(options: I) -> Result<BarConfig>
    where
        I: IntoIterator<Item = BarOption>,
    {
        let config = options
            .into_iter()
            .try_fold(BarConfig::default(), |config, option| option.apply(config))?;

        if config.complete_char == config.incomplete_char {
            return Err(ConfigError::IdenticalChars(config.complete_char.as_char()));
        }
        Ok(config)
    }

    /// Starts a chained builder over the same options as [`BarConfig::new`].
    pub fn builder() -> BarConfigBuilder {
        BarConfigBuilder::default()
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn complete_char(&self) -> BarChar {
        self.complete_char
    }

    pub fn incomplete_char(&self) -> BarChar {
        self.incomplete_char
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }
}

impl Default for BarConfig {
    fn default() -> BarConfig {
        BarConfig {
            width: BarConfig::DEFAULT_WIDTH,
            complete_char: BarChar::Equal,
            incomplete_char: BarChar::Space,
            messages: Messages::default(),
        }
    }
}

/// Records [`BarOption`]s in call order and validates them on [`build`].
///
/// [`build`]: BarConfigBuilder::build
#[derive(Clone, Debug, Default)]
pub struct BarConfigBuilder {
    options: Vec<BarOption>,
}

impl BarConfigBuilder {
    pub fn width(self, width: i32) -> BarConfigBuilder {
        self.option(BarOption::Width(width))
    }

    pub fn complete_char(self, c: char) -> BarConfigBuilder {
        self.option(BarOption::CompleteChar(c))
    }

    pub fn incomplete_char(self, c: char) -> BarConfigBuilder {
        self.option(BarOption::IncompleteChar(c))
    }

    pub fn messages(self, messages: Messages) -> BarConfigBuilder {
        self.option(BarOption::Messages(messages))
    }

    pub fn failed_message(self, message: impl Into<String>) -> BarConfigBuilder {
        self.messages(Messages::new(message, ""))
    }

    pub fn success_message(self, message: impl Into<String>) -> BarConfigBuilder {
        self.messages(Messages::new("", message))
    }

    /// Appends an arbitrary option.
    pub fn option(mut self, option: BarOption) -> BarConfigBuilder {
        self.options.push(option);
        self
    }

    pub fn build(self) -> Result<BarConfig> {
        BarConfig::new(self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BarConfig::new(Vec::<BarOption>::new()).unwrap();
        assert_eq!(config, BarConfig::default());
        assert_eq!(config.width(), 50);
        assert_eq!(config.complete_char(), BarChar::Equal);
        assert_eq!(config.incomplete_char(), BarChar::Space);
        assert_eq!(config.messages().failed, "Operation failed");
        assert_eq!(config.messages().success, "Operation successful");
    }

    #[test]
    fn width_is_not_validated() {
        for width in [1, 10, 1000, 0, -5] {
            let config = BarConfig::new([BarOption::Width(width)]).unwrap();
            assert_eq!(config.width(), width);
        }
    }

    #[test]
    fn invalid_complete_char() {
        for c in [' ', 'x', '0', '█', '~'] {
            let err = BarConfig::new([BarOption::CompleteChar(c)]).unwrap_err();
            assert_eq!(err, ConfigError::InvalidCompleteChar(c));
        }
        let err = BarConfig::new([BarOption::CompleteChar('x')]).unwrap_err();
        assert!(err.to_string().contains("invalid complete character"));
    }

    #[test]
    fn invalid_incomplete_char() {
        for c in ['x', '0', '░', '~'] {
            let err = BarConfig::new([BarOption::IncompleteChar(c)]).unwrap_err();
            assert_eq!(err, ConfigError::InvalidIncompleteChar(c));
        }
        let err = BarConfig::new([BarOption::IncompleteChar('x')]).unwrap_err();
        assert!(err.to_string().contains("invalid incomplete character"));
    }

    #[test]
    fn every_allowed_glyph_builds() {
        for glyph in Region::Complete.chars() {
            let config = BarConfig::new([BarOption::CompleteChar(glyph.as_char())]);
            assert_eq!(config.unwrap().complete_char(), *glyph);
        }
        for glyph in Region::Incomplete.chars() {
            let config = BarConfig::new([
                BarOption::CompleteChar(if *glyph == BarChar::Hash { '*' } else { '#' }),
                BarOption::IncompleteChar(glyph.as_char()),
            ]);
            assert_eq!(config.unwrap().incomplete_char(), *glyph);
        }
    }

    #[test]
    fn identical_chars_rejected_in_any_order() {
        let err = BarConfig::new([BarOption::IncompleteChar('=')]).unwrap_err();
        assert_eq!(err, ConfigError::IdenticalChars('='));

        let err = BarConfig::new([BarOption::CompleteChar('#'), BarOption::IncompleteChar('#')])
            .unwrap_err();
        assert_eq!(err, ConfigError::IdenticalChars('#'));

        let err = BarConfig::new([BarOption::IncompleteChar('#'), BarOption::CompleteChar('#')])
            .unwrap_err();
        assert_eq!(err, ConfigError::IdenticalChars('#'));
        assert_eq!(
            err.to_string(),
            "complete and incomplete characters must differ (both are '#')"
        );
    }

    #[test]
    fn intermediate_collisions_are_fine() {
        // Equal to the default complete glyph halfway through, resolved by the last option.
        let config = BarConfig::new([
            BarOption::IncompleteChar('='),
            BarOption::CompleteChar('#'),
        ])
        .unwrap();
        assert_eq!(config.complete_char(), BarChar::Hash);
        assert_eq!(config.incomplete_char(), BarChar::Equal);
    }

    #[test]
    fn first_failing_option_wins() {
        let err = BarConfig::new([
            BarOption::Width(10),
            BarOption::IncompleteChar('x'),
            BarOption::CompleteChar('y'),
        ])
        .unwrap_err();
        assert_eq!(err, ConfigError::InvalidIncompleteChar('x'));
    }

    #[test]
    fn later_options_override_earlier_ones() {
        let config = BarConfig::new([
            BarOption::Width(10),
            BarOption::CompleteChar('#'),
            BarOption::Width(20),
            BarOption::CompleteChar('>'),
        ])
        .unwrap();
        assert_eq!(config.width(), 20);
        assert_eq!(config.complete_char(), BarChar::GreaterThan);
    }

    #[test]
    fn custom_messages() {
        let config =
            BarConfig::new([BarOption::Messages(Messages::new("custom failed", "custom ok"))])
                .unwrap();
        assert_eq!(config.messages(), &Messages::new("custom failed", "custom ok"));
    }

    #[test]
    fn partial_messages_keep_previous_values() {
        let config = BarConfig::new([BarOption::Messages(Messages::new("only failed", ""))]).unwrap();
        assert_eq!(config.messages().failed, "only failed");
        assert_eq!(config.messages().success, "Operation successful");

        let config = BarConfig::new([
            BarOption::Messages(Messages::new("first", "first ok")),
            BarOption::Messages(Messages::new("", "second ok")),
        ])
        .unwrap();
        assert_eq!(config.messages(), &Messages::new("first", "second ok"));
    }

    #[test]
    fn builder_matches_options() {
        let built = BarConfig::builder()
            .width(30)
            .complete_char('#')
            .incomplete_char('-')
            .failed_message("boom")
            .build()
            .unwrap();
        let direct = BarConfig::new([
            BarOption::Width(30),
            BarOption::CompleteChar('#'),
            BarOption::IncompleteChar('-'),
            BarOption::Messages(Messages::new("boom", "")),
        ])
        .unwrap();
        assert_eq!(built, direct);
        assert_eq!(built.messages().success, "Operation successful");

        let err = BarConfig::builder().complete_char('-').incomplete_char('-').build();
        assert_eq!(err.unwrap_err(), ConfigError::IdenticalChars('-'));
    }
}
