use thiserror::Error;

/// Errors that can happen while building a [`BarConfig`](crate::BarConfig).
///
/// A failed build never hands out a partially configured bar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The glyph is not allowed for the completed part of the bar.
    #[error("invalid complete character: {0:?}")]
    InvalidCompleteChar(char),

    /// The glyph is not allowed for the pending part of the bar.
    #[error("invalid incomplete character: {0:?}")]
    InvalidIncompleteChar(char),

    /// Both regions resolved to the same glyph, which would make a full bar
    /// indistinguishable from an empty one.
    #[error("complete and incomplete characters must differ (both are {0:?})")]
    IdenticalChars(char),
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
