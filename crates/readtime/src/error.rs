use thiserror::Error;

/// Errors raised while validating the raw read time settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A setting is present but is neither of the accepted shapes.
    #[error("setting `{field}` has an invalid shape")]
    InvalidShape { field: &'static str },

    /// A language profile lacks one of its required fields.
    #[error("profile `{language}` is missing field `{field}`")]
    MissingField {
        language: String,
        field: &'static str,
    },

    /// A language profile field has the wrong type, or a non-positive rate.
    #[error("profile `{language}` has an invalid value for `{field}`")]
    InvalidType {
        language: String,
        field: &'static str,
    },

    /// The speed table was given as a mapping without a `default` entry.
    #[error("speed table has no `default` profile")]
    MissingDefault,

    /// The settings text could not be parsed at all.
    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationError {
    #[error("words per minute must be positive, got {words_per_minute}")]
    NonPositiveRate { words_per_minute: i64 },
}
