use serde::Serialize;

pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Reading rate and vocabulary for one language code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageProfile {
    pub words_per_minute: u32,
    pub minute_singular: String,
    pub minute_plural: String,
    pub second_singular: String,
    pub second_plural: String,
}

impl LanguageProfile {
    /// Built-in English vocabulary with a custom rate.
    pub fn with_words_per_minute(words_per_minute: u32) -> Self {
        Self {
            words_per_minute,
            ..Self::default()
        }
    }
}

impl Default for LanguageProfile {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            minute_singular: "minute".to_owned(),
            minute_plural: "minutes".to_owned(),
            second_singular: "second".to_owned(),
            second_plural: "seconds".to_owned(),
        }
    }
}
