use std::str::FromStr;

use serde_json::{Map, Value};

use crate::{error::ConfigError, profile::LanguageProfile};

pub const CONTENT_TYPE_SUPPORT_KEY: &str = "contentTypeSupport";
pub const WORDS_PER_MINUTE_KEY: &str = "wordsPerMinute";
pub const MINUTE_SINGULAR_KEY: &str = "minuteSingular";
pub const MINUTE_PLURAL_KEY: &str = "minutePlural";
pub const SECOND_SINGULAR_KEY: &str = "secondSingular";
pub const SECOND_PLURAL_KEY: &str = "secondPlural";

pub const DEFAULT_LANGUAGE: &str = "default";
pub const DEFAULT_CONTENT_TYPES: [&str; 3] = ["Article", "Page", "Draft"];

const ROOT_FIELD: &str = "<root>";
const PROFILE_KEYS: [&str; 5] = [
    WORDS_PER_MINUTE_KEY,
    MINUTE_SINGULAR_KEY,
    MINUTE_PLURAL_KEY,
    SECOND_SINGULAR_KEY,
    SECOND_PLURAL_KEY,
];

/// Validated read time settings.
///
/// Always holds a `default` profile and only profiles with a positive rate, so
/// lookups on it never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    supported_content_types: Vec<String>,
    profiles: Vec<(String, LanguageProfile)>,
    default_index: usize,
}

impl Configuration {
    pub fn is_supported(&self, content_type: &str) -> bool {
        self.supported_content_types
            .iter()
            .any(|supported| supported == content_type)
    }

    /// Profile for `language`, or the `default` profile when the language has none.
    pub fn resolve_profile(&self, language: &str) -> &LanguageProfile {
        self.profiles
            .iter()
            .find(|(code, _)| code == language)
            .map_or(&self.profiles[self.default_index].1, |(_, profile)| profile)
    }

    /// Content type labels in the order they were configured.
    pub fn supported_content_types(&self) -> &[String] {
        &self.supported_content_types
    }

    /// Language codes in the order they were configured.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|(code, _)| code.as_str())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            supported_content_types: DEFAULT_CONTENT_TYPES
                .iter()
                .map(|label| label.to_string())
                .collect(),
            profiles: vec![(DEFAULT_LANGUAGE.to_owned(), LanguageProfile::default())],
            default_index: 0,
        }
    }
}

impl FromStr for Configuration {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: Value = serde_json::from_str(s)?;
        build(&raw)
    }
}

/// Validates the raw settings object and normalizes it into a [`Configuration`].
///
/// Stops at the first violation. Languages are checked in input order.
pub fn build(raw: &Value) -> Result<Configuration, ConfigError> {
    let empty = Map::new();
    let raw = match raw {
        Value::Object(map) => map,
        Value::Null => &empty,
        _ => return Err(ConfigError::InvalidShape { field: ROOT_FIELD }),
    };

    for key in raw.keys() {
        if key != CONTENT_TYPE_SUPPORT_KEY && key != WORDS_PER_MINUTE_KEY {
            tracing::warn!("Ignoring unknown read time setting '{}'.", key);
        }
    }

    let supported_content_types = match get_present(raw, CONTENT_TYPE_SUPPORT_KEY) {
        Some(value) => parse_content_types(value)?,
        None => Configuration::default().supported_content_types,
    };

    let profiles = match get_present(raw, WORDS_PER_MINUTE_KEY) {
        Some(value) => parse_speed_table(value)?,
        None => Configuration::default().profiles,
    };

    let Some(default_index) = profiles
        .iter()
        .position(|(code, _)| code == DEFAULT_LANGUAGE)
    else {
        return Err(ConfigError::MissingDefault);
    };

    tracing::debug!(
        "Read time supports content types {:?} with profiles for {:?}.",
        supported_content_types,
        profiles.iter().map(|(code, _)| code).collect::<Vec<_>>()
    );

    Ok(Configuration {
        supported_content_types,
        profiles,
        default_index,
    })
}

pub fn resolve_profile<'a>(config: &'a Configuration, language: &str) -> &'a LanguageProfile {
    config.resolve_profile(language)
}

pub fn is_supported(config: &Configuration, content_type: &str) -> bool {
    config.is_supported(content_type)
}

/// `null` counts as absent.
fn get_present<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|value| !value.is_null())
}

fn parse_content_types(value: &Value) -> Result<Vec<String>, ConfigError> {
    let invalid = || ConfigError::InvalidShape {
        field: CONTENT_TYPE_SUPPORT_KEY,
    };
    let Value::Array(labels) = value else {
        return Err(invalid());
    };

    let mut result: Vec<String> = Vec::with_capacity(labels.len());
    for label in labels {
        let Value::String(label) = label else {
            return Err(invalid());
        };

        if result.contains(label) {
            tracing::trace!("Content type '{}' is listed more than once.", label);
            continue;
        }
        result.push(label.clone());
    }

    Ok(result)
}

fn parse_speed_table(value: &Value) -> Result<Vec<(String, LanguageProfile)>, ConfigError> {
    match value {
        Value::Number(number) if number.is_i64() || number.is_u64() => {
            let words_per_minute = parse_words_per_minute(DEFAULT_LANGUAGE, value)?;
            Ok(vec![(
                DEFAULT_LANGUAGE.to_owned(),
                LanguageProfile::with_words_per_minute(words_per_minute),
            )])
        }
        Value::Object(table) => {
            let mut profiles = Vec::with_capacity(table.len());
            for (language, entry) in table {
                let profile = parse_profile(language, entry)?;
                tracing::trace!("Loaded read time profile for '{}'.", language);
                profiles.push((language.clone(), profile));
            }

            Ok(profiles)
        }
        _ => Err(ConfigError::InvalidShape {
            field: WORDS_PER_MINUTE_KEY,
        }),
    }
}

fn parse_profile(language: &str, entry: &Value) -> Result<LanguageProfile, ConfigError> {
    let Value::Object(entry) = entry else {
        return Err(ConfigError::InvalidShape {
            field: WORDS_PER_MINUTE_KEY,
        });
    };

    let words_per_minute =
        parse_words_per_minute(language, get_required(language, entry, WORDS_PER_MINUTE_KEY)?)?;
    let profile = LanguageProfile {
        words_per_minute,
        minute_singular: get_required_string(language, entry, MINUTE_SINGULAR_KEY)?,
        minute_plural: get_required_string(language, entry, MINUTE_PLURAL_KEY)?,
        second_singular: get_required_string(language, entry, SECOND_SINGULAR_KEY)?,
        second_plural: get_required_string(language, entry, SECOND_PLURAL_KEY)?,
    };

    for key in entry.keys() {
        if !PROFILE_KEYS.contains(&key.as_str()) {
            tracing::warn!("Ignoring unknown field '{}' in profile '{}'.", key, language);
        }
    }

    Ok(profile)
}

fn get_required<'a>(
    language: &str,
    entry: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, ConfigError> {
    get_present(entry, field).ok_or_else(|| ConfigError::MissingField {
        language: language.to_owned(),
        field,
    })
}

fn get_required_string(
    language: &str,
    entry: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ConfigError> {
    match get_required(language, entry, field)? {
        Value::String(str) => Ok(str.clone()),
        _ => Err(ConfigError::InvalidType {
            language: language.to_owned(),
            field,
        }),
    }
}

fn parse_words_per_minute(language: &str, value: &Value) -> Result<u32, ConfigError> {
    value
        .as_u64()
        .filter(|&rate| rate > 0)
        .and_then(|rate| u32::try_from(rate).ok())
        .ok_or_else(|| ConfigError::InvalidType {
            language: language.to_owned(),
            field: WORDS_PER_MINUTE_KEY,
        })
}
