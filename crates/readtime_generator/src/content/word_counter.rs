use readtime::Configuration;

use super::{content_variables::ContentVariables, front_matter::FrontMatter};

pub const TYPE_KEY: &str = "type";
pub const LANGUAGE_KEY: &str = "lang";
pub const READTIME_KEY: &str = "readtime";

pub const DEFAULT_CONTENT_TYPE: &str = "Article";
pub const DEFAULT_LANGUAGE: &str = "en";

/// Attaches the read time variables of one document.
///
/// Nothing is attached for unsupported content types. A read time given in the
/// front matter wins over the computed one.
pub fn compute_read_time(
    settings: &Configuration,
    body: &str,
    front_matter: &FrontMatter,
    variables: &mut ContentVariables,
) -> anyhow::Result<()> {
    let word_count = readtime::count_words(body);
    variables.insert("md_word_count".to_owned(), word_count.to_string());

    if let Some(readtime) = front_matter.get(READTIME_KEY) {
        tracing::debug!("Keeping read time '{}' set by the author.", readtime);
        variables.insert(READTIME_KEY.to_owned(), readtime.to_string());
        return Ok(());
    }

    let content_type = label(front_matter, TYPE_KEY, DEFAULT_CONTENT_TYPE);
    if !settings.is_supported(&content_type) {
        tracing::debug!("Content type '{}' has no read time.", content_type);
        return Ok(());
    }

    let language = label(front_matter, LANGUAGE_KEY, DEFAULT_LANGUAGE);
    let result = readtime::build_result(word_count, settings.resolve_profile(&language))?;

    variables.insert(READTIME_KEY.to_owned(), result.minutes.to_string());
    variables.insert(
        "readtime_minutes".to_owned(),
        result.minutes_rounded_up().to_string(),
    );
    variables.insert(
        "readtime_with_seconds".to_owned(),
        format!("{}:{:02}", result.minutes, result.seconds),
    );
    variables.insert("readtime_string".to_owned(), result.minute_label);
    variables.insert(
        "readtime_string_with_seconds".to_owned(),
        result.combined_label,
    );

    Ok(())
}

/// Label written in the front matter whatever its value type, `default` only when
/// the key is absent.
fn label(front_matter: &FrontMatter, key: &str, default: &str) -> String {
    front_matter
        .get(key)
        .map_or_else(|| default.to_owned(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::content::front_matter;

    const READTIME_VARIABLES: [&str; 5] = [
        "readtime",
        "readtime_minutes",
        "readtime_with_seconds",
        "readtime_string",
        "readtime_string_with_seconds",
    ];

    fn settings() -> Configuration {
        readtime::build(&json!({
            "wordsPerMinute": {
                "default": {
                    "wordsPerMinute": 123,
                    "minuteSingular": "minute",
                    "minutePlural": "minutes",
                    "secondSingular": "second",
                    "secondPlural": "seconds"
                },
                "pl": {
                    "wordsPerMinute": 180,
                    "minuteSingular": "minuta",
                    "minutePlural": "minut",
                    "secondSingular": "sekunda",
                    "secondPlural": "sekund"
                }
            }
        }))
        .unwrap()
    }

    fn document(header: &str, word_count: usize) -> (String, FrontMatter) {
        let mut file_content = format!("---\n{header}\n---\n{}", vec!["wood"; word_count].join(" "));
        let front_matter = front_matter::extract(&mut file_content);
        (file_content, front_matter)
    }

    fn compute(header: &str, word_count: usize) -> ContentVariables {
        let (body, front_matter) = document(header, word_count);
        let mut variables = ContentVariables::new();
        compute_read_time(&settings(), &body, &front_matter, &mut variables).unwrap();
        variables
    }

    #[test]
    fn article_gets_every_variable() {
        let variables = compute("title: \"Post\"", 865);

        assert_eq!(variables.get("md_word_count"), Some("865"));
        assert_eq!(variables.get("readtime"), Some("7"));
        assert_eq!(variables.get("readtime_minutes"), Some("8"));
        assert_eq!(variables.get("readtime_with_seconds"), Some("7:01"));
        assert_eq!(variables.get("readtime_string"), Some("7 minutes"));
        assert_eq!(
            variables.get("readtime_string_with_seconds"),
            Some("7 minutes, 1 second")
        );
    }

    #[test]
    fn language_selects_profile() {
        // 180 / 180 * 60 = 60 s
        let variables = compute("lang: pl", 180);
        assert_eq!(variables.get("readtime_string_with_seconds"), Some("1 minuta, 0 sekund"));

        let variables = compute("lang: de", 123);
        assert_eq!(variables.get("readtime_string_with_seconds"), Some("1 minute, 0 seconds"));
    }

    #[test]
    fn unsupported_type_has_no_read_time() {
        let variables = compute("type: UnsupportedArticle", 754);

        assert_eq!(variables.get("md_word_count"), Some("754"));
        for key in READTIME_VARIABLES {
            assert_eq!(variables.get(key), None, "{key} should not be set");
        }
    }

    #[test]
    fn non_string_type_is_checked_as_written() {
        let settings = readtime::build(&json!({ "contentTypeSupport": ["Article", "2024"] })).unwrap();
        let article_only = readtime::build(&json!({ "contentTypeSupport": ["Article"] })).unwrap();

        for header in ["type: 2024", "type: true", "type: [Page]"] {
            let (body, front_matter) = document(header, 754);
            let mut variables = ContentVariables::new();
            compute_read_time(&article_only, &body, &front_matter, &mut variables).unwrap();
            for key in READTIME_VARIABLES {
                assert_eq!(variables.get(key), None, "{key} should not be set for '{header}'");
            }
        }

        let (body, front_matter) = document("type: 2024", 200);
        let mut variables = ContentVariables::new();
        compute_read_time(&settings, &body, &front_matter, &mut variables).unwrap();
        assert_eq!(variables.get("readtime_string"), Some("1 minute"));
    }

    #[test]
    fn non_string_language_is_checked_as_written() {
        let settings = readtime::build(&json!({
            "wordsPerMinute": {
                "default": {
                    "wordsPerMinute": 200,
                    "minuteSingular": "minute",
                    "minutePlural": "minutes",
                    "secondSingular": "second",
                    "secondPlural": "seconds"
                },
                "1": {
                    "wordsPerMinute": 100,
                    "minuteSingular": "one",
                    "minutePlural": "ones",
                    "secondSingular": "tick",
                    "secondPlural": "ticks"
                }
            }
        }))
        .unwrap();

        let (body, front_matter) = document("lang: 1", 100);
        let mut variables = ContentVariables::new();
        compute_read_time(&settings, &body, &front_matter, &mut variables).unwrap();
        assert_eq!(variables.get("readtime_string_with_seconds"), Some("1 one, 0 ticks"));
    }

    #[test]
    fn author_read_time_is_kept() {
        let variables = compute("readtime: 12", 754);

        assert_eq!(variables.get("readtime"), Some("12"));
        assert_eq!(variables.get("readtime_string_with_seconds"), None);
    }

    #[test]
    fn page_and_draft_are_supported_by_default() {
        for content_type in ["Page", "Draft"] {
            let variables = compute(&format!("type: {content_type}"), 123);
            assert_eq!(variables.get("readtime_string"), Some("1 minute"));
        }
    }
}
