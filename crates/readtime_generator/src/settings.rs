use std::path::Path;

use anyhow::Context;
use readtime::Configuration;
use tokio::fs;

pub const SETTINGS_FILE_NAME: &str = "readtime.json";

/// Loads and validates the read time settings.
///
/// A missing file means defaults. Anything else that goes wrong is an error, the
/// generator must not silently fall back when the author wrote settings.
#[tracing::instrument]
pub async fn load(path: &Path) -> anyhow::Result<Configuration> {
    let text = match fs::read_to_string(path).await {
        Ok(text) => text,
        Err(error) => {
            if error.kind() == std::io::ErrorKind::NotFound {
                tracing::info!(
                    "No read time settings at '{}', using defaults.",
                    path.display()
                );
                return Ok(Configuration::default());
            }

            return Err(error)
                .with_context(|| format!("Unable to read settings '{}'.", path.display()));
        }
    };

    let raw: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Settings '{}' are not valid JSON.", path.display()))?;
    let settings = readtime::build(&raw)
        .with_context(|| format!("Invalid read time settings in '{}'.", path.display()))?;

    tracing::info!(
        "Loaded read time settings for content types {:?}.",
        settings.supported_content_types()
    );
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load(&dir.path().join(SETTINGS_FILE_NAME)).await.unwrap();
        assert_eq!(settings, Configuration::default());
    }

    #[tokio::test]
    async fn loads_speed_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(
            &path,
            r#"{ "contentTypeSupport": ["Article"], "wordsPerMinute": 250 }"#,
        )
        .unwrap();

        let settings = load(&path).await.unwrap();
        assert!(settings.is_supported("Article"));
        assert!(!settings.is_supported("Page"));
        assert_eq!(settings.resolve_profile("en").words_per_minute, 250);
    }

    #[tokio::test]
    async fn invalid_settings_are_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);

        std::fs::write(&path, r#"{ "wordsPerMinute": { "en": {} } }"#).unwrap();
        let error = load(&path).await.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<readtime::ConfigError>(),
            Some(readtime::ConfigError::MissingField { .. })
        ));

        std::fs::write(&path, "wordsPerMinute = 200").unwrap();
        assert!(load(&path).await.is_err());
    }
}
