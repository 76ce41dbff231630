//! File-based studio configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use vetrina_core::AiModel;
use vetrina_error::{ConfigError, VetrinaResult};
use vetrina_gemini::GeminiConfig;

/// Configuration loaded at startup.
///
/// Runtime preferences (active model, stored keys) live in the session and
/// are edited from the profile phase; this covers the initial defaults and
/// the driver's operational knobs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudioConfig {
    /// The model new sessions start on
    #[serde(default)]
    pub default_model: AiModel,
    /// Gemini driver settings
    #[serde(default)]
    pub gemini: GeminiConfig,
}

impl StudioConfig {
    /// Load studio configuration from a TOML file.
    #[tracing::instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> VetrinaResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_file() {
        let parsed: StudioConfig = toml::from_str(
            r#"
            default_model = "Gemini"

            [gemini]
            poll_interval_secs = 5
            poll_max_attempts = 12
            "#,
        )
        .unwrap();
        assert_eq!(parsed.default_model, AiModel::Gemini);
        assert_eq!(parsed.gemini.poll_max_attempts, 12);
        assert_eq!(parsed.gemini.poll_interval_secs, 5);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let parsed: StudioConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.default_model, AiModel::Gemini);
        assert_eq!(parsed.gemini.poll_max_attempts, 30);
    }
}
