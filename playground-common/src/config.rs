//! Playground configuration, read from `playground.yaml`

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::lang::Lang;
use crate::share::{restore_over, FragmentSource};
use crate::state::State;

/// Configuration errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("YAML error: {0}")]
    Yaml(String),
    #[error("Unsupported default language: {0}")]
    UnsupportedLang(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Base URL for share links. When unset the page's own URL is used.
    pub share_base_url: Option<String>,
    /// Language of the default sample, as a lowercase tag
    pub default_lang: Option<String>,
    /// Rewrite the location fragment after every edit instead of only on share
    pub sync_hash_on_edit: bool,
}

impl PlaygroundConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Yaml(e.to_string()))?;
        // empty or comment-only document
        if value.is_null() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_value(value).map_err(|e| ConfigError::Yaml(e.to_string()))?;
        if let Some(lang) = &config.default_lang {
            lang.parse::<Lang>()
                .map_err(|_| ConfigError::UnsupportedLang(lang.clone()))?;
        }
        info!(
            share_base_url = ?config.share_base_url,
            default_lang = ?config.default_lang,
            "Loaded playground config"
        );
        Ok(config)
    }

    /// The default sample with this config's overrides applied
    pub fn default_state(&self) -> State {
        let mut state = State::default_state();
        if let Some(lang) = &self.default_lang {
            state.lang = lang.clone();
        }
        state
    }

    /// Like [`crate::restore_state`], but merges over [`Self::default_state`].
    pub fn restore_state(&self, source: &impl FragmentSource) -> State {
        restore_over(self.default_state(), source.fragment().as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(
            PlaygroundConfig::from_yaml_str("").unwrap(),
            PlaygroundConfig::default()
        );
        assert_eq!(
            PlaygroundConfig::from_yaml_str("# nothing here\n").unwrap(),
            PlaygroundConfig::default()
        );
    }

    #[test]
    fn parses_all_keys() {
        let config = PlaygroundConfig::from_yaml_str(
            "share_base_url: https://example.com/play\ndefault_lang: rust\nsync_hash_on_edit: true\n",
        )
        .unwrap();
        assert_eq!(
            config.share_base_url.as_deref(),
            Some("https://example.com/play")
        );
        assert_eq!(config.default_lang.as_deref(), Some("rust"));
        assert!(config.sync_hash_on_edit);
    }

    #[test]
    fn rejects_unknown_language() {
        assert_eq!(
            PlaygroundConfig::from_yaml_str("default_lang: cobol"),
            Err(ConfigError::UnsupportedLang("cobol".into()))
        );
    }

    #[test]
    fn rejects_malformed_yaml() {
        assert!(matches!(
            PlaygroundConfig::from_yaml_str("sync_hash_on_edit: [maybe"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn default_lang_applies_to_default_and_restore() {
        let config = PlaygroundConfig {
            default_lang: Some("typescript".into()),
            ..Default::default()
        };
        assert_eq!(config.default_state().lang, "typescript");
        assert_eq!(config.restore_state(&None::<String>).lang, "typescript");

        // {"query":"foo"}
        let restored = config.restore_state(&"eyJxdWVyeSI6ImZvbyJ9");
        assert_eq!(restored.query, "foo");
        assert_eq!(restored.lang, "typescript");
    }
}
