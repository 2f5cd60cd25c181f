//! Module: config
//! Responsibility: rewrite-pass configuration and its TOML loader.
//! Does not own: applying the configuration (see `pattern::optimize`).

use crate::{like::SqlLikeTranslator, pattern::Shape};
use serde::Deserialize;
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid rewrite config: {0}")]
    Parse(#[from] toml::de::Error),
}

///
/// RewriteConfig
///
/// Every field defaults, so an empty document is the default config.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RewriteConfig {
    /// Master switch for the whole pass.
    pub enabled: bool,

    /// Escape char handed to the standard LIKE translator.
    pub like_escape: Option<char>,

    pub recognizers: RecognizerConfig,
}

impl RewriteConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Whether the optimizer may emit a rewrite of this shape.
    #[must_use]
    pub const fn allows(&self, shape: Shape) -> bool {
        self.enabled && self.recognizers.allows(shape)
    }

    #[must_use]
    pub const fn like_translator(&self) -> SqlLikeTranslator {
        SqlLikeTranslator::new(self.like_escape)
    }
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            like_escape: Some(SqlLikeTranslator::DEFAULT_ESCAPE),
            recognizers: RecognizerConfig::default(),
        }
    }
}

///
/// RecognizerConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RecognizerConfig {
    pub starts_with: bool,
    pub ends_with: bool,
    pub is_substr: bool,
}

impl RecognizerConfig {
    #[must_use]
    pub const fn allows(&self, shape: Shape) -> bool {
        match shape {
            Shape::StartsWith => self.starts_with,
            Shape::EndsWith => self.ends_with,
            Shape::IsSubstr => self.is_substr,
        }
    }
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            starts_with: true,
            ends_with: true,
            is_substr: true,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = RewriteConfig::from_toml_str("").expect("empty config should parse");

        assert_eq!(config, RewriteConfig::default());
        assert!(Shape::ORDER.iter().all(|shape| config.allows(*shape)));
    }

    #[test]
    fn partial_recognizer_table_keeps_other_defaults() {
        let config = RewriteConfig::from_toml_str(
            r##"
            like_escape = "#"

            [recognizers]
            is_substr = false
            "##,
        )
        .expect("partial config should parse");

        assert!(config.enabled);
        assert_eq!(config.like_escape, Some('#'));
        assert!(config.allows(Shape::StartsWith));
        assert!(config.allows(Shape::EndsWith));
        assert!(!config.allows(Shape::IsSubstr));
    }

    #[test]
    fn master_switch_disables_every_shape() {
        let config =
            RewriteConfig::from_toml_str("enabled = false").expect("config should parse");

        assert!(Shape::ORDER.iter().all(|shape| !config.allows(*shape)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = RewriteConfig::from_toml_str("[recognizers]\ncontains = true")
            .expect_err("unknown recognizer must be rejected");

        assert!(err.to_string().starts_with("invalid rewrite config"));
    }

    #[test]
    fn multi_char_escape_is_rejected() {
        assert!(RewriteConfig::from_toml_str(r#"like_escape = "ab""#).is_err());
    }
}
