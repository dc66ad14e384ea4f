//! Render configuration.
//!
//! A [`RenderConfig`] is usually embedded in a host application's own TOML
//! file; [`RenderConfig::from_toml`] parses the standalone form:
//!
//! ```toml
//! theme = "dark"
//!
//! [extensions]
//! math = false
//! ```

use std::fmt;

use grip_tree::Extensions;
use serde::Deserialize;

/// Color scheme for highlighted code and diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow the reader's `prefers-color-scheme`.
    #[default]
    Auto,
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a theme name. Returns `None` for unknown names.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(Self::Auto),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renderer settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub theme: Theme,
    pub extensions: Extensions,
}

impl RenderConfig {
    /// Parse configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parsing error, including unknown keys and theme names.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = RenderConfig::from_toml("").unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.theme, Theme::Auto);
        assert!(config.extensions.tables);
    }

    #[test]
    fn test_theme_and_extensions() {
        let config = RenderConfig::from_toml(
            r#"
theme = "dark"

[extensions]
math = false
autolink = false
"#,
        )
        .unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert!(!config.extensions.math);
        assert!(!config.extensions.autolink);
        assert!(config.extensions.strikethrough);
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let err = RenderConfig::from_toml(r#"theme = "sepia""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("sepia"), "{err}");
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(RenderConfig::from_toml("colour = \"red\"").is_err());
        assert!(RenderConfig::from_toml("[extensions]\nfootnotes = true").is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = RenderConfig::from_toml("theme = ").unwrap_err();
        assert!(err.to_string().starts_with("TOML parse error"));
    }

    #[test]
    fn test_theme_parse_roundtrip() {
        for theme in [Theme::Auto, Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse("Dark"), None);
    }
}
