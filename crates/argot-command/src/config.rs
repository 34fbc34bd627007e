//! Lexer configuration.

use serde::{Deserialize, Serialize};

/// Knobs for segment placeholder binding.
///
/// Only the message entry points consult this; bare-string tokenization
/// behaves the same under every configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexerConfig {
    /// Assignment value that stands in for the next non-text element.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Whether `--name=` directly before a non-text element binds it.
    #[serde(default = "default_true")]
    pub bind_empty_assignment: bool,

    /// Whether whitespace may separate the placeholder from the element.
    #[serde(default)]
    pub allow_placeholder_gap: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            bind_empty_assignment: true,
            allow_placeholder_gap: false,
        }
    }
}

fn default_placeholder() -> String {
    "[]".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_document() {
        let config: LexerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LexerConfig::default());
        assert_eq!(config.placeholder, "[]");
        assert!(config.bind_empty_assignment);
        assert!(!config.allow_placeholder_gap);
    }

    #[test]
    fn test_partial_override() {
        let config: LexerConfig =
            serde_json::from_str(r#"{"placeholder": "<img>", "allow_placeholder_gap": true}"#)
                .unwrap();
        assert_eq!(config.placeholder, "<img>");
        assert!(config.bind_empty_assignment);
        assert!(config.allow_placeholder_gap);
    }
}
