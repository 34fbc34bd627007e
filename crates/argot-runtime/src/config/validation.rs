//! Configuration validation utilities.

use argot_command::LexerConfig;
use tracing_subscriber::filter::Directive;

use super::error::{ConfigError, ConfigResult};
use super::schema::{ArgotConfig, LogOutput, LoggingConfig};

/// Validates the entire configuration.
pub fn validate_config(config: &ArgotConfig) -> ConfigResult<()> {
    validate_lexer_config(&config.lexer)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validates lexer settings.
///
/// The placeholder must survive tokenization as a single unquoted
/// assignment value, otherwise it could never match.
fn validate_lexer_config(lexer: &LexerConfig) -> ConfigResult<()> {
    let placeholder = &lexer.placeholder;

    if placeholder.is_empty() {
        return Err(ConfigError::validation(
            "Lexer placeholder must not be empty",
        ));
    }

    if placeholder.chars().any(char::is_whitespace) {
        return Err(ConfigError::validation(format!(
            "Lexer placeholder must not contain whitespace: {placeholder:?}"
        )));
    }

    if placeholder.contains(['"', '=']) {
        return Err(ConfigError::validation(format!(
            "Lexer placeholder must not contain '\"' or '=': {placeholder:?}"
        )));
    }

    if placeholder.starts_with('-') {
        return Err(ConfigError::validation(format!(
            "Lexer placeholder must not start with '-': {placeholder:?}"
        )));
    }

    Ok(())
}

/// Validates logging settings.
fn validate_logging_config(logging: &LoggingConfig) -> ConfigResult<()> {
    for (module, level) in &logging.filters {
        let directive = format!("{module}={level}");

        let valid_target = !module.is_empty()
            && module
                .chars()
                .all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'));
        if !valid_target {
            return Err(ConfigError::invalid_filter(
                directive,
                "module path may only contain letters, digits, '_', ':', '-' and '.'",
            ));
        }

        if let Err(e) = directive.parse::<Directive>() {
            return Err(ConfigError::invalid_filter(directive, e.to_string()));
        }
    }

    if logging.output == LogOutput::File && logging.file_path.is_none() {
        return Err(ConfigError::validation(
            "File log output requires logging.file_path",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::LogLevel;

    fn with_placeholder(placeholder: &str) -> ArgotConfig {
        let mut config = ArgotConfig::default();
        config.lexer.placeholder = placeholder.to_string();
        config
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ArgotConfig::default()).is_ok());
    }

    #[test]
    fn test_placeholder_rules() {
        assert!(validate_config(&with_placeholder("<img>")).is_ok());
        assert!(validate_config(&with_placeholder("{}")).is_ok());

        for bad in ["", "[ ]", "a\tb", "\"\"", "a=b", "-x", "--"] {
            let err = validate_config(&with_placeholder(bad)).unwrap_err();
            assert!(
                matches!(err, ConfigError::ValidationError { .. }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_filter_rules() {
        let mut config = ArgotConfig::default();
        config
            .logging
            .filters
            .insert("argot_command::splice".into(), LogLevel::Trace);
        assert!(validate_config(&config).is_ok());

        config.logging.filters.insert("bad module".into(), LogLevel::Debug);
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFilter { .. }));

        let mut config = ArgotConfig::default();
        config.logging.filters.insert(String::new(), LogLevel::Debug);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_file_output_needs_path() {
        let mut config = ArgotConfig::default();
        config.logging.output = LogOutput::File;
        assert!(validate_config(&config).is_err());

        config.logging.file_path = Some("argot.log".into());
        assert!(validate_config(&config).is_ok());
    }
}
