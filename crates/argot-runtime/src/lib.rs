//! Argot Runtime - configuration and logging for applications embedding the
//! Argot command lexer.
//!
//! This crate provides:
//! - Layered configuration loading (`ArgotConfig`, `ConfigLoader`)
//! - Logging initialisation (`LoggingBuilder`, `init_from_config`)
//!
//! ```rust,no_run
//! use argot_command::CommandLexer;
//!
//! # fn main() -> argot_runtime::ConfigResult<()> {
//! let config = argot_runtime::init()?;
//! let lexer = CommandLexer::new(config.lexer);
//! let cmd = lexer.parse_command("status --verbose").unwrap();
//! assert!(cmd.has_option("verbose"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod logging;

pub use config::{
    ArgotConfig, ConfigError, ConfigLoader, ConfigResult, LoggingConfig, load_config,
    load_config_from_file,
};
pub use logging::{LoggingBuilder, SpanEvents, init_from_config};

/// Loads configuration from the default sources and installs logging.
pub fn init() -> ConfigResult<ArgotConfig> {
    let config = load_config()?;
    init_from_config(&config.logging);
    Ok(config)
}
