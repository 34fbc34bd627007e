//! Layered configuration for Argot applications.
//!
//! [`ArgotConfig`] collects logging settings and the command lexer's
//! placeholder settings. [`ConfigLoader`] assembles it from defaults,
//! configuration files, `ARGOT_*` environment variables and programmatic
//! overrides, then validates the result.

pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigLoader, Profile, load_config, load_config_from_file};
pub use schema::{
    ArgotConfig, LogFormat, LogLevel, LogOutput, LogRotation, LoggingConfig, SpanEventConfig,
};
pub use validation::validate_config;
