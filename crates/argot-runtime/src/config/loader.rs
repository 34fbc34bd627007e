//! Configuration loader using figment.
//!
//! # Feature Flags
//!
//! - `toml-config` *(default)*: enables TOML configuration files (`argot.toml`)
//! - `yaml-config`: enables YAML configuration files (`argot.yaml`, `argot.yml`)
//!
//! Both features can be enabled simultaneously; if so, both file formats are
//! searched and loaded.
//!
//! # Configuration Priority (lowest to highest)
//!
//! 1. Built-in defaults
//! 2. Profile-specific config file (`argot.{profile}.toml` / `argot.{profile}.yaml`)
//! 3. Main config file (`argot.toml` / `argot.yaml`)
//! 4. Environment variables (`ARGOT_*`)
//! 5. Programmatic overrides
//!
//! # Environment Variable Mapping
//!
//! Environment variables are mapped using the `ARGOT_` prefix with `__` as
//! separator:
//!
//! - `ARGOT_LOGGING__LEVEL=debug` → `logging.level = "debug"`
//! - `ARGOT_LEXER__PLACEHOLDER="<img>"` → `lexer.placeholder = "<img>"`
//!
//! # Example
//!
//! ```rust,no_run
//! use argot_runtime::config::ConfigLoader;
//!
//! # fn main() -> argot_runtime::config::ConfigResult<()> {
//! // Default locations: current directory, then the user config directory
//! let config = ConfigLoader::new().load()?;
//!
//! // A specific file, no environment
//! let config = ConfigLoader::new()
//!     .file("./config/argot.toml")
//!     .without_env()
//!     .load()?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use figment::Figment;
#[cfg(any(feature = "yaml-config", feature = "toml-config"))]
use figment::providers::Format;
#[cfg(feature = "toml-config")]
use figment::providers::Toml;
#[cfg(feature = "yaml-config")]
use figment::providers::Yaml;
use figment::providers::{Env, Serialized};
use tracing::{debug, info, trace};

use super::error::{ConfigError, ConfigResult};
use super::schema::ArgotConfig;
use super::validation::validate_config;

const ENV_PREFIX: &str = "ARGOT_";
const PROFILE_VAR: &str = "ARGOT_PROFILE";

/// Configuration profile for environment-specific settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Profile {
    /// Development profile (default).
    #[default]
    Development,
    /// Production profile.
    Production,
    /// Custom profile name.
    Custom(String),
}

impl Profile {
    /// Returns the profile name as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Custom(name) => name,
        }
    }

    /// Parses a profile name, accepting `dev` and `prod` shorthands.
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "development" | "dev" => Self::Development,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Reads `ARGOT_PROFILE`, defaulting to Development.
    pub fn from_env() -> Self {
        std::env::var(PROFILE_VAR)
            .map(|p| Self::parse(&p))
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration loader with figment-based multi-source support.
pub struct ConfigLoader {
    /// Programmatic overrides, merged last.
    overrides: Figment,
    profile: Profile,
    search_paths: Vec<PathBuf>,
    load_env: bool,
    /// Specific config file to load (overrides search).
    config_file: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Creates a new configuration loader with defaults.
    pub fn new() -> Self {
        Self {
            overrides: Figment::new(),
            profile: Profile::from_env(),
            search_paths: Vec::new(),
            load_env: true,
            config_file: None,
        }
    }

    /// Sets the configuration profile.
    pub fn profile(mut self, profile: impl AsRef<str>) -> Self {
        self.profile = Profile::parse(profile.as_ref());
        self
    }

    /// Adds a search path for configuration files.
    pub fn search_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.search_paths.push(path.as_ref().to_path_buf());
        self
    }

    /// Sets a specific configuration file to load.
    pub fn file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enables loading environment variables (default: true).
    pub fn with_env(mut self) -> Self {
        self.load_env = true;
        self
    }

    /// Disables loading environment variables.
    pub fn without_env(mut self) -> Self {
        self.load_env = false;
        self
    }

    /// Merges configuration on top of every other source.
    pub fn merge(mut self, config: ArgotConfig) -> Self {
        self.overrides = self.overrides.merge(Serialized::defaults(config));
        self
    }

    /// Loads, validates and returns the configuration.
    pub fn load(self) -> ConfigResult<ArgotConfig> {
        let profile = self.profile.clone();
        let figment = self.build_figment()?;

        let config: ArgotConfig = figment.extract()?;
        validate_config(&config)?;

        debug!(
            profile = %profile,
            logging_level = %config.logging.level,
            placeholder = %config.lexer.placeholder,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Builds the figment instance with all sources.
    fn build_figment(mut self) -> ConfigResult<Figment> {
        let mut figment = Figment::from(Serialized::defaults(ArgotConfig::default()));

        if let Some(path) = self.config_file.take() {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path));
            }
            info!(path = %path.display(), "Loading configuration file");
            figment = Self::merge_config_file(figment, &path)?;
        } else {
            figment = self.load_config_files(figment);
        }

        if self.load_env {
            trace!("Loading environment variables with {ENV_PREFIX} prefix");
            figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        }

        let overrides = std::mem::take(&mut self.overrides);
        Ok(figment.merge(overrides))
    }

    /// Merges a single config file into the figment, dispatching on file extension.
    ///
    /// Only extensions enabled via feature flags are accepted.
    fn merge_config_file(figment: Figment, path: &Path) -> ConfigResult<Figment> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext {
            #[cfg(feature = "toml-config")]
            "toml" => Ok(figment.merge(Toml::file(path))),
            #[cfg(feature = "yaml-config")]
            "yaml" | "yml" => Ok(figment.merge(Yaml::file(path))),
            _ => Err(ConfigError::UnsupportedFormat(ext.to_string())),
        }
    }

    /// Resolves the effective list of search paths.
    fn resolve_search_paths(&self) -> Vec<PathBuf> {
        if !self.search_paths.is_empty() {
            return self.search_paths.clone();
        }

        let mut paths = Vec::new();
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd);
        }
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("argot"));
        }
        paths
    }

    /// Search logic for a single file format.
    ///
    /// Iterates `search_paths × base_names`, merging the profile-specific
    /// variant first and then the base file. Stops at the first base file.
    #[cfg(any(feature = "toml-config", feature = "yaml-config"))]
    fn load_format_files<F>(
        &self,
        mut figment: Figment,
        search_paths: &[PathBuf],
        base_names: &[(&str, &str)],
        merge_fn: F,
    ) -> (Figment, bool)
    where
        F: Fn(Figment, &Path) -> Figment,
    {
        for search_path in search_paths {
            for (stem, ext) in base_names {
                let profile_path =
                    search_path.join(format!("{stem}.{}.{ext}", self.profile.as_str()));
                if profile_path.exists() {
                    debug!(path = %profile_path.display(), "Loading profile-specific config");
                    figment = merge_fn(figment, &profile_path);
                }

                let base_path = search_path.join(format!("{stem}.{ext}"));
                if base_path.exists() {
                    info!(path = %base_path.display(), "Loading configuration file");
                    figment = merge_fn(figment, &base_path);
                    return (figment, true);
                }
            }
        }
        (figment, false)
    }

    /// Searches for and loads configuration files from search paths.
    #[cfg_attr(
        not(any(feature = "toml-config", feature = "yaml-config")),
        allow(unused_mut)
    )]
    fn load_config_files(&self, mut figment: Figment) -> Figment {
        let search_paths = self.resolve_search_paths();
        let mut found = false;

        #[cfg(feature = "toml-config")]
        {
            let (f, ok) = self.load_format_files(
                figment,
                &search_paths,
                &[("argot", "toml")],
                |fig, path| fig.merge(Toml::file(path)),
            );
            figment = f;
            found |= ok;
        }

        #[cfg(feature = "yaml-config")]
        {
            let (f, ok) = self.load_format_files(
                figment,
                &search_paths,
                &[("argot", "yaml"), ("argot", "yml")],
                |fig, path| fig.merge(Yaml::file(path)),
            );
            figment = f;
            found |= ok;
        }

        if !found {
            debug!("No configuration file found, using defaults");
        }
        figment
    }
}

/// Loads configuration from the default locations and environment.
pub fn load_config() -> ConfigResult<ArgotConfig> {
    ConfigLoader::new().load()
}

/// Loads configuration from `path`, with environment overrides.
pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<ArgotConfig> {
    ConfigLoader::new().file(path).load()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use figment::Jail;

    use crate::config::{LogFormat, LogLevel};

    #[test]
    fn test_default_config() {
        Jail::expect_with(|jail| {
            let config = ConfigLoader::new()
                .search_path(jail.directory())
                .without_env()
                .load()
                .map_err(|e| e.to_string())?;

            assert_eq!(config, ArgotConfig::default());
            assert_eq!(config.logging.level.as_str(), "info");
            assert_eq!(config.lexer.placeholder, "[]");
            Ok(())
        });
    }

    #[test]
    fn test_profile_parse() {
        assert_eq!(Profile::parse("PROD"), Profile::Production);
        assert_eq!(Profile::parse("dev"), Profile::Development);
        assert_eq!(Profile::parse("staging"), Profile::Custom("staging".into()));
    }

    #[test]
    fn test_profile_from_env() {
        Jail::expect_with(|jail| {
            jail.set_env(PROFILE_VAR, "production");
            assert_eq!(Profile::from_env(), Profile::Production);
            Ok(())
        });
    }

    #[test]
    fn test_toml_file_and_env_layers() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "argot.toml",
                r#"
                [logging]
                level = "debug"
                format = "pretty"

                [logging.filters]
                argot_command = "trace"

                [lexer]
                placeholder = "<img>"
                "#,
            )?;
            jail.set_env("ARGOT_LEXER__ALLOW_PLACEHOLDER_GAP", "true");
            jail.set_env("ARGOT_LOGGING__LEVEL", "warn");

            let config = ConfigLoader::new()
                .search_path(jail.directory())
                .load()
                .map_err(|e| e.to_string())?;

            assert_eq!(config.logging.level, LogLevel::Warn);
            assert_eq!(config.logging.format, LogFormat::Pretty);
            assert_eq!(
                config.logging.filters.get("argot_command"),
                Some(&LogLevel::Trace)
            );
            assert_eq!(config.lexer.placeholder, "<img>");
            assert!(config.lexer.allow_placeholder_gap);
            assert!(config.lexer.bind_empty_assignment);
            Ok(())
        });
    }

    #[test]
    fn test_profile_file_is_merged() {
        Jail::expect_with(|jail| {
            jail.create_file("argot.production.toml", "[lexer]\nplaceholder = \"{}\"\n")?;
            jail.create_file("argot.toml", "[logging]\nlevel = \"error\"\n")?;

            let config = ConfigLoader::new()
                .profile("prod")
                .search_path(jail.directory())
                .without_env()
                .load()
                .map_err(|e| e.to_string())?;

            assert_eq!(config.lexer.placeholder, "{}");
            assert_eq!(config.logging.level, LogLevel::Error);
            Ok(())
        });
    }

    #[test]
    fn test_overrides_win() {
        Jail::expect_with(|jail| {
            jail.set_env("ARGOT_LOGGING__LEVEL", "warn");

            let mut overrides = ArgotConfig::default();
            overrides.logging.level = LogLevel::Trace;

            let config = ConfigLoader::new()
                .search_path(jail.directory())
                .merge(overrides)
                .load()
                .map_err(|e| e.to_string())?;

            assert_eq!(config.logging.level, LogLevel::Trace);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "[lexer]\nbind_empty_assignment = false\n")?;

            let config = ConfigLoader::new()
                .file(jail.directory().join("custom.toml"))
                .without_env()
                .load()
                .map_err(|e| e.to_string())?;
            assert!(!config.lexer.bind_empty_assignment);

            let missing = ConfigLoader::new()
                .file(jail.directory().join("missing.toml"))
                .load();
            assert!(matches!(missing, Err(ConfigError::FileNotFound(_))));

            jail.create_file("argot.ini", "")?;
            let unsupported = ConfigLoader::new()
                .file(jail.directory().join("argot.ini"))
                .load();
            assert!(matches!(unsupported, Err(ConfigError::UnsupportedFormat(ext)) if ext == "ini"));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("argot.toml", "[lexer]\nplaceholder = \"--x\"\n")?;
            let result = ConfigLoader::new()
                .search_path(jail.directory())
                .without_env()
                .load();
            assert!(matches!(result, Err(ConfigError::ValidationError { .. })));

            jail.create_file("argot.toml", "[logging]\nlevel = \"loud\"\n")?;
            let result = ConfigLoader::new()
                .search_path(jail.directory())
                .without_env()
                .load();
            assert!(matches!(result, Err(ConfigError::Extract(_))));
            Ok(())
        });
    }
}
