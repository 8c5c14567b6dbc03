//! # finplan-config
//!
//! Layered configuration loading for finplan using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FINPLAN_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.finplan/config.toml`
//! 4. User-level `~/.config/finplan/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `FINPLAN_VALIDATION__CALCULATION_GRAPH=reject` -> `validation.calculation_graph`.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use finplan_config::FinplanConfig;
//!
//! let config = FinplanConfig::load_with_dotenv().expect("config");
//! let validator = config.validation.validator();
//! ```

mod error;
mod general;
mod validation;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use validation::ValidationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FinplanConfig {
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl FinplanConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type (for example an unknown policy name).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Load configuration with an explicit file layered above the project
    /// config and below the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingFile` if `path` does not exist, otherwise
    /// the errors of [`Self::load`].
    pub fn load_with_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.display().to_string()));
        }
        Self::load_dotenv();
        Self::figment_with(Some(path))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    fn figment_with(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".finplan/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit --config file
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("FINPLAN_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("finplan").join("config.toml"))
    }

    /// Load `.env` from the current directory or the nearest ancestor that
    /// has one. Existing environment variables win over `.env` entries.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finplan_core::CalculationGraphPolicy;

    #[test]
    fn default_config_loads() {
        let config = FinplanConfig::default();
        assert_eq!(
            config.validation.calculation_graph,
            CalculationGraphPolicy::Warn
        );
        assert!(!config.validation.warnings_as_errors);
        assert!(config.general.pretty);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: FinplanConfig = FinplanConfig::figment().extract()?;
            assert_eq!(
                config.validation.calculation_graph,
                CalculationGraphPolicy::Warn
            );
            Ok(())
        });
    }
}
