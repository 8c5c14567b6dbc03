//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed working directories and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use finplan_config::{ConfigError, FinplanConfig};
use finplan_core::CalculationGraphPolicy;
use std::path::Path;

#[test]
fn loads_validation_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[validation]
calculation_graph = "reject"
warnings_as_errors = true
"#,
        )?;

        let config: FinplanConfig = Figment::from(Serialized::defaults(FinplanConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(
            config.validation.calculation_graph,
            CalculationGraphPolicy::Reject
        );
        assert!(config.validation.warnings_as_errors);
        assert!(config.general.pretty);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".finplan")?;
        jail.create_file(
            ".finplan/config.toml",
            r#"
[general]
pretty = false

[validation]
calculation_graph = "ignore"
"#,
        )?;

        let config = FinplanConfig::load().expect("config loads");
        assert!(!config.general.pretty);
        assert_eq!(
            config.validation.calculation_graph,
            CalculationGraphPolicy::Ignore
        );
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[validation]
warnings_as_errors = true
"#,
        )?;

        let config: FinplanConfig = Figment::from(Serialized::defaults(FinplanConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.validation.warnings_as_errors);
        assert_eq!(
            config.validation.calculation_graph,
            CalculationGraphPolicy::Warn
        );
        Ok(())
    });
}

#[test]
fn unknown_policy_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
[validation]
calculation_graph = "strict"
"#,
        )?;

        let result = FinplanConfig::load_with_file(Path::new("custom.toml"));
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}

#[test]
fn explicit_file_overrides_project_config() {
    Jail::expect_with(|jail| {
        jail.create_dir(".finplan")?;
        jail.create_file(
            ".finplan/config.toml",
            "[validation]\ncalculation_graph = \"ignore\"\n",
        )?;
        jail.create_file("custom.toml", "[validation]\ncalculation_graph = \"reject\"\n")?;

        let config = FinplanConfig::load_with_file(Path::new("custom.toml")).expect("config loads");
        assert_eq!(
            config.validation.calculation_graph,
            CalculationGraphPolicy::Reject
        );
        Ok(())
    });
}

#[test]
fn missing_explicit_file_is_reported() {
    Jail::expect_with(|_jail| {
        let result = FinplanConfig::load_with_file(Path::new("nope.toml"));
        assert!(matches!(result, Err(ConfigError::MissingFile(path)) if path == "nope.toml"));
        Ok(())
    });
}
