//! Miette diagnostic conversion for CLI errors.

use miette::Report;
use tierpath_config::ConfigError;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::FileNotFound(path) => miette::miette!(
            help = "Pass an existing file to --config",
            "File not found: {}",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::NotFound => miette::miette!(
            help = "Create tierpath.toml or properties.json, add a \"tierpath\" field to package.json, or pass --config",
            "No properties document found"
        ),
        ConfigError::MissingTierProperties { tier } => miette::miette!(
            help = format!("Add a \"{tier}\" entry under \"tiers\" in the properties document"),
            "No properties configured for tier '{}'",
            tier
        ),
        ConfigError::AbsoluteAddressingRequiresHost { tier } => miette::miette!(
            help = format!(
                "Set tiers.{tier}.fqdn, or use a relativeUrlType of \"app-index-relative\" or \"server-root-relative\""
            ),
            "Tier '{}' needs an fqdn to build absolute URLs",
            tier
        ),
        ConfigError::UnsupportedFormat { path } => miette::miette!(
            help = "Use a .toml, .json, .yaml or .yml file",
            "Unsupported properties format: {}",
            path.display()
        ),
        other => miette::miette!("Configuration error: {}", other),
    }
}
