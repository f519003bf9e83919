//! Error types for tier resolution and properties loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::tier::Tier;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Resolution errors
    #[error("no properties configured for tier '{tier}'")]
    MissingTierProperties { tier: Tier },

    #[error("tier '{tier}' uses absolute URLs but has no fqdn")]
    AbsoluteAddressingRequiresHost { tier: Tier },

    // Document loading/validation errors
    #[error("properties file not found")]
    NotFound,

    #[error("unsupported properties format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid value for '{field}'{}", .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("unknown tier '{name}' in properties")]
    UnknownTier { name: String },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// True for the two failures the resolver itself can produce.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            ConfigError::MissingTierProperties { .. }
                | ConfigError::AbsoluteAddressingRequiresHost { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tier_message_names_tier() {
        let err = ConfigError::MissingTierProperties {
            tier: Tier::Staging,
        };
        assert_eq!(err.to_string(), "no properties configured for tier 'staging'");
        assert!(err.is_resolution_error());
    }

    #[test]
    fn invalid_value_includes_hint() {
        let err = ConfigError::InvalidValue {
            field: "port".to_string(),
            hint: Some("must be 1-65535".to_string()),
        };
        assert_eq!(err.to_string(), "invalid value for 'port': must be 1-65535");

        let bare = ConfigError::InvalidValue {
            field: "port".to_string(),
            hint: None,
        };
        assert_eq!(bare.to_string(), "invalid value for 'port'");
        assert!(!bare.is_resolution_error());
    }
}
