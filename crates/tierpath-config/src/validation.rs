//! Whole-document validation
//!
//! Resolution only checks the tier it is asked for. Validation checks every
//! tier up front so a broken production entry is caught on a development
//! machine.

use std::fmt;

use crate::error::{ConfigError, Result};
use crate::properties::{AppProperties, RelativeUrlSetting};
use crate::tier::Tier;

/// Trait for pluggable properties validation strategies
pub trait ConfigValidator {
    fn validate(&self, properties: &AppProperties) -> Result<()>;
}

/// Checks the tier table: every tier present, no stray keys, sane ports and
/// a host wherever absolute URLs are configured.
///
/// # Example
///
/// ```
/// use tierpath_config::{AppProperties, ConfigValidator, Tier, TierProperties, TierTableValidator};
///
/// let mut props = AppProperties::default();
/// for tier in Tier::ALL {
///     props = props.with_tier(tier, TierProperties::new("example.com"));
/// }
///
/// TierTableValidator.validate(&props).unwrap();
/// ```
pub struct TierTableValidator;

impl ConfigValidator for TierTableValidator {
    fn validate(&self, properties: &AppProperties) -> Result<()> {
        for name in properties.tiers.keys() {
            if name.parse::<Tier>().is_err() {
                return Err(ConfigError::UnknownTier { name: name.clone() });
            }
        }

        for tier in Tier::ALL {
            let props = properties.tier_properties(tier)?;

            if props.port == Some(0) {
                return Err(ConfigError::InvalidValue {
                    field: format!("tiers.{tier}.port"),
                    hint: Some("Use a port between 1 and 65535 or leave it empty".to_string()),
                });
            }

            if !props.relative_url_type.sanitized().is_relative() && !props.has_host() {
                return Err(ConfigError::AbsoluteAddressingRequiresHost { tier });
            }
        }

        Ok(())
    }
}

/// A non-fatal finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// `relativeUrlType` is neither a known scheme nor `false`.
    UnrecognizedRelativeUrlType { tier: String, value: String },
    /// `tls` has no effect while protocol-relative URLs are on.
    TlsIgnored { tier: String },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::UnrecognizedRelativeUrlType { tier, value } => write!(
                f,
                "tier '{tier}': relativeUrlType '{value}' is not recognized, absolute URLs will be used"
            ),
            ValidationWarning::TlsIgnored { tier } => write!(
                f,
                "tier '{tier}': tls is ignored because useProtocolRelativeUrls is enabled"
            ),
        }
    }
}

/// Collect warnings for values that resolve but probably are not intended.
pub fn lint(properties: &AppProperties) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for (name, props) in &properties.tiers {
        if let RelativeUrlSetting::Unrecognized(value) = &props.relative_url_type {
            warnings.push(ValidationWarning::UnrecognizedRelativeUrlType {
                tier: name.clone(),
                value: value.clone(),
            });
        }

        if properties.use_protocol_relative_urls && props.tls {
            warnings.push(ValidationWarning::TlsIgnored { tier: name.clone() });
        }
    }

    warnings
}

/// Convenience function for tier table validation
pub fn validate(properties: &AppProperties) -> Result<()> {
    TierTableValidator.validate(properties)
}
