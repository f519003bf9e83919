//! Deployment tiers and their detection from an environment indicator.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named deployment environment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Development,
    Testing,
    Staging,
    Production,
}

impl Tier {
    /// Every tier, in the order a properties document lists them.
    pub const ALL: [Tier; 4] = [
        Tier::Development,
        Tier::Testing,
        Tier::Staging,
        Tier::Production,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Development => "development",
            Tier::Testing => "testing",
            Tier::Staging => "staging",
            Tier::Production => "production",
        }
    }

    pub fn is_development(self) -> bool {
        self == Tier::Development
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| format!("unknown tier '{s}'"))
    }
}

/// Map an environment indicator (conventionally `NODE_ENV`) to a tier.
///
/// Only the exact names `production`, `staging` and `testing` select their
/// tier. Anything else, including an absent or empty indicator, is
/// [`Tier::Development`].
///
/// ```
/// use tierpath_config::{resolve_tier, Tier};
///
/// assert_eq!(resolve_tier(Some("production")), Tier::Production);
/// assert_eq!(resolve_tier(Some("prod")), Tier::Development);
/// assert_eq!(resolve_tier(None), Tier::Development);
/// ```
pub fn resolve_tier(env_indicator: Option<&str>) -> Tier {
    match env_indicator {
        Some("production") => Tier::Production,
        Some("staging") => Tier::Staging,
        Some("testing") => Tier::Testing,
        _ => Tier::Development,
    }
}
