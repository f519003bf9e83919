//! Process environment captured as an explicit value.
//!
//! Build tools signal the tier and dev-server state through environment
//! variables. Reading them once into an [`EnvironmentSnapshot`] keeps the
//! resolver itself free of global state.

use crate::resolve::RuntimeOverrides;
use crate::tier::{Tier, resolve_tier};

/// Tier indicator.
pub const NODE_ENV: &str = "NODE_ENV";
/// Set by webpack-dev-server for the processes it spawns.
pub const WEBPACK_DEV_SERVER: &str = "WEBPACK_DEV_SERVER";
/// User flag: `true` makes the dev server serve static files from the app base.
pub const DEV_SERVE_STATIC: &str = "DEV_SERVE_STATIC";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    pub node_env: Option<String>,
    pub webpack_dev_server: Option<String>,
    pub dev_serve_static: Option<String>,
}

impl EnvironmentSnapshot {
    /// Build a snapshot from any variable lookup.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use tierpath_config::{EnvironmentSnapshot, Tier};
    ///
    /// let vars = HashMap::from([("NODE_ENV", "staging"), ("DEV_SERVE_STATIC", "true")]);
    /// let env = EnvironmentSnapshot::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
    ///
    /// assert_eq!(env.tier(), Tier::Staging);
    /// assert!(env.force_static_serving());
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            node_env: lookup(NODE_ENV),
            webpack_dev_server: lookup(WEBPACK_DEV_SERVER),
            dev_serve_static: lookup(DEV_SERVE_STATIC),
        }
    }

    pub fn from_process() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn tier(&self) -> Tier {
        resolve_tier(self.node_env.as_deref())
    }

    pub fn dev_server_active(&self) -> bool {
        self.webpack_dev_server
            .as_deref()
            .is_some_and(|value| !value.is_empty())
    }

    /// Only the exact value `true` enables static serving.
    pub fn force_static_serving(&self) -> bool {
        self.dev_serve_static.as_deref() == Some("true")
    }

    pub fn overrides(&self) -> RuntimeOverrides {
        RuntimeOverrides {
            dev_server_active: self.dev_server_active(),
            force_static_serving: self.force_static_serving(),
        }
    }
}
