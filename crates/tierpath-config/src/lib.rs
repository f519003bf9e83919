//! Tiered public-path resolution for front-end builds.
//!
//! A properties document describes each deployment tier (host, port, TLS,
//! sub path, addressing scheme). [`resolve_public_path`] turns the tier picked
//! from the environment into the asset URLs a bundler needs, and
//! [`BuildSettings`] derives the remaining build options from that result.

pub mod dev;
pub mod discovery;
pub mod env;
pub mod error;
pub mod properties;
pub mod resolve;
pub mod settings;
pub mod tier;
pub mod validation;

// Re-export main types
pub use dev::*;
pub use env::EnvironmentSnapshot;
pub use error::*;
pub use properties::*;
pub use resolve::*;
pub use settings::*;
pub use tier::*;

// Re-export discovery and validation
pub use discovery::{ConfigDiscovery, discover, load_from};
pub use validation::{ConfigValidator, TierTableValidator, ValidationWarning, lint, validate};
