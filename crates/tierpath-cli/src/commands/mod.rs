//! Command implementations for the tierpath CLI.
//!
//! - [`resolve`] - Resolve one tier and print the result
//! - [`check`] - Validate the whole properties document
//! - [`tiers`] - List configured tiers
//! - [`schema`] - Print the JSON Schema of the document
//!
//! Each command exposes an `execute` function taking its parsed arguments.

pub mod check;
pub mod resolve;
pub mod schema;
pub mod tiers;

pub use check::execute as check_execute;
pub use resolve::execute as resolve_execute;
pub use schema::execute as schema_execute;
pub use tiers::execute as tiers_execute;

use std::path::{Path, PathBuf};

use tierpath_config::{AppProperties, ConfigDiscovery, load_from};

use crate::error::{Result, ResultExt};

/// Project root: the `--root` argument or the current directory.
pub(crate) fn project_root(root: Option<&Path>) -> Result<PathBuf> {
    match root {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}

/// Load the properties document from `--config` or by discovery in `root`.
pub(crate) fn load_properties(config: Option<&Path>, root: &Path) -> Result<AppProperties> {
    match config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading properties");
            load_from(path).with_path(path)
        }
        None => {
            tracing::debug!(root = %root.display(), "discovering properties");
            Ok(ConfigDiscovery::new(root).load()?)
        }
    }
}
