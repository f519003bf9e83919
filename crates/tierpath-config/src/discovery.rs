//! File-based properties discovery for CLI use
//!
//! Handles finding and loading properties documents from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Format, Serialized, Toml, Yaml};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::properties::AppProperties;

/// File names searched, in order, before falling back to `package.json`.
pub const CANDIDATE_FILES: [&str; 2] = ["tierpath.toml", "properties.json"];

/// Field holding the document inside `package.json`.
pub const PACKAGE_JSON_FIELD: &str = "tierpath";

/// File-based properties discovery
///
/// Searches for a properties document in conventional locations and loads it.
/// Library users with an in-memory document should use
/// `AppProperties::from_value()` directly.
///
/// # Example
///
/// ```no_run
/// use tierpath_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let properties = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a properties document in the root directory
    ///
    /// Searches in this order:
    /// 1. tierpath.toml
    /// 2. properties.json
    /// 3. package.json (tierpath field)
    pub fn find(&self) -> Option<PathBuf> {
        for name in CANDIDATE_FILES {
            let path = self.root.join(name);
            if path.is_file() {
                return Some(path);
            }
        }

        let pkg_path = self.root.join("package.json");
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed = serde_json::from_str::<Value>(&content).ok()?;
        match parsed.get(PACKAGE_JSON_FIELD) {
            Some(field) if !field.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Load the discovered document
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no document is found.
    pub fn load(&self) -> Result<AppProperties> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        tracing::debug!(path = %path.display(), "loading properties");
        load_from(&path)
    }
}

/// Load a properties document from an explicit path.
///
/// The format follows the extension: `.toml`, `.json`, `.yaml` or `.yml`.
/// A `package.json` is read from its `tierpath` field. JSON documents keep
/// their tier order; TOML and YAML go through figment and come back sorted
/// by tier name.
pub fn load_from(path: &Path) -> Result<AppProperties> {
    // Figment treats a missing file as empty, so surface it here.
    fs::metadata(path)?;

    if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
        return load_from_package_json(path);
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    if extension.as_deref() == Some("json") {
        return AppProperties::from_value(read_json(path)?);
    }

    let figment = Figment::from(Serialized::defaults(AppProperties::default()));
    let figment = match extension.as_deref() {
        Some("toml") => figment.merge(Toml::file(path)),
        Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
        _ => {
            return Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };

    figment.extract().map_err(|e| ConfigError::InvalidValue {
        field: "properties".to_string(),
        hint: Some(e.to_string()),
    })
}

fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;

    serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "properties".to_string()),
        hint: Some(format!("Invalid JSON: {e}")),
    })
}

fn load_from_package_json(path: &Path) -> Result<AppProperties> {
    let parsed = read_json(path)?;

    match parsed.get(PACKAGE_JSON_FIELD) {
        Some(value) if !value.is_null() => AppProperties::from_value(value.clone()),
        _ => Err(ConfigError::InvalidValue {
            field: PACKAGE_JSON_FIELD.to_string(),
            hint: Some("Add a 'tierpath' field to your package.json".to_string()),
        }),
    }
}

/// Discover and load properties from the current directory (convenience function)
///
/// # Example
///
/// ```no_run
/// use tierpath_config::discover;
///
/// let properties = discover().unwrap();
/// ```
pub fn discover() -> Result<AppProperties> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}
