//! Build settings derived from a resolution.
//!
//! These are the values a bundler configuration plugs into its output,
//! loader, plugin and dev-server options. Nothing here is invented per
//! build: every field follows from the tier and the [`ResolvedPaths`].

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};

use crate::dev::DevServerSettings;
use crate::properties::RelativeUrlType;
use crate::resolve::{ResolvedPaths, RuntimeOverrides};
use crate::tier::Tier;

/// Where the build lands on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLayout {
    pub root: PathBuf,
    pub public_dir: String,
    pub asset_dir: String,
}

impl BuildLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            public_dir: "public".into(),
            asset_dir: "assets".into(),
        }
    }

    /// App base directory, served as the web root of the app.
    pub fn fs_base(&self) -> PathBuf {
        self.root.join(&self.public_dir)
    }

    /// Output directory of the bundler.
    pub fn fs_build(&self) -> PathBuf {
        self.fs_base().join(&self.asset_dir)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSettings {
    pub tier: Tier,
    pub mode: BuildMode,
    pub source_map: Option<String>,
    pub fs_base: PathBuf,
    pub fs_build: PathBuf,
    pub output_public_path: String,
    pub output_filename: String,
    pub file_loader_public_path: String,
    pub css_extract_public_path: String,
    pub css_filename: String,
    pub css_chunk_filename: String,
    pub hot_module_replacement: bool,
    pub define: IndexMap<String, Value>,
    pub dev_server: DevServerSettings,
    pub paths: ResolvedPaths,
}

impl BuildSettings {
    pub fn derive(paths: &ResolvedPaths, layout: &BuildLayout, overrides: RuntimeOverrides) -> Self {
        let tier = paths.tier;
        let development = tier.is_development();
        let app_index_relative = paths.relative_url_type == RelativeUrlType::AppIndexRelative;

        // Stylesheets and loader-emitted files live next to the bundle, so
        // app-index-relative builds reference them from the asset directory.
        let file_loader_public_path = if !development && app_index_relative {
            "./".to_string()
        } else {
            String::new()
        };
        let css_extract_public_path = if !development && app_index_relative {
            "./".to_string()
        } else {
            paths.public_path.clone()
        };

        let fs_base = layout.fs_base();

        Self {
            tier,
            mode: if development {
                BuildMode::Development
            } else {
                BuildMode::Production
            },
            source_map: development.then(|| "inline-source-map".to_string()),
            fs_build: layout.fs_build(),
            output_public_path: paths.public_path.clone(),
            output_filename: "[name].js".into(),
            file_loader_public_path,
            css_extract_public_path,
            css_filename: "[name].css".into(),
            css_chunk_filename: "[id].css".into(),
            hot_module_replacement: development,
            define: define_globals(tier),
            dev_server: DevServerSettings::derive(paths, &fs_base, overrides),
            fs_base,
            paths: paths.clone(),
        }
    }
}

/// Compile-time globals for the bundle.
pub fn define_globals(tier: Tier) -> IndexMap<String, Value> {
    let development = tier.is_development();
    let node_env = if development { "development" } else { "production" };

    let mut define = IndexMap::new();
    define.insert("process.env.NODE_ENV".to_string(), json!(node_env));
    define.insert("process.env.BROWSER".to_string(), json!(true));
    define.insert("__CLIENT__".to_string(), json!(true));
    define.insert("__SERVER__".to_string(), json!(false));
    define.insert("__DEVTOOLS__".to_string(), json!(development));
    define.insert("__DEV__".to_string(), json!(development));
    define.insert("__PROD__".to_string(), json!(!development));
    define.insert("__DEVELOPMENT__".to_string(), json!(development));
    define.insert("__TESTING__".to_string(), json!(tier == Tier::Testing));
    define.insert("__STAGING__".to_string(), json!(tier == Tier::Staging));
    define.insert("__PRODUCTION__".to_string(), json!(tier == Tier::Production));
    define
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{GlobalFlags, TierProperties};
    use crate::resolve::resolve_tier_paths;

    fn settings(tier: Tier, props: TierProperties, overrides: RuntimeOverrides) -> BuildSettings {
        let paths = resolve_tier_paths(tier, &props, GlobalFlags::default(), overrides).unwrap();
        BuildSettings::derive(&paths, &BuildLayout::new("/work/app"), overrides)
    }

    #[test]
    fn development_build_is_unminified_with_inline_maps() {
        let build = settings(
            Tier::Development,
            TierProperties::new("local.test").with_port(3000),
            RuntimeOverrides::default(),
        );

        assert_eq!(build.mode, BuildMode::Development);
        assert_eq!(build.source_map.as_deref(), Some("inline-source-map"));
        assert!(build.hot_module_replacement);
        assert_eq!(build.file_loader_public_path, "");
        assert_eq!(build.css_extract_public_path, "http://local.test:3000/assets/");
        assert_eq!(build.fs_base, PathBuf::from("/work/app/public"));
        assert_eq!(build.fs_build, PathBuf::from("/work/app/public/assets"));
    }

    #[test]
    fn app_index_relative_production_uses_dot_slash_for_loaders() {
        let build = settings(
            Tier::Production,
            TierProperties::new("example.com")
                .with_tls(true)
                .with_relative_url_type(RelativeUrlType::AppIndexRelative),
            RuntimeOverrides::default(),
        );

        assert_eq!(build.mode, BuildMode::Production);
        assert_eq!(build.source_map, None);
        assert!(!build.hot_module_replacement);
        assert_eq!(build.output_public_path, "assets/");
        assert_eq!(build.file_loader_public_path, "./");
        assert_eq!(build.css_extract_public_path, "./");
    }

    #[test]
    fn absolute_staging_keeps_public_path_for_css() {
        let build = settings(
            Tier::Staging,
            TierProperties::new("stage.example.com"),
            RuntimeOverrides::default(),
        );

        assert_eq!(build.file_loader_public_path, "");
        assert_eq!(build.css_extract_public_path, "http://stage.example.com/assets/");
    }

    #[test]
    fn define_flags_follow_tier() {
        let define = define_globals(Tier::Testing);
        assert_eq!(define["process.env.NODE_ENV"], json!("production"));
        assert_eq!(define["__TESTING__"], json!(true));
        assert_eq!(define["__DEV__"], json!(false));
        assert_eq!(define["__PROD__"], json!(true));

        let define = define_globals(Tier::Development);
        assert_eq!(define["process.env.NODE_ENV"], json!("development"));
        assert_eq!(define["__DEVELOPMENT__"], json!(true));
        assert_eq!(define["__PRODUCTION__"], json!(false));
        assert_eq!(define.len(), 11);
    }
}
