//! Development server settings derived from a resolution.

use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::resolve::{ResolvedPaths, RuntimeOverrides};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerSettings {
    pub host: String,

    pub port: Option<u16>,

    pub hot: bool,

    /// Directory served as static content; `None` serves only the build
    pub content_base: Option<PathBuf>,

    pub public_path: String,

    pub https: bool,

    pub compress: bool,

    pub history_api_fallback: bool,

    pub index: String,

    pub allowed_hosts: Vec<String>,

    pub headers: IndexMap<String, String>,
}

impl DevServerSettings {
    pub fn derive(paths: &ResolvedPaths, fs_base: &Path, overrides: RuntimeOverrides) -> Self {
        let mut allowed_hosts = Vec::with_capacity(3);
        if !paths.fqdn.trim().is_empty() {
            allowed_hosts.push(paths.fqdn.clone());
        }
        allowed_hosts.extend(default_allowed_hosts());

        let mut headers = IndexMap::new();
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());

        Self {
            host: paths.fqdn.clone(),
            port: paths.port,
            hot: true,
            content_base: overrides.force_static_serving.then(|| fs_base.to_path_buf()),
            public_path: paths.public_path.clone(),
            https: paths.tls,
            compress: true,
            history_api_fallback: true,
            index: default_index(),
            allowed_hosts,
            headers,
        }
    }
}

fn default_allowed_hosts() -> [String; 2] {
    [".test".into(), "localhost".into()]
}

fn default_index() -> String {
    "index.html".into()
}
