//! Public-path resolution.
//!
//! Turns one tier's [`TierProperties`] into the family of URLs a build needs:
//! base URLs with and without the port, the URLs of the built assets, and the
//! `publicPath` the bundler embeds into emitted asset references.
//!
//! Resolution is pure. Identical inputs always produce identical
//! [`ResolvedPaths`], and nothing is logged or cached.

use serde::Serialize;

use crate::error::{ConfigError, Result};
use crate::properties::{AppProperties, GlobalFlags, RelativeUrlType, TierProperties};
use crate::tier::Tier;

/// URL path of the build output relative to the app base.
pub const ASSET_SUBDIR: &str = "assets/";

/// Flags supplied by the running tool rather than the properties document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuntimeOverrides {
    /// A dev server is serving the build; addressing is forced to absolute.
    pub dev_server_active: bool,
    /// The dev server serves static files from the app base, so the app sits
    /// at the server root.
    pub force_static_serving: bool,
}

/// Every URL derived for one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPaths {
    pub tier: Tier,
    pub relative_url_type: RelativeUrlType,
    pub fqdn: String,
    pub port: Option<u16>,
    pub tls: bool,
    /// Effective sub path, empty under static serving
    pub path_above_server_root: String,
    pub protocol_prefix: String,
    pub base_url_with_port: String,
    pub base_url_no_port: String,
    pub build_url_with_port: String,
    pub build_url_no_port: String,
    pub build_url_relative_to_app: String,
    pub build_url_relative_to_server_root: String,
    pub public_path: String,
}

/// Resolve `tier` against a whole properties document.
///
/// # Errors
///
/// - `ConfigError::MissingTierProperties` if the document has no entry for `tier`
/// - `ConfigError::AbsoluteAddressingRequiresHost` if absolute URLs are needed
///   and the tier has no fqdn
///
/// # Example
///
/// ```
/// use tierpath_config::{resolve_public_path, AppProperties, RuntimeOverrides, Tier, TierProperties};
///
/// let props = AppProperties::default().with_tier(
///     Tier::Development,
///     TierProperties::new("local.test").with_port(3000),
/// );
///
/// let paths = resolve_public_path(Tier::Development, &props, RuntimeOverrides::default()).unwrap();
/// assert_eq!(paths.public_path, "http://local.test:3000/assets/");
/// ```
pub fn resolve_public_path(
    tier: Tier,
    properties: &AppProperties,
    overrides: RuntimeOverrides,
) -> Result<ResolvedPaths> {
    let tier_props = properties.tier_properties(tier)?;
    resolve_tier_paths(tier, tier_props, properties.global_flags(), overrides)
}

/// Resolve a single tier record.
pub fn resolve_tier_paths(
    tier: Tier,
    props: &TierProperties,
    flags: GlobalFlags,
    overrides: RuntimeOverrides,
) -> Result<ResolvedPaths> {
    let protocol_prefix = if flags.use_protocol_relative_urls {
        ""
    } else if props.tls {
        "https:"
    } else {
        "http:"
    };

    // Port 0 means no port configured.
    let port = props.port.filter(|&port| port != 0);
    let port_suffix = port.map(|port| format!(":{port}")).unwrap_or_default();

    let path_above_server_root = if overrides.force_static_serving {
        ""
    } else {
        props.path_above_server_root.as_str()
    };

    let fqdn = props.fqdn.as_str();
    let base_url_with_port =
        format!("{protocol_prefix}//{fqdn}{port_suffix}/{path_above_server_root}");
    let base_url_no_port = format!("{protocol_prefix}//{fqdn}/{path_above_server_root}");

    let build_url_with_port = format!("{base_url_with_port}{ASSET_SUBDIR}");
    let build_url_no_port = format!("{base_url_no_port}{ASSET_SUBDIR}");
    let build_url_relative_to_server_root = format!("/{path_above_server_root}{ASSET_SUBDIR}");

    let relative_url_type = if overrides.dev_server_active {
        RelativeUrlType::Absolute
    } else {
        props.relative_url_type.sanitized()
    };

    if relative_url_type == RelativeUrlType::Absolute && !props.has_host() {
        return Err(ConfigError::AbsoluteAddressingRequiresHost { tier });
    }

    let public_path = match relative_url_type {
        RelativeUrlType::ServerRootRelative => build_url_relative_to_server_root.clone(),
        RelativeUrlType::AppIndexRelative => ASSET_SUBDIR.to_string(),
        RelativeUrlType::Absolute => build_url_with_port.clone(),
    };

    Ok(ResolvedPaths {
        tier,
        relative_url_type,
        fqdn: props.fqdn.clone(),
        port,
        tls: props.tls,
        path_above_server_root: path_above_server_root.to_string(),
        protocol_prefix: protocol_prefix.to_string(),
        base_url_with_port,
        base_url_no_port,
        build_url_with_port,
        build_url_no_port,
        build_url_relative_to_app: ASSET_SUBDIR.to_string(),
        build_url_relative_to_server_root,
        public_path,
    })
}

/// Resolver bound to one properties document.
#[derive(Debug, Clone, Copy)]
pub struct PublicPathResolver<'a> {
    properties: &'a AppProperties,
}

impl<'a> PublicPathResolver<'a> {
    pub fn new(properties: &'a AppProperties) -> Self {
        Self { properties }
    }

    pub fn resolve(&self, tier: Tier, overrides: RuntimeOverrides) -> Result<ResolvedPaths> {
        resolve_public_path(tier, self.properties, overrides)
    }

    /// Resolve every tier, keeping per-tier failures.
    pub fn resolve_all(&self, overrides: RuntimeOverrides) -> Vec<(Tier, Result<ResolvedPaths>)> {
        Tier::ALL
            .into_iter()
            .map(|tier| (tier, self.resolve(tier, overrides)))
            .collect()
    }
}
