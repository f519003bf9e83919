//! The properties document: one [`TierProperties`] record per tier plus the
//! flags shared by every tier.
//!
//! Documents are usually written by hand (a `properties.json` next to the
//! build config), so field parsing is lenient the same way the build scripts
//! were: `port` may be a number, a numeric string or empty, and
//! `relativeUrlType` may be any scalar.

use std::borrow::Cow;

use indexmap::IndexMap;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{ConfigError, Result as ConfigResult};
use crate::tier::Tier;

/// Addressing scheme used for emitted asset URLs after sanitization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeUrlType {
    /// Relative to the served HTML entry point (`assets/...`).
    AppIndexRelative,
    /// Absolute path from the web server root (`/sub/path/assets/...`).
    ServerRootRelative,
    /// Fully qualified URL built from protocol, host and port.
    Absolute,
}

impl RelativeUrlType {
    pub const APP_INDEX_RELATIVE: &'static str = "app-index-relative";
    pub const SERVER_ROOT_RELATIVE: &'static str = "server-root-relative";

    pub fn is_relative(self) -> bool {
        self != RelativeUrlType::Absolute
    }

    /// The configuration spelling; `None` for absolute addressing.
    pub fn as_config_str(self) -> Option<&'static str> {
        match self {
            RelativeUrlType::AppIndexRelative => Some(Self::APP_INDEX_RELATIVE),
            RelativeUrlType::ServerRootRelative => Some(Self::SERVER_ROOT_RELATIVE),
            RelativeUrlType::Absolute => None,
        }
    }
}

impl Serialize for RelativeUrlType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_config_str() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_bool(false),
        }
    }
}

/// `relativeUrlType` exactly as it appears in the document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RelativeUrlSetting {
    AppIndexRelative,
    ServerRootRelative,
    /// `false`, `null`, `""`, `0` or absent.
    #[default]
    Disabled,
    /// Any other truthy value. Resolution treats it as [`RelativeUrlType::Absolute`].
    Unrecognized(String),
}

impl RelativeUrlSetting {
    /// Collapse the configured value to a supported addressing scheme.
    pub fn sanitized(&self) -> RelativeUrlType {
        match self {
            RelativeUrlSetting::AppIndexRelative => RelativeUrlType::AppIndexRelative,
            RelativeUrlSetting::ServerRootRelative => RelativeUrlType::ServerRootRelative,
            RelativeUrlSetting::Disabled | RelativeUrlSetting::Unrecognized(_) => {
                RelativeUrlType::Absolute
            }
        }
    }

    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null | Value::Bool(false) => RelativeUrlSetting::Disabled,
            Value::String(s) if s.is_empty() => RelativeUrlSetting::Disabled,
            Value::String(s) if s == RelativeUrlType::APP_INDEX_RELATIVE => {
                RelativeUrlSetting::AppIndexRelative
            }
            Value::String(s) if s == RelativeUrlType::SERVER_ROOT_RELATIVE => {
                RelativeUrlSetting::ServerRootRelative
            }
            Value::String(s) => RelativeUrlSetting::Unrecognized(s.clone()),
            Value::Number(n) if n.as_f64() == Some(0.0) => RelativeUrlSetting::Disabled,
            other => RelativeUrlSetting::Unrecognized(other.to_string()),
        }
    }
}

impl From<RelativeUrlType> for RelativeUrlSetting {
    fn from(kind: RelativeUrlType) -> Self {
        match kind {
            RelativeUrlType::AppIndexRelative => RelativeUrlSetting::AppIndexRelative,
            RelativeUrlType::ServerRootRelative => RelativeUrlSetting::ServerRootRelative,
            RelativeUrlType::Absolute => RelativeUrlSetting::Disabled,
        }
    }
}

impl Serialize for RelativeUrlSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RelativeUrlSetting::AppIndexRelative => {
                serializer.serialize_str(RelativeUrlType::APP_INDEX_RELATIVE)
            }
            RelativeUrlSetting::ServerRootRelative => {
                serializer.serialize_str(RelativeUrlType::SERVER_ROOT_RELATIVE)
            }
            RelativeUrlSetting::Disabled => serializer.serialize_bool(false),
            RelativeUrlSetting::Unrecognized(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for RelativeUrlSetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(RelativeUrlSetting::from_value(&value))
    }
}

impl JsonSchema for RelativeUrlSetting {
    fn schema_name() -> Cow<'static, str> {
        "RelativeUrlType".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "description": "Asset addressing scheme, or false for fully qualified URLs",
            "anyOf": [
                { "type": "string", "enum": ["app-index-relative", "server-root-relative"] },
                { "type": "boolean", "const": false }
            ]
        })
    }
}

/// Host, port and addressing for one tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TierProperties {
    /// Fully qualified host name, e.g. `app.example.com`
    pub fqdn: String,

    /// Custom port; absent or empty means the protocol default
    #[serde(deserialize_with = "deserialize_port")]
    #[schemars(with = "Option<u16>")]
    pub port: Option<u16>,

    /// Serve over https
    pub tls: bool,

    /// Sub path of the app above the server root, e.g. `some/path/`
    #[serde(
        rename = "appPathUrlAboveServerRoot",
        alias = "pathAboveServerRoot",
        alias = "path_above_server_root"
    )]
    pub path_above_server_root: String,

    #[serde(alias = "relative_url_type")]
    pub relative_url_type: RelativeUrlSetting,
}

impl TierProperties {
    pub fn new(fqdn: impl Into<String>) -> Self {
        Self {
            fqdn: fqdn.into(),
            ..Self::default()
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_tls(mut self, tls: bool) -> Self {
        self.tls = tls;
        self
    }

    pub fn with_path_above_server_root(mut self, path: impl Into<String>) -> Self {
        self.path_above_server_root = path.into();
        self
    }

    pub fn with_relative_url_type(mut self, setting: impl Into<RelativeUrlSetting>) -> Self {
        self.relative_url_type = setting.into();
        self
    }

    pub fn has_host(&self) -> bool {
        !self.fqdn.trim().is_empty()
    }
}

fn deserialize_port<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u16>, D::Error> {
    use serde::de::Error;

    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<u16>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid port '{s}'"))),
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u16::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("port {n} is out of range"))),
        other => Err(D::Error::custom(format!("invalid port {other}"))),
    }
}

/// Flags that apply to every tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalFlags {
    /// Emit `//host/...` instead of `https://host/...`
    pub use_protocol_relative_urls: bool,
}

/// The whole properties document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AppProperties {
    #[serde(alias = "use_protocol_relative_urls")]
    pub use_protocol_relative_urls: bool,

    /// Tier name to properties
    pub tiers: IndexMap<String, TierProperties>,
}

impl AppProperties {
    /// Create from serde_json::Value (for documents embedded in other config)
    ///
    /// # Example
    ///
    /// ```
    /// use tierpath_config::{AppProperties, Tier};
    /// use serde_json::json;
    ///
    /// let props = AppProperties::from_value(json!({
    ///     "tiers": {
    ///         "production": { "fqdn": "example.com", "tls": true }
    ///     }
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(props.tier_properties(Tier::Production).unwrap().fqdn, "example.com");
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "properties".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "properties".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn with_tier(mut self, tier: Tier, props: TierProperties) -> Self {
        self.tiers.insert(tier.as_str().to_string(), props);
        self
    }

    /// Look up the record for `tier`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingTierProperties` when the document has no
    /// entry for the tier.
    pub fn tier_properties(&self, tier: Tier) -> ConfigResult<&TierProperties> {
        self.tiers
            .get(tier.as_str())
            .ok_or(ConfigError::MissingTierProperties { tier })
    }

    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            use_protocol_relative_urls: self.use_protocol_relative_urls,
        }
    }

    /// JSON Schema for the document.
    pub fn json_schema() -> Value {
        let schema = schemars::schema_for!(AppProperties);
        serde_json::to_value(schema).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_properties_json_layout() {
        let props = AppProperties::from_value(json!({
            "useProtocolRelativeUrls": false,
            "tiers": {
                "development": {
                    "fqdn": "local.test",
                    "port": 3000,
                    "tls": false,
                    "appPathUrlAboveServerRoot": "",
                    "relativeUrlType": false
                },
                "production": {
                    "fqdn": "example.com",
                    "port": "",
                    "tls": true,
                    "appPathUrlAboveServerRoot": "app/",
                    "relativeUrlType": "app-index-relative"
                }
            }
        }))
        .unwrap();

        let dev = props.tier_properties(Tier::Development).unwrap();
        assert_eq!(dev.port, Some(3000));
        assert_eq!(dev.relative_url_type, RelativeUrlSetting::Disabled);

        let prod = props.tier_properties(Tier::Production).unwrap();
        assert_eq!(prod.port, None);
        assert!(prod.tls);
        assert_eq!(prod.path_above_server_root, "app/");
        assert_eq!(prod.relative_url_type, RelativeUrlSetting::AppIndexRelative);
    }

    #[test]
    fn tier_order_follows_document() {
        let props = AppProperties::from_value(json!({
            "tiers": { "production": {}, "development": {}, "staging": {} }
        }))
        .unwrap();
        let names: Vec<_> = props.tiers.keys().cloned().collect();
        assert_eq!(names, vec!["production", "development", "staging"]);
    }

    #[test]
    fn missing_tier_is_an_error() {
        let props = AppProperties::default();
        let err = props.tier_properties(Tier::Testing).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingTierProperties {
                tier: Tier::Testing
            }
        ));
    }

    #[test]
    fn port_accepts_numeric_strings() {
        let props: TierProperties = serde_json::from_value(json!({ "port": "8080" })).unwrap();
        assert_eq!(props.port, Some(8080));

        let props: TierProperties = serde_json::from_value(json!({ "port": null })).unwrap();
        assert_eq!(props.port, None);
    }

    #[test]
    fn port_rejects_out_of_range() {
        let result: Result<TierProperties, _> = serde_json::from_value(json!({ "port": 70000 }));
        assert!(result.is_err());

        let result: Result<TierProperties, _> = serde_json::from_value(json!({ "port": "http" }));
        assert!(result.is_err());
    }

    #[test]
    fn path_above_server_root_aliases() {
        let props: TierProperties =
            serde_json::from_value(json!({ "pathAboveServerRoot": "sub/" })).unwrap();
        assert_eq!(props.path_above_server_root, "sub/");
    }

    #[test]
    fn relative_url_setting_is_lenient() {
        let cases = [
            (json!(false), RelativeUrlSetting::Disabled),
            (json!(null), RelativeUrlSetting::Disabled),
            (json!(""), RelativeUrlSetting::Disabled),
            (json!(0), RelativeUrlSetting::Disabled),
            (json!("app-index-relative"), RelativeUrlSetting::AppIndexRelative),
            (json!("server-root-relative"), RelativeUrlSetting::ServerRootRelative),
            (json!("relative"), RelativeUrlSetting::Unrecognized("relative".into())),
            (json!(true), RelativeUrlSetting::Unrecognized("true".into())),
        ];

        for (value, expected) in cases {
            assert_eq!(RelativeUrlSetting::from_value(&value), expected, "{value}");
        }
    }

    #[test]
    fn unrecognized_setting_sanitizes_to_absolute() {
        let setting = RelativeUrlSetting::Unrecognized("document-relative".into());
        assert_eq!(setting.sanitized(), RelativeUrlType::Absolute);
        assert_eq!(
            RelativeUrlSetting::ServerRootRelative.sanitized(),
            RelativeUrlType::ServerRootRelative
        );
    }

    #[test]
    fn to_value_writes_false_for_disabled() {
        let props = AppProperties::default().with_tier(Tier::Development, TierProperties::new("a.test"));
        let value = props.to_value().unwrap();
        assert_eq!(value["tiers"]["development"]["relativeUrlType"], json!(false));
        assert_eq!(value["tiers"]["development"]["appPathUrlAboveServerRoot"], json!(""));
    }

    #[test]
    fn json_schema_describes_tiers() {
        let schema = AppProperties::json_schema();
        assert!(schema["properties"]["tiers"].is_object());
        assert!(schema["properties"]["useProtocolRelativeUrls"].is_object());
    }
}
