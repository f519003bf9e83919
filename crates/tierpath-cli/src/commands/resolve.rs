//! Resolve command implementation.
//!
//! Picks the tier, merges runtime overrides from the environment and the
//! command line, resolves the public path and prints it.

use tierpath_config::{
    AppProperties, BuildLayout, BuildSettings, EnvironmentSnapshot, RelativeUrlSetting,
    ResolvedPaths, RuntimeOverrides, Tier, resolve_public_path,
};

use crate::cli::{OutputFormat, ResolveArgs};
use crate::commands::{load_properties, project_root};
use crate::error::Result;
use crate::ui;

/// Execute the resolve command.
///
/// `--tier` wins over `NODE_ENV`. `--dev-server` and `--serve-static` only
/// switch overrides on, never off.
///
/// # Errors
///
/// Returns errors if the document cannot be loaded or the tier cannot be
/// resolved.
pub fn execute(args: ResolveArgs) -> Result<()> {
    let env = EnvironmentSnapshot::from_process();
    let rendered = render_with_env(args, &env)?;
    ui::print_resolved(&rendered)?;
    Ok(())
}

/// Load, resolve and render against an already captured environment.
fn render_with_env(args: ResolveArgs, env: &EnvironmentSnapshot) -> Result<String> {
    let root = project_root(args.root.as_deref())?;
    let properties = load_properties(args.config.as_deref(), &root)?;

    let tier = select_tier(&args, env);
    let overrides = merge_overrides(&args, env);
    tracing::debug!(
        %tier,
        dev_server_active = overrides.dev_server_active,
        force_static_serving = overrides.force_static_serving,
        "resolving public path"
    );

    let paths = resolve_public_path(tier, &properties, overrides)?;
    report_adjustments(tier, &properties, overrides);

    if args.settings {
        let settings = BuildSettings::derive(&paths, &BuildLayout::new(&root), overrides);
        render_settings(&settings, args.format)
    } else {
        render_paths(&paths, args.format)
    }
}

fn select_tier(args: &ResolveArgs, env: &EnvironmentSnapshot) -> Tier {
    match args.tier {
        Some(arg) => arg.into(),
        None => env.tier(),
    }
}

fn merge_overrides(args: &ResolveArgs, env: &EnvironmentSnapshot) -> RuntimeOverrides {
    let from_env = env.overrides();
    RuntimeOverrides {
        dev_server_active: args.dev_server || from_env.dev_server_active,
        force_static_serving: args.serve_static || from_env.force_static_serving,
    }
}

/// Warn when the effective addressing differs from the configured one.
fn report_adjustments(tier: Tier, properties: &AppProperties, overrides: RuntimeOverrides) {
    let Ok(props) = properties.tier_properties(tier) else {
        return;
    };

    match &props.relative_url_type {
        RelativeUrlSetting::Unrecognized(value) => {
            tracing::warn!(
                %tier,
                value = %value,
                "relativeUrlType is not recognized, using absolute URLs"
            );
        }
        setting if overrides.dev_server_active && setting.sanitized().is_relative() => {
            tracing::warn!(%tier, "dev server is active, using absolute URLs");
        }
        _ => {}
    }
}

fn render_paths(paths: &ResolvedPaths, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => ui::render_key_values(&ui::resolved_key_values(paths)),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(paths)?),
        OutputFormat::Env => ui::env_lines(&ui::resolved_key_values(paths)),
    })
}

fn render_settings(settings: &BuildSettings, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => ui::render_key_values(&ui::settings_key_values(settings)),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(settings)?),
        OutputFormat::Env => ui::env_lines(&ui::settings_key_values(settings)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::TierArg;
    use tempfile::TempDir;
    use tierpath_config::{RelativeUrlType, TierProperties};

    fn env(pairs: &[(&str, &str)]) -> EnvironmentSnapshot {
        EnvironmentSnapshot::from_lookup(|key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
    }

    #[test]
    fn test_tier_flag_wins_over_node_env() {
        let args = ResolveArgs {
            tier: Some(TierArg::Staging),
            ..Default::default()
        };
        assert_eq!(select_tier(&args, &env(&[("NODE_ENV", "production")])), Tier::Staging);

        let args = ResolveArgs::default();
        assert_eq!(
            select_tier(&args, &env(&[("NODE_ENV", "production")])),
            Tier::Production
        );
        assert_eq!(select_tier(&args, &env(&[])), Tier::Development);
    }

    #[test]
    fn test_overrides_merge_flags_and_env() {
        let args = ResolveArgs {
            serve_static: true,
            ..Default::default()
        };
        let overrides = merge_overrides(&args, &env(&[("WEBPACK_DEV_SERVER", "1")]));
        assert!(overrides.dev_server_active);
        assert!(overrides.force_static_serving);

        let overrides = merge_overrides(&ResolveArgs::default(), &env(&[("DEV_SERVE_STATIC", "yes")]));
        assert_eq!(overrides, RuntimeOverrides::default());
    }

    #[test]
    fn test_render_json_contains_public_path() {
        let props = AppProperties::default().with_tier(
            Tier::Production,
            TierProperties::new("example.com")
                .with_relative_url_type(RelativeUrlType::AppIndexRelative),
        );
        let paths =
            resolve_public_path(Tier::Production, &props, RuntimeOverrides::default()).unwrap();

        let rendered = render_paths(&paths, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["publicPath"], "assets/");
        assert_eq!(value["tier"], "production");
    }

    #[test]
    fn test_dev_server_env_resolves_absolute_from_disk() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("properties.json"),
            r#"{
                "tiers": {
                    "production": {
                        "fqdn": "example.com",
                        "tls": true,
                        "relativeUrlType": "app-index-relative"
                    }
                }
            }"#,
        )
        .unwrap();

        let args = ResolveArgs {
            root: Some(dir.path().to_path_buf()),
            format: OutputFormat::Json,
            ..Default::default()
        };
        let env = env(&[("NODE_ENV", "production"), ("WEBPACK_DEV_SERVER", "true")]);

        let rendered = render_with_env(args, &env).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["tier"], "production");
        assert_eq!(value["relativeUrlType"], false);
        assert_eq!(value["publicPath"], "https://example.com/assets/");
    }
}
