//! Formatting of resolved values for stdout.

use std::io::{self, Write};

use owo_colors::{OwoColorize, Stream::Stdout};
use tierpath_config::{BuildSettings, ResolvedPaths};

/// Ordered `(key, value)` pairs of a resolution, keyed like its JSON form.
pub fn resolved_key_values(paths: &ResolvedPaths) -> Vec<(&'static str, String)> {
    let relative_url_type = paths
        .relative_url_type
        .as_config_str()
        .unwrap_or("false")
        .to_string();

    vec![
        ("tier", paths.tier.to_string()),
        ("relativeUrlType", relative_url_type),
        ("protocolPrefix", paths.protocol_prefix.clone()),
        ("baseUrlWithPort", paths.base_url_with_port.clone()),
        ("baseUrlNoPort", paths.base_url_no_port.clone()),
        ("buildUrlWithPort", paths.build_url_with_port.clone()),
        ("buildUrlNoPort", paths.build_url_no_port.clone()),
        ("buildUrlRelativeToApp", paths.build_url_relative_to_app.clone()),
        (
            "buildUrlRelativeToServerRoot",
            paths.build_url_relative_to_server_root.clone(),
        ),
        ("publicPath", paths.public_path.clone()),
    ]
}

/// Pairs for the derived build settings, after the resolution pairs.
pub fn settings_key_values(settings: &BuildSettings) -> Vec<(&'static str, String)> {
    let mut pairs = resolved_key_values(&settings.paths);
    pairs.extend([
        ("mode", settings.mode.as_str().to_string()),
        (
            "sourceMap",
            settings.source_map.clone().unwrap_or_else(|| "false".to_string()),
        ),
        ("fsBase", settings.fs_base.display().to_string()),
        ("fsBuild", settings.fs_build.display().to_string()),
        ("fileLoaderPublicPath", settings.file_loader_public_path.clone()),
        ("cssExtractPublicPath", settings.css_extract_public_path.clone()),
        ("hotModuleReplacement", settings.hot_module_replacement.to_string()),
        ("devServerHost", settings.dev_server.host.clone()),
        (
            "devServerPort",
            settings
                .dev_server
                .port
                .map(|p| p.to_string())
                .unwrap_or_default(),
        ),
        (
            "devServerContentBase",
            settings
                .dev_server
                .content_base
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "false".to_string()),
        ),
    ]);
    pairs
}

/// Render pairs as an aligned `key  value` listing.
pub fn render_key_values(pairs: &[(&str, String)]) -> String {
    let width = pairs.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (key, value) in pairs {
        let padded = format!("{key:<width$}");
        out.push_str(&format!(
            "{}  {}\n",
            padded.if_supports_color(Stdout, |t| t.cyan()),
            value
        ));
    }
    out
}

/// Render pairs as `TIERPATH_KEY='value'` lines.
pub fn env_lines(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("TIERPATH_{}={}\n", screaming_snake(key), shell_quote(value)))
        .collect()
}

fn screaming_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            out.push('_');
        }
        out.push(c.to_ascii_uppercase());
    }
    out
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Write rendered output to stdout.
pub fn print_resolved(rendered: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()
}
