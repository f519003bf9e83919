//! Tiers command implementation.

use tierpath_config::{AppProperties, Tier};

use crate::cli::TiersArgs;
use crate::commands::{load_properties, project_root};
use crate::error::Result;
use crate::ui;

/// List every tier with its host, port and configured addressing.
pub fn execute(args: TiersArgs) -> Result<()> {
    let root = project_root(args.root.as_deref())?;
    let properties = load_properties(args.config.as_deref(), &root)?;

    let pairs = tier_summaries(&properties);
    ui::print_resolved(&ui::render_key_values(&pairs))?;
    Ok(())
}

fn tier_summaries(properties: &AppProperties) -> Vec<(&'static str, String)> {
    Tier::ALL
        .into_iter()
        .map(|tier| {
            let summary = match properties.tier_properties(tier) {
                Ok(props) => {
                    let host = if props.fqdn.trim().is_empty() {
                        "-".to_string()
                    } else {
                        props.fqdn.clone()
                    };
                    let port = props.port.map(|p| format!(":{p}")).unwrap_or_default();
                    let scheme = props
                        .relative_url_type
                        .sanitized()
                        .as_config_str()
                        .unwrap_or("absolute");
                    format!("{host}{port} ({scheme})")
                }
                Err(_) => "(missing)".to_string(),
            };
            (tier.as_str(), summary)
        })
        .collect()
}
