//! Check command implementation.
//!
//! Validates the properties document without resolving a single tier for a
//! build: every tier must be present and resolvable.

use tierpath_config::{
    AppProperties, PublicPathResolver, RuntimeOverrides, ValidationWarning, lint, validate,
};

use crate::cli::CheckArgs;
use crate::commands::{load_properties, project_root};
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the properties document
/// 2. Validate the tier table
/// 3. Report lint warnings (fatal with `--strict`)
/// 4. Resolve every tier with no runtime overrides
///
/// # Errors
///
/// Returns the first validation or resolution error found.
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking properties...");

    let root = project_root(args.root.as_deref())?;
    let properties = load_properties(args.config.as_deref(), &root)?;
    tracing::info!(tiers = properties.tiers.len(), "properties loaded");

    validate(&properties)?;
    ui::success("Tier table is valid");

    let warnings = lint(&properties);
    report_warnings(&warnings);
    if args.strict && !warnings.is_empty() {
        return Err(CliError::Custom(format!(
            "{} warning(s) treated as errors (--strict)",
            warnings.len()
        )));
    }

    resolve_every_tier(&properties)?;

    ui::success("All checks passed!");
    Ok(())
}

fn report_warnings(warnings: &[ValidationWarning]) {
    if warnings.is_empty() {
        ui::info("No warnings found");
        return;
    }

    ui::warning(&format!("Found {} potential issues:", warnings.len()));
    for warning in warnings {
        ui::warning(&format!("  - {warning}"));
    }
}

fn resolve_every_tier(properties: &AppProperties) -> Result<()> {
    let resolver = PublicPathResolver::new(properties);

    for (tier, result) in resolver.resolve_all(RuntimeOverrides::default()) {
        match result {
            Ok(paths) => ui::success(&format!("  {tier}: {}", paths.public_path)),
            Err(err) => {
                ui::error(&format!("  {tier}: {err}"));
                return Err(err.into());
            }
        }
    }

    Ok(())
}
