//! Schema command implementation.

use tierpath_config::AppProperties;

use crate::cli::SchemaArgs;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Print the JSON Schema of the properties document, or write it to
/// `--output`.
pub fn execute(args: SchemaArgs) -> Result<()> {
    let schema = serde_json::to_string_pretty(&AppProperties::json_schema())?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, format!("{schema}\n"))
                .context(format!("Failed to write schema to {}", path.display()))?;
            ui::success(&format!("Wrote schema to {}", path.display()));
        }
        None => ui::print_resolved(&format!("{schema}\n"))?,
    }

    Ok(())
}
