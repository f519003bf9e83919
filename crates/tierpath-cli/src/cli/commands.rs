use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;

/// Available tierpath subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the public path for a tier
    ///
    /// The tier comes from --tier, or NODE_ENV when --tier is absent.
    /// WEBPACK_DEV_SERVER and DEV_SERVE_STATIC are honored as well.
    Resolve(ResolveArgs),

    /// Validate the properties document
    ///
    /// Checks that every tier is configured and can be resolved, and
    /// reports values that will be sanitized.
    Check(CheckArgs),

    /// List configured tiers
    Tiers(TiersArgs),

    /// Print the JSON Schema of the properties document
    Schema(SchemaArgs),
}

/// Arguments for the resolve command
#[derive(Args, Debug, Default)]
pub struct ResolveArgs {
    /// Path to the properties document
    ///
    /// Defaults to tierpath.toml, properties.json or the "tierpath" field of
    /// package.json in the project root.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Tier to resolve (overrides NODE_ENV)
    #[arg(short, long, value_enum)]
    pub tier: Option<TierArg>,

    /// Treat the build as served by a dev server
    ///
    /// Forces absolute URLs. Also enabled by a non-empty WEBPACK_DEV_SERVER.
    #[arg(long)]
    pub dev_server: bool,

    /// Serve static files from the app base
    ///
    /// Drops the path above the server root. Also enabled by
    /// DEV_SERVE_STATIC=true.
    #[arg(long)]
    pub serve_static: bool,

    /// Project root used for discovery and output directories
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print the derived build settings instead of only the resolved paths
    #[arg(long)]
    pub settings: bool,
}

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Path to the properties document
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project root used for discovery
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the tiers command
#[derive(Args, Debug, Default)]
pub struct TiersArgs {
    /// Path to the properties document
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project root used for discovery
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// Arguments for the schema command
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {
    /// Write the schema to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
