//! Command-line interface definition for tierpath.
//!
//! This module defines the CLI structure using clap v4's derive macros.
//!
//! # Command Structure
//!
//! - `tierpath resolve` - Resolve the public path for the current tier
//! - `tierpath check` - Validate the properties document
//! - `tierpath tiers` - List configured tiers
//! - `tierpath schema` - Print the properties JSON Schema

mod commands;
pub mod enums;
mod tests;

use clap::Parser;

pub use commands::{CheckArgs, Command, ResolveArgs, SchemaArgs, TiersArgs};
pub use enums::*;

/// tierpath - public paths for tiered front-end builds
#[derive(Parser, Debug)]
#[command(
    name = "tierpath",
    version,
    about = "Resolve asset public paths per deployment tier",
    long_about = "tierpath reads a properties document describing each deployment tier\n\
                  (development, testing, staging, production) and resolves the public\n\
                  path and build settings a bundler needs for the current environment."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Only critical errors will be displayed. Resolved output on stdout is
    /// not affected.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
