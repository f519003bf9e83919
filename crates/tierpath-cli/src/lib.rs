//! tierpath CLI - resolve per-tier public paths for front-end builds.
//!
//! This crate wraps `tierpath-config` in a command-line interface so build
//! scripts can ask for the public path (and the settings derived from it)
//! without linking the library.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions
//! - [`commands`] - One module per subcommand
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status messages and output formatting
//!
//! # Example
//!
//! ```rust,no_run
//! use tierpath_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
