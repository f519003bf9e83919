//! tierpath CLI entry point.
//!
//! Parses arguments, initializes logging and colors, and dispatches to the
//! selected command.

use clap::Parser;
use miette::Result;
use tierpath_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Tiers(tiers_args) => commands::tiers_execute(tiers_args),
        cli::Command::Schema(schema_args) => commands::schema_execute(schema_args),
    };

    result.map_err(error::cli_error_to_miette)
}
