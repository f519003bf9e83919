//! Terminal UI utilities for status messages and formatted output.
//!
//! Status lines go to stderr. Resolved values go to stdout so they can be
//! piped into other tools.
//!
//! # Examples
//!
//! ```no_run
//! use tierpath_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Properties are valid");
//! ui::warning("relativeUrlType 'relative' is not recognized");
//! ```

mod format;
mod messages;

pub use format::{
    env_lines, print_resolved, render_key_values, resolved_key_values, settings_key_values,
};
pub use messages::{error, info, success, warning};

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support based on environment and the `--no-color` flag.
pub fn init_colors(no_color: bool) {
    owo_colors::set_override(!no_color && should_use_color());
}
