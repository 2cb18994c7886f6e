//! Terminal color support for CLI output.
//!
//! Provides colorful output when running interactively, with automatic
//! detection to disable colors when output is piped or redirected.

use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Check if stdout is a terminal (interactive mode).
pub fn is_interactive() -> bool {
    std::io::stdout().is_terminal()
}

/// Check if stderr is a terminal (interactive mode).
pub fn is_stderr_interactive() -> bool {
    std::io::stderr().is_terminal()
}

/// Style for guard failure lines on stderr.
pub fn alert(msg: &str) -> String {
    if is_stderr_interactive() {
        format!("{}", msg.red().bold())
    } else {
        msg.to_string()
    }
}

/// Style for bold text.
pub fn bold(msg: &str) -> String {
    if is_interactive() {
        format!("{}", msg.bold())
    } else {
        msg.to_string()
    }
}
