//! Exit codes for the CLI.
//!
//! These codes enable scripting integration by providing structured
//! feedback about operation results.

/// Exit codes for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ExitCode {
    /// Platform check passed; installation may proceed
    Success = 0,
    /// Host platform is not POSIX compatible; installation should abort
    UnsupportedPlatform = 1,
    /// Invalid command-line arguments
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExitCode::Success => write!(f, "success"),
            ExitCode::UnsupportedPlatform => write!(f, "unsupported platform"),
            ExitCode::InvalidArguments => write!(f, "invalid arguments"),
        }
    }
}
