//! Shared types for guard evaluation results.

use serde::{Deserialize, Serialize};

/// Outcome of a platform check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The platform is POSIX compatible; installation may proceed
    Supported,
    /// The platform is Windows; installation should be aborted
    Unsupported,
}

impl GuardOutcome {
    /// Whether the checked platform may proceed with installation.
    pub fn is_supported(self) -> bool {
        matches!(self, GuardOutcome::Supported)
    }
}

/// Result of one guard evaluation, in a form suitable for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardReport {
    /// Platform token that was examined
    pub platform: String,
    /// Whether installation may proceed on this platform
    pub supported: bool,
    /// Diagnostic lines for the failure path (empty when supported)
    #[serde(default)]
    pub messages: Vec<String>,
}
