//! Platform guard decision logic.
//!
//! A single evaluate-once predicate with two terminal outcomes: the host
//! platform either supports the install workflow or it does not.

use crate::types::{GuardOutcome, GuardReport};

/// Platform token reported by Windows hosts.
pub const WINDOWS: &str = "win32";

/// Configuration for the guard's user-facing diagnostics.
///
/// The product name is a value so that different install workflows can share
/// one guard instead of duplicating the message text.
#[derive(Debug, Clone)]
pub struct GuardConfig {
    /// Product name embedded in the first diagnostic line.
    pub product_name: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            product_name: "easycheck".to_string(),
        }
    }
}

impl GuardConfig {
    /// Create a config with an explicit product name.
    pub fn with_product(product_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
        }
    }

    /// The two diagnostic lines written to stderr when the check fails.
    pub fn diagnostic_lines(&self) -> [String; 2] {
        [
            format!(
                "{} only supports POSIX compatible systems.",
                self.product_name
            ),
            "Please try again with alternatives such as a POSIX compatibility layer.".to_string(),
        ]
    }
}

/// Check whether installation may proceed on the given platform.
///
/// Only the Windows token fails the check. Empty or unrecognized tokens are
/// treated as not-Windows and pass.
pub fn check_platform(platform: &str) -> GuardOutcome {
    if platform == WINDOWS {
        GuardOutcome::Unsupported
    } else {
        GuardOutcome::Supported
    }
}

/// Evaluate the guard and bundle the result for presentation.
pub fn evaluate(platform: &str, config: &GuardConfig) -> GuardReport {
    let outcome = check_platform(platform);
    let messages = match outcome {
        GuardOutcome::Supported => Vec::new(),
        GuardOutcome::Unsupported => config.diagnostic_lines().to_vec(),
    };
    GuardReport {
        platform: platform.to_string(),
        supported: outcome.is_supported(),
        messages,
    }
}
