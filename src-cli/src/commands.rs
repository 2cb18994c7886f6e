//! CLI command implementations.

use crate::colors;
use crate::exit_codes::ExitCode;
use crate::platform;
use crate::CheckArgs;
use easycheck_common::guard::{self, GuardConfig};

/// Check that the host platform can run the install workflow.
///
/// Writes nothing on the success path. On the failure path, writes the two
/// diagnostic lines to stderr (unless quiet) and returns the unsupported
/// exit code for the invoking package manager.
pub fn check(args: CheckArgs, json: bool, quiet: bool) -> ExitCode {
    let token = args
        .platform
        .as_deref()
        .unwrap_or_else(|| platform::host_platform());
    let config = match &args.product {
        Some(name) => GuardConfig::with_product(name.clone()),
        None => GuardConfig::default(),
    };

    tracing::debug!(platform = token, "checking platform token");
    let report = guard::evaluate(token, &config);

    if json {
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
    } else if !report.supported && !quiet {
        let prefix = platform::program_name();
        for line in &report.messages {
            eprintln!("{}", colors::alert(&format!("{}: {}", prefix, line)));
        }
    }

    if report.supported {
        ExitCode::Success
    } else {
        ExitCode::UnsupportedPlatform
    }
}

/// Print version information.
pub fn version(json: bool) {
    let version = env!("CARGO_PKG_VERSION");
    if json {
        println!(r#"{{"version": "{}"}}"#, version);
    } else {
        println!("{} {}", colors::bold("easycheck"), version);
    }
}
