//! Platform detection and handling.
//!
//! Resolves the host operating system to the platform token set the guard
//! compares against, and derives the program name used to prefix
//! diagnostics.

/// Resolve the host operating system to a platform token.
///
/// Windows resolves to `win32` and macOS to `darwin`; every other OS name
/// passes through unchanged and is treated as not-Windows by the guard.
pub fn host_platform() -> &'static str {
    match std::env::consts::OS {
        "windows" => "win32",
        "macos" => "darwin",
        other => other,
    }
}

/// Program name for diagnostic prefixes, derived from argv[0].
pub fn program_name() -> String {
    let argv0 = std::env::args().next();
    argv0
        .as_deref()
        .map(std::path::Path::new)
        .and_then(std::path::Path::file_stem)
        .and_then(std::ffi::OsStr::to_str)
        .map(str::to_owned)
        .unwrap_or_else(|| "easycheck".to_owned())
}
