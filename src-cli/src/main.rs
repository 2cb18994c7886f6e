//! easycheck Command-Line Interface
//!
//! An install-time preflight guard. Verifies that the host operating system
//! is POSIX compatible and signals the result to the invoking package
//! manager through the process exit code.

mod colors;
mod commands;
mod exit_codes;
mod platform;

use clap::{Args, Parser, Subcommand};
use exit_codes::ExitCode;

/// easycheck - POSIX platform preflight
#[derive(Parser, Debug)]
#[command(name = "easycheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that the host platform can run the install workflow
    Check(CheckArgs),
    /// Show version information
    Version,
}

/// Options for the platform check. Running with no subcommand is equivalent
/// to `check` with defaults, so install hooks can invoke the bare binary.
#[derive(Args, Debug, Default, Clone)]
pub struct CheckArgs {
    /// Platform token to check instead of the detected host platform
    #[arg(long)]
    platform: Option<String>,

    /// Product name used in diagnostic messages
    #[arg(long)]
    product: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init_logging();
    }

    let exit_code = run(cli);
    std::process::exit(exit_code.as_i32());
}

/// Initialize debug logging to stderr, honoring RUST_LOG when set.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Some(Commands::Check(args)) => commands::check(args, cli.json, cli.quiet),
        Some(Commands::Version) => {
            commands::version(cli.json);
            ExitCode::Success
        }
        None => commands::check(CheckArgs::default(), cli.json, cli.quiet),
    }
}
