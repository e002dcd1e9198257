//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pygate",
    version,
    about = "Pygate (lint + test gate)",
    long_about = "Pygate — a tiny, fast CLI that runs a lint tool and a test runner, normalizes the lint report, and gates CI on the combined result.\n\nConfiguration precedence: CLI > pygate.toml > defaults.",
    after_help = "Examples:\n  pygate check\n  pygate lint --output json\n  pygate report raw.json\n  pygate test",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for linting, testing, and gating.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current pygate version."
    )]
    Version,
    /// Run lint and tests, then gate on the combined result
    #[command(
        about = "Run the full gate",
        long_about = "Run the lint tool and the test runner, then exit non-zero when either stage fails.",
        after_help = "Examples:\n  pygate check\n  pygate check --output json"
    )]
    Check {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Run the lint tool and normalize its report
    #[command(
        about = "Run lint checks",
        long_about = "Invoke the configured lint tool, normalize its JSON report into per-file pass/fail entries, and exit non-zero when any file failed.",
        after_help = "Examples:\n  pygate lint\n  pygate lint --output json"
    )]
    Lint {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Run the test command
    #[command(
        about = "Run tests",
        long_about = "Invoke the configured test runner with inherited streams and mirror its result in the exit code."
    )]
    Test {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
    },
    /// Normalize an existing raw report
    #[command(
        about = "Normalize a raw report",
        long_about = "Read a raw lint report (JSON object keyed by file path) from a file or stdin and print the normalized per-file report.",
        after_help = "Examples:\n  pygate report raw.json\n  flake8 --format=json . | pygate report -"
    )]
    Report {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(help = "Raw report file, or - for stdin (default: stdin)")]
        path: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Source label stamped on diagnostics (default: flake8)")]
        source: Option<String>,
    },
}
