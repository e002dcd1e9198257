//! Pygate CLI binary entry point.
//! Delegates to modules for lint/test/report and prints results.

mod cli;
mod config;
mod models;
mod output;
mod report;
mod runner;
mod stats;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};
use models::Status;
use std::io::Read;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check { repo_root, output } => {
            let eff = config::resolve_effective(repo_root.as_deref(), output.as_deref(), None);
            // Friendly note if no pygate config was found
            let cfg = config::load_config(&eff.repo_root);
            if cfg.is_none() {
                eprintln!(
                    "{} {}",
                    crate::utils::note_prefix(),
                    "No pygate.toml found; using defaults."
                );
            }
            // Emit single top info when the default lint command is in play
            let lint_defaulted = cfg
                .as_ref()
                .and_then(|c| c.lint.as_ref())
                .map_or(true, |l| l.command.is_none() && l.args.is_none());
            if eff.output != "json" && lint_defaulted {
                eprintln!(
                    "{} {}",
                    crate::utils::info_prefix(),
                    format!(
                        "Using default lint command: {} {}",
                        eff.lint_command,
                        eff.lint_args.join(" ")
                    )
                );
            }
            let gate = match runner::run_gate(&eff) {
                Ok(gate) => gate,
                Err(e) => {
                    eprintln!(
                        "{} {}",
                        crate::utils::error_prefix(),
                        format!("lint report contains a malformed record: {}", e)
                    );
                    std::process::exit(2);
                }
            };
            for run in [&gate.lint, &gate.tests] {
                if let Some(note) = &run.note {
                    eprintln!(
                        "{} {}",
                        crate::utils::note_prefix(),
                        format!("{} stage degraded: {}", run.name, note)
                    );
                }
            }
            output::print_gate(&gate, &eff.output);
            if gate.status == Status::Failed {
                std::process::exit(1);
            }
        }
        Commands::Lint { repo_root, output } => {
            let eff = config::resolve_effective(repo_root.as_deref(), output.as_deref(), None);
            // Friendly note if no pygate config was found
            let cfg = config::load_config(&eff.repo_root);
            if cfg.is_none() {
                eprintln!(
                    "{} {}",
                    crate::utils::note_prefix(),
                    "No pygate.toml found; using defaults."
                );
            }
            // Emit single top info when the default lint command is in play
            let lint_defaulted = cfg
                .as_ref()
                .and_then(|c| c.lint.as_ref())
                .map_or(true, |l| l.command.is_none() && l.args.is_none());
            if eff.output != "json" && lint_defaulted {
                eprintln!(
                    "{} {}",
                    crate::utils::info_prefix(),
                    format!(
                        "Using default lint command: {} {}",
                        eff.lint_command,
                        eff.lint_args.join(" ")
                    )
                );
            }
            let (run, files) = match runner::run_lint(&eff) {
                Ok(res) => res,
                Err(e) => {
                    eprintln!(
                        "{} {}",
                        crate::utils::error_prefix(),
                        format!("lint report contains a malformed record: {}", e)
                    );
                    std::process::exit(2);
                }
            };
            if let Some(note) = &run.note {
                eprintln!(
                    "{} {}",
                    crate::utils::note_prefix(),
                    format!("lint stage degraded: {}", note)
                );
            }
            output::print_lint(&files, &eff.output);
            if run.status == Status::Failed {
                std::process::exit(1);
            }
        }
        Commands::Test { repo_root } => {
            let eff = config::resolve_effective(repo_root.as_deref(), None, None);
            // Friendly note if no pygate config was found
            if config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    crate::utils::note_prefix(),
                    "No pygate.toml found; using defaults."
                );
            }
            // Test runner streams are inherited; only degradations need a line here
            let run = runner::run_tests(&eff);
            if let Some(note) = &run.note {
                eprintln!(
                    "{} {}",
                    crate::utils::note_prefix(),
                    format!("tests stage degraded: {}", note)
                );
            }
            if run.status == Status::Failed {
                std::process::exit(1);
            }
        }
        Commands::Report {
            repo_root,
            path,
            output,
            source,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                output.as_deref(),
                source.as_deref(),
            );
            let input = match path.as_deref() {
                Some(path) if path != "-" => match std::fs::read_to_string(path) {
                    Ok(s) => s,
                    Err(e) => {
                        eprintln!(
                            "{} {}",
                            crate::utils::error_prefix(),
                            format!("cannot read {}: {}", path, e)
                        );
                        std::process::exit(2);
                    }
                },
                _ => {
                    let mut s = String::new();
                    if let Err(e) = std::io::stdin().read_to_string(&mut s) {
                        eprintln!(
                            "{} {}",
                            crate::utils::error_prefix(),
                            format!("cannot read stdin: {}", e)
                        );
                        std::process::exit(2);
                    }
                    s
                }
            };
            let raw = match report::parse_raw_report(&input) {
                Ok(raw) => raw,
                Err(e) => {
                    eprintln!(
                        "{} {}",
                        crate::utils::error_prefix(),
                        format!("invalid raw report: {}", e)
                    );
                    std::process::exit(2);
                }
            };
            let files = report::format_report(&raw, &eff.source);
            output::print_report(&files, &eff.output);
            if files.iter().any(|f| f.status == Status::Failed) {
                std::process::exit(1);
            }
        }
    }
}
