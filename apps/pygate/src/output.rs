//! Output rendering for the report, lint, and check commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON forms are
//! composed by pure functions so shapes stay testable; the bare report
//! array is the stable machine contract.

use crate::models::{FileReport, GateResult, Status, Summary, ToolRun};
use crate::stats;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn status_tag(status: Status, color: bool) -> String {
    match status {
        Status::Passed => {
            if color {
                "⟦passed⟧".green().bold().to_string()
            } else {
                "⟦passed⟧".to_string()
            }
        }
        Status::Failed => {
            if color {
                "⟦failed⟧".red().bold().to_string()
            } else {
                "⟦failed⟧".to_string()
            }
        }
    }
}

fn status_icon(status: Status, color: bool) -> String {
    match status {
        Status::Passed => {
            if color {
                "✔".green().to_string()
            } else {
                "✔".to_string()
            }
        }
        Status::Failed => {
            if color {
                "✖".red().to_string()
            } else {
                "✖".to_string()
            }
        }
    }
}

fn print_human_report(files: &[FileReport], color: bool) {
    for fr in files {
        let path = if color {
            fr.path.clone().bold().to_string()
        } else {
            fr.path.clone()
        };
        println!(
            "{} {} {}",
            status_icon(fr.status, color),
            status_tag(fr.status, color),
            path
        );
        for e in &fr.errors {
            println!("    {}:{} ❲{}❳ — {}", e.line, e.column, e.name, e.message);
        }
    }
    let summary = Summary::of(files);
    let counts: Vec<usize> = files.iter().map(|f| f.errors.len()).collect();
    let mut line = format!(
        "— Summary — files={} passed={} failed={} errors={}",
        summary.files, summary.passed, summary.failed, summary.diagnostics
    );
    if let Some(avg) = stats::mean(&counts) {
        line.push_str(&format!(" avg={:.1}", avg));
    }
    if color {
        println!("{}", line.bold());
    } else {
        println!("{}", line);
    }
}

fn print_human_stage(run: &ToolRun, color: bool) {
    let exit = match run.exit_code {
        Some(code) => format!(" (exit={})", code),
        None => String::new(),
    };
    println!(
        "{} {} {} stage{}",
        status_icon(run.status, color),
        status_tag(run.status, color),
        run.name,
        exit
    );
}

/// Print a normalized report in the requested format.
pub fn print_report(files: &[FileReport], output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_report_json(files)).unwrap()
        ),
        _ => print_human_report(files, use_colors(output)),
    }
}

/// Print a lint run in the requested format.
pub fn print_lint(files: &[FileReport], output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_lint_json(files)).unwrap()
        ),
        _ => print_human_report(files, use_colors(output)),
    }
}

/// Print a combined gate run in the requested format.
pub fn print_gate(gate: &GateResult, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_gate_json(gate)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            print_human_report(&gate.report, color);
            print_human_stage(&gate.lint, color);
            print_human_stage(&gate.tests, color);
            let line = format!("— Gate — status={}", gate.status.as_str());
            if color {
                println!("{}", line.bold());
            } else {
                println!("{}", line);
            }
        }
    }
}

/// Compose the bare report array (pure) for testing/snapshot purposes.
pub fn compose_report_json(files: &[FileReport]) -> JsonVal {
    // Directly serialize the report, keeping stable shape
    serde_json::to_value(files).unwrap()
}

/// Compose lint JSON with the report and a summary (pure).
pub fn compose_lint_json(files: &[FileReport]) -> JsonVal {
    json!({
        "report": files,
        "summary": Summary::of(files),
    })
}

/// Compose gate JSON covering both stages (pure).
pub fn compose_gate_json(gate: &GateResult) -> JsonVal {
    serde_json::to_value(gate).unwrap()
}
