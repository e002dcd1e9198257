//! External tool invocation for the lint and test stages.
//!
//! The lint tool's stdout is captured and normalized into the per-file
//! report; its stderr flows through to the console. The test runner keeps
//! all streams inherited and its exit status is the result. A tool that
//! cannot be started, or whose output is not a JSON report, degrades to an
//! empty report with a note instead of aborting the run. Malformed records
//! inside an otherwise valid report propagate as errors.

use crate::config::Effective;
use crate::models::{FileReport, GateResult, Status, Summary, ToolRun};
use crate::report;
use std::process::{Command, Stdio};

fn command_line(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Run the configured lint tool and normalize its report.
///
/// The tool's exit code is recorded but never interpreted; pass/fail is
/// derived from the report contents alone, since lint tools exit non-zero
/// whenever they have findings.
pub fn run_lint(eff: &Effective) -> Result<(ToolRun, Vec<FileReport>), serde_json::Error> {
    let cmdline = command_line(&eff.lint_command, &eff.lint_args);
    let out = Command::new(&eff.lint_command)
        .args(&eff.lint_args)
        .current_dir(&eff.repo_root)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output();

    let (exit_code, stdout, spawn_note) = match out {
        Ok(out) => (
            out.status.code(),
            String::from_utf8_lossy(&out.stdout).to_string(),
            None,
        ),
        Err(err) => (None, String::new(), Some(format!("failed to start command: {err}"))),
    };

    if let Some(note) = spawn_note {
        let run = ToolRun {
            name: "lint".to_string(),
            command: cmdline,
            status: Status::Passed,
            exit_code,
            note: Some(note),
        };
        return Ok((run, Vec::new()));
    }

    // No stdout at all means no findings, not a broken report
    if stdout.trim().is_empty() {
        let run = ToolRun {
            name: "lint".to_string(),
            command: cmdline,
            status: Status::Passed,
            exit_code,
            note: None,
        };
        return Ok((run, Vec::new()));
    }

    let obj = match report::parse_report_object(&stdout) {
        Ok(obj) => obj,
        Err(err) => {
            let run = ToolRun {
                name: "lint".to_string(),
                command: cmdline,
                status: Status::Passed,
                exit_code,
                note: Some(format!("lint output is not a JSON report: {err}")),
            };
            return Ok((run, Vec::new()));
        }
    };
    let raw = report::collect_raw_records(obj)?;
    let files = report::format_report(&raw, &eff.source);

    let failed = files.iter().any(|f| f.status == Status::Failed);
    let run = ToolRun {
        name: "lint".to_string(),
        command: cmdline,
        status: Status::from_failed(failed),
        exit_code,
        note: None,
    };
    Ok((run, files))
}

/// Run the configured test command with inherited streams.
///
/// The exit status is the result: success means passed. A runner that
/// cannot be started degrades to a vacuous pass with a note.
pub fn run_tests(eff: &Effective) -> ToolRun {
    let cmdline = command_line(&eff.test_command, &eff.test_args);
    let status = Command::new(&eff.test_command)
        .args(&eff.test_args)
        .current_dir(&eff.repo_root)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status();

    match status {
        Ok(status) => ToolRun {
            name: "tests".to_string(),
            command: cmdline,
            status: Status::from_failed(!status.success()),
            exit_code: status.code(),
            note: None,
        },
        Err(err) => ToolRun {
            name: "tests".to_string(),
            command: cmdline,
            status: Status::Passed,
            exit_code: None,
            note: Some(format!("failed to start command: {err}")),
        },
    }
}

/// Run the lint stage then the test stage and combine them.
///
/// Both stages always run; the gate fails when either stage fails.
pub fn run_gate(eff: &Effective) -> Result<GateResult, serde_json::Error> {
    let (lint, files) = run_lint(eff)?;
    let tests = run_tests(eff);
    let failed = lint.status == Status::Failed || tests.status == Status::Failed;
    let summary = Summary::of(&files);
    Ok(GateResult {
        lint,
        tests,
        report: files,
        summary,
        status: Status::from_failed(failed),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn eff_with(dir: &std::path::Path, lint: (&str, &[&str]), test: (&str, &[&str])) -> Effective {
        Effective {
            repo_root: dir.to_path_buf(),
            output: "human".to_string(),
            source: "flake8".to_string(),
            lint_command: lint.0.to_string(),
            lint_args: lint.1.iter().map(|s| s.to_string()).collect(),
            test_command: test.0.to_string(),
            test_args: test.1.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_run_lint_normalizes_tool_output() {
        let dir = tempdir().unwrap();
        let script = r#"printf '{"a.py": [], "b.py": [{"code": "E501", "text": "line too long (99 > 79 characters)", "line_number": 18, "column_number": 80}]}'"#;
        let eff = eff_with(dir.path(), ("sh", &["-c", script]), ("true", &[]));
        let (run, files) = run_lint(&eff).unwrap();
        assert_eq!(run.status, Status::Failed);
        assert!(run.note.is_none());
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, "a.py");
        assert_eq!(files[0].status, Status::Passed);
        assert_eq!(files[1].status, Status::Failed);
        assert_eq!(files[1].errors[0].name, "E501");
        assert_eq!(files[1].errors[0].source, "flake8");
    }

    #[test]
    fn test_run_lint_missing_tool_degrades_to_empty_report() {
        let dir = tempdir().unwrap();
        let eff = eff_with(
            dir.path(),
            ("pygate-no-such-lint-tool", &[]),
            ("true", &[]),
        );
        let (run, files) = run_lint(&eff).unwrap();
        assert_eq!(run.status, Status::Passed);
        assert!(files.is_empty());
        assert!(run.note.unwrap().contains("failed to start"));
    }

    #[test]
    fn test_run_lint_empty_output_is_empty_report() {
        let dir = tempdir().unwrap();
        let eff = eff_with(dir.path(), ("true", &[]), ("true", &[]));
        let (run, files) = run_lint(&eff).unwrap();
        assert_eq!(run.status, Status::Passed);
        assert!(files.is_empty());
        assert!(run.note.is_none());
    }

    #[test]
    fn test_run_lint_non_json_output_degrades_to_empty_report() {
        let dir = tempdir().unwrap();
        let eff = eff_with(
            dir.path(),
            ("sh", &["-c", "printf 'Traceback: boom'"]),
            ("true", &[]),
        );
        let (run, files) = run_lint(&eff).unwrap();
        assert_eq!(run.status, Status::Passed);
        assert!(files.is_empty());
        assert!(run.note.unwrap().contains("not a JSON report"));
    }

    #[test]
    fn test_run_lint_malformed_record_propagates() {
        let dir = tempdir().unwrap();
        let script = r#"printf '{"a.py": [{"code": "E501"}]}'"#;
        let eff = eff_with(dir.path(), ("sh", &["-c", script]), ("true", &[]));
        let err = run_lint(&eff).unwrap_err();
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_run_tests_exit_status_is_the_result() {
        let dir = tempdir().unwrap();
        let pass = run_tests(&eff_with(dir.path(), ("true", &[]), ("true", &[])));
        assert_eq!(pass.status, Status::Passed);
        assert_eq!(pass.exit_code, Some(0));

        let fail = run_tests(&eff_with(dir.path(), ("true", &[]), ("false", &[])));
        assert_eq!(fail.status, Status::Failed);
        assert_eq!(fail.exit_code, Some(1));
    }

    #[test]
    fn test_run_tests_missing_runner_degrades_with_note() {
        let dir = tempdir().unwrap();
        let run = run_tests(&eff_with(
            dir.path(),
            ("true", &[]),
            ("pygate-no-such-test-runner", &[]),
        ));
        assert_eq!(run.status, Status::Passed);
        assert!(run.note.unwrap().contains("failed to start"));
    }

    #[test]
    fn test_run_gate_fails_when_either_stage_fails() {
        let dir = tempdir().unwrap();
        let clean = &["-c", "printf '{}'"][..];

        let gate = run_gate(&eff_with(dir.path(), ("sh", clean), ("true", &[]))).unwrap();
        assert_eq!(gate.status, Status::Passed);
        assert_eq!(gate.summary.files, 0);

        let gate = run_gate(&eff_with(dir.path(), ("sh", clean), ("false", &[]))).unwrap();
        assert_eq!(gate.status, Status::Failed);
        assert_eq!(gate.lint.status, Status::Passed);
        assert_eq!(gate.tests.status, Status::Failed);

        let dirty = &[
            "-c",
            r#"printf '{"a.py": [{"code": "W292", "text": "no newline at end of file", "line_number": 18, "column_number": 100}]}'"#,
        ][..];
        let gate = run_gate(&eff_with(dir.path(), ("sh", dirty), ("true", &[]))).unwrap();
        assert_eq!(gate.status, Status::Failed);
        assert_eq!(gate.summary.failed, 1);
        assert_eq!(gate.tests.status, Status::Passed);
    }
}
