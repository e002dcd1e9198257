//! Shared data models for lint reports and gate runs.
//!
//! The report shapes mirror the lint tool's machine-readable output on the
//! input side (`RawDiagnostic`) and the normalized report contract on the
//! output side (`Diagnostic`, `FileReport`). Serialized key order follows
//! struct declaration order, so the JSON shape is stable across runs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
/// One raw diagnostic record as emitted by the external lint tool.
///
/// Extra fields in the input (flake8 also reports `filename` and
/// `physical_line`) are ignored during deserialization.
pub struct RawDiagnostic {
    pub code: String,
    pub text: String,
    pub line_number: u32,
    pub column_number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A normalized diagnostic: location, message, rule name, and the tool
/// that produced it.
pub struct Diagnostic {
    pub line: u32,
    pub column: u32,
    pub message: String,
    pub name: String,
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Pass/fail classification used for files, tool runs, and the gate.
pub enum Status {
    Passed,
    Failed,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Passed => "passed",
            Status::Failed => "failed",
        }
    }

    /// `Failed` when the flag holds, `Passed` otherwise.
    pub fn from_failed(failed: bool) -> Self {
        if failed {
            Status::Failed
        } else {
            Status::Passed
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Normalized per-file report entry.
///
/// Invariant: `status == Failed` exactly when `errors` is non-empty.
pub struct FileReport {
    pub path: String,
    pub status: Status,
    pub errors: Vec<Diagnostic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Aggregated report summary used by printers.
pub struct Summary {
    pub files: usize,
    pub passed: usize,
    pub failed: usize,
    pub diagnostics: usize,
}

impl Summary {
    /// Count files, statuses, and diagnostics across a report.
    pub fn of(report: &[FileReport]) -> Self {
        let failed = report
            .iter()
            .filter(|f| f.status == Status::Failed)
            .count();
        Summary {
            files: report.len(),
            passed: report.len() - failed,
            failed,
            diagnostics: report.iter().map(|f| f.errors.len()).sum(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
/// Outcome of one external tool invocation.
pub struct ToolRun {
    pub name: String,
    pub command: String,
    pub status: Status,
    pub exit_code: Option<i32>,
    /// Invocation-failure detail (tool missing, unparsable output).
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
/// Combined lint + test run produced by `pygate check`.
pub struct GateResult {
    pub lint: ToolRun,
    pub tests: ToolRun,
    pub report: Vec<FileReport>,
    pub summary: Summary,
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_as_str_and_from_failed() {
        assert_eq!(Status::Passed.as_str(), "passed");
        assert_eq!(Status::Failed.as_str(), "failed");
        assert_eq!(Status::from_failed(true), Status::Failed);
        assert_eq!(Status::from_failed(false), Status::Passed);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Passed).unwrap(), "\"passed\"");
        assert_eq!(serde_json::to_string(&Status::Failed).unwrap(), "\"failed\"");
    }

    #[test]
    fn test_file_report_key_order_and_names() {
        let fr = FileReport {
            path: "./a.py".into(),
            status: Status::Failed,
            errors: vec![Diagnostic {
                line: 18,
                column: 80,
                message: "line too long (99 > 79 characters)".into(),
                name: "E501".into(),
                source: "flake8".into(),
            }],
        };
        let json = serde_json::to_value(&fr).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["path", "status", "errors"]);
        let err_keys: Vec<&String> = json["errors"][0].as_object().unwrap().keys().collect();
        assert_eq!(err_keys, ["line", "column", "message", "name", "source"]);
    }

    #[test]
    fn test_raw_diagnostic_ignores_extra_fields() {
        let raw: RawDiagnostic = serde_json::from_str(
            r#"{
                "code": "E501",
                "filename": "./a.py",
                "line_number": 18,
                "column_number": 80,
                "text": "line too long (99 > 79 characters)",
                "physical_line": "x = 1"
            }"#,
        )
        .unwrap();
        assert_eq!(raw.code, "E501");
        assert_eq!(raw.line_number, 18);
    }

    #[test]
    fn test_summary_counts() {
        let report = vec![
            FileReport {
                path: "./ok.py".into(),
                status: Status::Passed,
                errors: vec![],
            },
            FileReport {
                path: "./bad.py".into(),
                status: Status::Failed,
                errors: vec![
                    Diagnostic {
                        line: 1,
                        column: 1,
                        message: "m".into(),
                        name: "E1".into(),
                        source: "flake8".into(),
                    },
                    Diagnostic {
                        line: 2,
                        column: 1,
                        message: "m".into(),
                        name: "E2".into(),
                        source: "flake8".into(),
                    },
                ],
            },
        ];
        let s = Summary::of(&report);
        assert_eq!(s.files, 2);
        assert_eq!(s.passed, 1);
        assert_eq!(s.failed, 1);
        assert_eq!(s.diagnostics, 2);
    }
}
