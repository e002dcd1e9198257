//! Report normalization from raw lint output to the per-file contract.
//!
//! The external lint tool emits a JSON object mapping file paths to lists
//! of raw diagnostic records. Normalization renames fields, stamps the
//! producing tool, and derives a pass/fail status per file. Input order is
//! preserved end to end, both across files and within each file's list.

use crate::models::{Diagnostic, FileReport, RawDiagnostic, Status};

/// Tool label stamped on normalized diagnostics unless overridden.
pub const DEFAULT_SOURCE: &str = "flake8";

/// Raw report shape: file paths with their diagnostic records, in input order.
pub type RawReport = Vec<(String, Vec<RawDiagnostic>)>;

/// Normalize one raw diagnostic record.
///
/// Field mapping: `line_number` -> `line`, `column_number` -> `column`,
/// `text` -> `message`, `code` -> `name`. `source` names the producing tool.
pub fn normalize_diagnostic(raw: &RawDiagnostic, source: &str) -> Diagnostic {
    Diagnostic {
        line: raw.line_number,
        column: raw.column_number,
        message: raw.text.clone(),
        name: raw.code.clone(),
        source: source.to_string(),
    }
}

/// Build the report entry for a single file.
///
/// Status is `failed` exactly when the file has diagnostics. Diagnostics
/// keep the order they were reported in.
pub fn format_file_report(path: &str, raws: &[RawDiagnostic], source: &str) -> FileReport {
    let errors: Vec<Diagnostic> = raws
        .iter()
        .map(|r| normalize_diagnostic(r, source))
        .collect();
    FileReport {
        path: path.to_string(),
        status: Status::from_failed(!errors.is_empty()),
        errors,
    }
}

/// Normalize a full raw report, one entry per file in input order.
pub fn format_report(raw: &[(String, Vec<RawDiagnostic>)], source: &str) -> Vec<FileReport> {
    raw.iter()
        .map(|(path, diags)| format_file_report(path, diags, source))
        .collect()
}

/// Parse the lint tool's stdout into a JSON object keyed by file path.
///
/// Fails when the payload is not valid JSON or the top level is not an
/// object. Entries keep document order.
pub fn parse_report_object(
    input: &str,
) -> Result<serde_json::Map<String, serde_json::Value>, serde_json::Error> {
    serde_json::from_str(input)
}

/// Decode each file's diagnostic records out of a parsed report object.
///
/// A record missing a required field fails the whole decode rather than
/// being silently dropped.
pub fn collect_raw_records(
    map: serde_json::Map<String, serde_json::Value>,
) -> Result<RawReport, serde_json::Error> {
    let mut raw: RawReport = Vec::with_capacity(map.len());
    for (path, records) in map {
        let diags: Vec<RawDiagnostic> = serde_json::from_value(records)?;
        raw.push((path, diags));
    }
    Ok(raw)
}

/// Parse the lint tool's JSON stdout into a raw report in one step.
pub fn parse_raw_report(input: &str) -> Result<RawReport, serde_json::Error> {
    collect_raw_records(parse_report_object(input)?)
}
