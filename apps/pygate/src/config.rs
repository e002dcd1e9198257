//! Configuration discovery and effective settings resolution.
//!
//! Pygate reads `pygate.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `output`: `human`
//! - `lint.command`: `flake8` with args `--format=json .`
//! - `lint.source`: `flake8`
//! - `test.command`: `pytest` with no args
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::report::DEFAULT_SOURCE;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Lint tool configuration section under `[lint]`.
pub struct LintCfg {
    pub command: Option<String>,
    pub args: Option<Vec<String>>,
    /// Label stamped on normalized diagnostics (`source` field).
    pub source: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Test runner configuration section under `[test]`.
pub struct TestCfg {
    pub command: Option<String>,
    pub args: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `pygate.toml|yaml`.
pub struct PygateConfig {
    pub output: Option<String>,
    pub lint: Option<LintCfg>,
    pub test: Option<TestCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub output: String,
    pub source: String,
    pub lint_command: String,
    pub lint_args: Vec<String>,
    pub test_command: String,
    pub test_args: Vec<String>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `pygate.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    // Walk up to find config or .git; else return start
    let mut cur = start;
    loop {
        if cur.join("pygate.toml").exists()
            || cur.join("pygate.yaml").exists()
            || cur.join("pygate.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `PygateConfig` from `pygate.toml` or `pygate.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<PygateConfig> {
    let toml_path = root.join("pygate.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: PygateConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["pygate.yaml", "pygate.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: PygateConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_source: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let source = cli_source
        .map(|s| s.to_string())
        .or_else(|| cfg.lint.as_ref().and_then(|l| l.source.clone()))
        .unwrap_or_else(|| DEFAULT_SOURCE.to_string());

    let lint_command = cfg
        .lint
        .as_ref()
        .and_then(|l| l.command.clone())
        .unwrap_or_else(|| "flake8".to_string());
    let lint_args = cfg
        .lint
        .as_ref()
        .and_then(|l| l.args.clone())
        .unwrap_or_else(|| vec!["--format=json".to_string(), ".".to_string()]);

    let test_command = cfg
        .test
        .as_ref()
        .and_then(|t| t.command.clone())
        .unwrap_or_else(|| "pytest".to_string());
    let test_args = cfg
        .test
        .as_ref()
        .and_then(|t| t.args.clone())
        .unwrap_or_default();

    Effective {
        repo_root,
        output,
        source,
        lint_command,
        lint_args,
        test_command,
        test_args,
    }
}
