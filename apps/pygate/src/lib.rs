//! Pygate core library.
//!
//! This crate exposes programmatic APIs for running an external lint tool
//! and test runner, normalizing the lint report into per-file pass/fail
//! entries, and combining both stages into a CI gate.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `models`: Data models for diagnostics, reports, and tool runs.
//! - `report`: Raw report parsing and normalization.
//! - `runner`: Lint/test subprocess invocation and the combined gate.
//! - `output`: Human/JSON printers for report/lint/check.
//! - `stats`: Numeric helpers for summary lines.
//! - `utils`: Supporting helpers.
//!
//! Note: All documentation comments are written in English by convention.
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod report;
pub mod runner;
pub mod stats;
pub mod utils;
