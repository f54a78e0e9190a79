//! Run-report artifact: write/read/verify a digested search report.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   search_report.json   — the rendered report
//!   report_digest.txt    — ASCII digest string ("sha256:...") over the
//!                          report's serialized bytes
//! ```
//!
//! The directory path is never part of the digest surface. Reads are
//! fail-closed: a missing file or a digest mismatch is an error.

use std::fmt::Display;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::runner::RunSummary;
use wayfind_core::pathfinder::SearchStatus;

/// Report filename inside the artifact directory.
pub const REPORT_FILENAME: &str = "search_report.json";
/// Digest filename inside the artifact directory.
pub const DIGEST_FILENAME: &str = "report_digest.txt";

/// Schema tag embedded in every report.
pub const REPORT_SCHEMA_VERSION: &str = "wayfind-report/1";

/// Error writing a report directory.
#[derive(Debug)]
pub enum ReportWriteError {
    /// I/O error during write.
    Io { detail: String },
    /// Report serialization failed.
    Json { detail: String },
}

impl std::fmt::Display for ReportWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::Json { detail } => write!(f, "JSON error: {detail}"),
        }
    }
}

impl std::error::Error for ReportWriteError {}

/// Error reading a report directory.
#[derive(Debug)]
pub enum ReportReadError {
    /// I/O error during read.
    Io { detail: String },
    /// A required file is missing from the directory.
    MissingFile { filename: &'static str },
    /// `search_report.json` is not valid JSON.
    Json { detail: String },
    /// `report_digest.txt` does not match the recomputed digest.
    DigestMismatch { stored: String, recomputed: String },
}

impl std::fmt::Display for ReportReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::MissingFile { filename } => write!(f, "missing file: {filename}"),
            Self::Json { detail } => write!(f, "JSON error: {detail}"),
            Self::DigestMismatch { stored, recomputed } => {
                write!(f, "digest mismatch: stored {stored}, recomputed {recomputed}")
            }
        }
    }
}

impl std::error::Error for ReportReadError {}

/// Render a run summary as a JSON report.
///
/// Values are rendered through `Display`; serde_json keeps object keys
/// sorted, so the serialized bytes (and hence the digest) are deterministic
/// for a given summary.
#[must_use]
pub fn render_report<V: Display>(
    world_id: &str,
    start: &V,
    target: &V,
    summary: &RunSummary<V>,
) -> serde_json::Value {
    serde_json::json!({
        "schema_version": REPORT_SCHEMA_VERSION,
        "world_id": world_id,
        "start": start.to_string(),
        "target": target.to_string(),
        "status": status_label(summary.status),
        "ticks": summary.ticks,
        "examined_node_count": summary.examined_node_count,
        "path": summary.path.iter().map(ToString::to_string).collect::<Vec<String>>(),
        "path_cost": summary.path_cost,
    })
}

fn status_label(status: SearchStatus) -> &'static str {
    match status {
        SearchStatus::Running => "running",
        SearchStatus::PathFound => "path_found",
        SearchStatus::NoPath => "no_path",
    }
}

/// Compute the content digest string for serialized report bytes.
#[must_use]
pub fn report_digest(bytes: &[u8]) -> String {
    format!("sha256:{}", hex::encode(Sha256::digest(bytes)))
}

/// Write `search_report.json` and `report_digest.txt` into `dir`, creating
/// the directory if needed. Returns the digest string.
///
/// # Errors
///
/// Returns [`ReportWriteError`] on serialization or I/O failure.
pub fn write_report(dir: &Path, report: &serde_json::Value) -> Result<String, ReportWriteError> {
    let bytes = serde_json::to_vec(report).map_err(|e| ReportWriteError::Json {
        detail: e.to_string(),
    })?;
    let digest = report_digest(&bytes);

    fs::create_dir_all(dir).map_err(|e| ReportWriteError::Io {
        detail: e.to_string(),
    })?;
    fs::write(dir.join(REPORT_FILENAME), &bytes).map_err(|e| ReportWriteError::Io {
        detail: e.to_string(),
    })?;
    fs::write(dir.join(DIGEST_FILENAME), digest.as_bytes()).map_err(|e| {
        ReportWriteError::Io {
            detail: e.to_string(),
        }
    })?;

    Ok(digest)
}

/// Read a report directory back, verifying the stored digest against the
/// report bytes before parsing.
///
/// # Errors
///
/// Returns [`ReportReadError`] if either file is missing, the digest does
/// not match, or the report is not valid JSON.
pub fn read_report(dir: &Path) -> Result<serde_json::Value, ReportReadError> {
    let bytes = read_file(dir, REPORT_FILENAME)?;
    let stored = String::from_utf8_lossy(&read_file(dir, DIGEST_FILENAME)?)
        .trim()
        .to_string();

    let recomputed = report_digest(&bytes);
    if stored != recomputed {
        return Err(ReportReadError::DigestMismatch { stored, recomputed });
    }

    serde_json::from_slice(&bytes).map_err(|e| ReportReadError::Json {
        detail: e.to_string(),
    })
}

fn read_file(dir: &Path, filename: &'static str) -> Result<Vec<u8>, ReportReadError> {
    let path = dir.join(filename);
    match fs::read(&path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ReportReadError::MissingFile { filename })
        }
        Err(e) => Err(ReportReadError::Io {
            detail: e.to_string(),
        }),
    }
}
