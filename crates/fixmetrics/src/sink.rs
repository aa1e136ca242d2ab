//! Output sinks — the JSON raw-record artifact and the text metrics
//! report.
//!
//! Relative paths resolve against the process working directory. Every
//! failure here is fatal to the run: the artifact for the failed step is
//! left untouched or from a previous run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RunError, RunResult};
use crate::parser::model::RawRecord;

/// Resolve a configured path against the working directory.
pub fn resolve(path: &Path) -> RunResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let dir = std::env::current_dir().map_err(RunError::WorkingDir)?;
    Ok(dir.join(path))
}

/// Write the raw-record artifact as pretty-printed JSON, replacing any
/// prior artifact at the same location.
pub fn write_raw_records(path: &Path, records: &[RawRecord]) -> RunResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    let target = resolve(path)?;
    fs::write(&target, json).map_err(|source| RunError::WriteOutput {
        path: target,
        source,
    })
}

/// Write the plain-text metrics report, replacing any prior report.
pub fn write_report(path: &Path, report: &str) -> RunResult<()> {
    let target = resolve(path)?;
    fs::write(&target, report).map_err(|source| RunError::WriteOutput {
        path: target,
        source,
    })
}
