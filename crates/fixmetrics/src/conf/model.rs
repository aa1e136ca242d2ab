//! Configuration model.

use std::path::PathBuf;

use serde::Deserialize;

/// Paths for one pipeline run. Relative paths resolve against the
/// process working directory at run time.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Input FIX message log.
    pub log_file: PathBuf,
    /// JSON artifact listing the captured raw records.
    pub raw_output: PathBuf,
    /// Plain-text metrics report.
    pub metrics_output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("tmp/FIX.4.4-CUST2_Order-ANCHORAGE.messages.current.log"),
            raw_output: PathBuf::from("tmp/log_data.json"),
            metrics_output: PathBuf::from("tmp/log_metrics.txt"),
        }
    }
}
