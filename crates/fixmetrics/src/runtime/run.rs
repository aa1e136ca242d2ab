//! Run — the end-to-end pipeline: capture pass, correlation pass, both
//! sinks.
//!
//! The two passes scan the log independently and use different
//! qualification rules (see `capture`); they are not required to agree
//! on which lines count as messages. Each pass is itself a single
//! forward scan.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use tracing::info;

use crate::capture;
use crate::conf::Config;
use crate::engine::CorrelationEngine;
use crate::error::{RunError, RunResult};
use crate::report;
use crate::sink;

/// Execute one full pipeline run: select raw records, correlate
/// latencies and throughput, and write both artifacts.
pub fn execute(config: &Config) -> RunResult<()> {
    let log_path = sink::resolve(&config.log_file)?;

    // Pass 1: capture raw records for the JSON artifact.
    let mut records = Vec::new();
    for line in open_lines(&log_path)? {
        let line = read_line(line, &log_path)?;
        if let Some(record) = capture::capture_line(&line) {
            records.push(record);
        }
    }
    sink::write_raw_records(&config.raw_output, &records)?;
    info!(
        "Captured {} raw records to {}",
        records.len(),
        config.raw_output.display()
    );

    // Pass 2: correlation and metrics.
    let mut engine = CorrelationEngine::new();
    for line in open_lines(&log_path)? {
        let line = read_line(line, &log_path)?;
        engine.observe_line(&line);
    }
    let output = engine.finish();
    info!(
        "Correlated {} latency samples across {} throughput buckets ({} lines skipped)",
        output.samples.len(),
        output.throughput.len(),
        output.skipped_lines
    );

    sink::write_report(&config.metrics_output, &report::render(&output))?;
    info!("Metrics report written to {}", config.metrics_output.display());

    Ok(())
}

fn open_lines(path: &Path) -> RunResult<Lines<BufReader<File>>> {
    let file = File::open(path).map_err(|source| RunError::OpenLog {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file).lines())
}

fn read_line(line: std::io::Result<String>, path: &Path) -> RunResult<String> {
    line.map_err(|source| RunError::ReadLog {
        path: path.to_path_buf(),
        source,
    })
}
