use std::path::PathBuf;

use thiserror::Error;

/// Fatal run-level failures. Per-line parse failures never reach this
/// enum; they are isolated inside the correlation engine.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to resolve working directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    #[error("failed to open log file {}: {source}", .path.display())]
    OpenLog {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read log file {}: {source}", .path.display())]
    ReadLog {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write output file {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize raw records: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

// Convenience type alias
pub type RunResult<T> = Result<T, RunError>;
