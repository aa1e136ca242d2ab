use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

use super::{MSG_TYPE_COMPLETION, MSG_TYPE_SUBMISSION};

/// Classification of a message on the correlation path (tag 35).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsgKind {
    /// New order request (`35=D`).
    Submission,
    /// Execution report / order acknowledgment (`35=8`).
    Completion,
    /// Any other message type; ignored by the correlation engine.
    Other,
}

impl MsgKind {
    pub fn from_tag_value(value: &str) -> Self {
        match value {
            MSG_TYPE_SUBMISSION => MsgKind::Submission,
            MSG_TYPE_COMPLETION => MsgKind::Completion,
            _ => MsgKind::Other,
        }
    }
}

/// One qualifying log line on the capture path, as persisted to the
/// JSON artifact. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct RawRecord {
    pub message_type: String,
    /// Second space-delimited token of the line, verbatim (not re-parsed).
    pub timestamp: String,
    pub fields: HashMap<String, String>,
}

/// One message on the correlation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedEvent {
    pub timestamp: NaiveDateTime,
    pub kind: MsgKind,
    /// ClOrdID (tag 11); empty when the tag is absent.
    pub correlation_id: String,
}

/// Round-trip time between a Submission and its matched Completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencySample {
    pub correlation_id: String,
    /// Signed whole milliseconds; negative when the log's timestamps
    /// are non-monotonic for the pair (not clamped).
    pub duration_ms: i64,
}

/// Per-line failure on the correlation path. Never fatal to a run: the
/// caller skips the line and continues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("line too short for {1}-byte timestamp prefix ({0} bytes)")]
    TruncatedTimestamp(usize, usize),

    #[error("invalid timestamp prefix {0:?}: {1}")]
    BadTimestamp(String, chrono::format::ParseError),
}
