//! Raw-record capture path.
//!
//! Selection is a coarse substring test for the Submission/Completion
//! marker text, deliberately independent of the correlation path's
//! tag-aware classification: a value that merely contains the marker
//! text also qualifies, and the two paths are not required to agree on
//! which lines count as messages. Both predicates are kept separate and
//! separately testable.

use std::sync::LazyLock;

use crate::parser::extract::raw_record;
use crate::parser::model::RawRecord;
use crate::parser::{MSG_TYPE_COMPLETION, MSG_TYPE_SUBMISSION, TAG_MSG_TYPE};

// Marker text built from the same protocol constants the correlation
// path classifies on, so the two paths cannot drift apart.
static SUBMISSION_MARKER: LazyLock<String> =
    LazyLock::new(|| format!("{TAG_MSG_TYPE}={MSG_TYPE_SUBMISSION}"));
static COMPLETION_MARKER: LazyLock<String> =
    LazyLock::new(|| format!("{TAG_MSG_TYPE}={MSG_TYPE_COMPLETION}"));

/// Coarse qualification test for the capture path.
pub fn qualifies(line: &str) -> bool {
    line.contains(SUBMISSION_MARKER.as_str()) || line.contains(COMPLETION_MARKER.as_str())
}

/// Capture one line: a [`RawRecord`] when the line qualifies.
pub fn capture_line(line: &str) -> Option<RawRecord> {
    qualifies(line).then(|| raw_record(line))
}
