/// FIX log line parsing.
///
/// Converts raw log lines into structured records along two independent
/// paths:
///
/// - the capture path (`extract::raw_record`): space-delimited tokens,
///   feeds the JSON raw-record artifact
/// - the correlation path (`extract::timed_event`): SOH-delimited
///   tag=value tokens plus a fixed-width timestamp prefix, feeds the
///   correlation engine
///
/// # Architecture
///
/// - `tokenize.rs`: the two split regimes and tag=value pairing
/// - `extract.rs`: tag maps and the record builders
/// - `model.rs`: record types, message kinds, per-line parse errors

pub mod tokenize;
pub mod extract;
pub mod model;

// Re-export commonly used types
pub use model::{LatencySample, MsgKind, ParseError, RawRecord, TimedEvent};

// Protocol constants
pub const SOH: char = '\x01';
pub const TAG_MSG_TYPE: &str = "35";
pub const TAG_CL_ORD_ID: &str = "11";
pub const MSG_TYPE_SUBMISSION: &str = "D";
pub const MSG_TYPE_COMPLETION: &str = "8";

/// Byte width of the fixed timestamp prefix on every parseable line.
pub const TIMESTAMP_WIDTH: usize = 26;
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";
