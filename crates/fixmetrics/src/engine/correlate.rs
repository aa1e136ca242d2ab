//! Single-pass order correlation.
//!
//! One engine instance owns all of its state (pending table, consumed
//! ids, samples, throughput buckets) and serves exactly one scan of one
//! log; nothing is shared across runs. Feed raw lines with
//! [`CorrelationEngine::observe_line`], then take the results with
//! [`CorrelationEngine::finish`].

use std::collections::{HashMap, HashSet};

use chrono::{NaiveDateTime, Timelike};
use tracing::warn;

use crate::parser::extract::timed_event;
use crate::parser::model::{LatencySample, MsgKind, TimedEvent};

/// Outcome of matching a Completion against the pending table.
///
/// The two miss variants have identical end-to-end behavior (no sample
/// emitted, no diagnostic); they are distinguished so callers and tests
/// can assert on the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// An open Submission existed; a sample was recorded and the
    /// pending entry consumed.
    Matched(LatencySample),
    /// No open Submission was ever observed for this id.
    NoPriorSubmission,
    /// The Submission for this id was already consumed by an earlier
    /// Completion.
    AlreadyConsumed,
}

/// Results of one full pass, handed read-only to the aggregator.
#[derive(Debug, Default)]
pub struct EngineOutput {
    /// Latency samples in the order they were produced.
    pub samples: Vec<LatencySample>,
    /// Submission count per truncated calendar minute. Iteration order
    /// is unspecified.
    pub throughput: HashMap<NaiveDateTime, u64>,
    /// Lines skipped because the timestamp prefix failed to parse.
    pub skipped_lines: u64,
}

#[derive(Debug, Default)]
pub struct CorrelationEngine {
    /// At most one open Submission per correlation id; a repeat
    /// Submission overwrites (last-writer-wins, "most recent open
    /// order"). Submissions without a ClOrdID share the `""` key and
    /// are indistinguishable from one another.
    pending: HashMap<String, NaiveDateTime>,
    consumed: HashSet<String>,
    samples: Vec<LatencySample>,
    throughput: HashMap<NaiveDateTime, u64>,
    skipped_lines: u64,
}

impl CorrelationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe one raw log line. Parse failures are logged and counted,
    /// never fatal: the line contributes to no sample or bucket.
    pub fn observe_line(&mut self, line: &str) -> Option<MatchOutcome> {
        match timed_event(line) {
            Ok(event) => self.observe(&event),
            Err(err) => {
                self.skipped_lines += 1;
                warn!("skipping unparseable line: {}", err);
                None
            }
        }
    }

    /// Observe one parsed event. Returns the match outcome for
    /// Completions with a non-empty correlation id, `None` otherwise.
    pub fn observe(&mut self, event: &TimedEvent) -> Option<MatchOutcome> {
        match event.kind {
            MsgKind::Submission => {
                self.pending
                    .insert(event.correlation_id.clone(), event.timestamp);
                let minute = truncate_to_minute(event.timestamp);
                *self.throughput.entry(minute).or_insert(0) += 1;
                None
            }
            MsgKind::Completion if !event.correlation_id.is_empty() => {
                Some(self.complete(event))
            }
            _ => None,
        }
    }

    fn complete(&mut self, event: &TimedEvent) -> MatchOutcome {
        match self.pending.remove(&event.correlation_id) {
            Some(submitted) => {
                // Signed difference: non-monotonic logs yield negative
                // samples, propagated as-is.
                let sample = LatencySample {
                    correlation_id: event.correlation_id.clone(),
                    duration_ms: (event.timestamp - submitted).num_milliseconds(),
                };
                self.samples.push(sample.clone());
                self.consumed.insert(event.correlation_id.clone());
                MatchOutcome::Matched(sample)
            }
            None if self.consumed.contains(&event.correlation_id) => {
                MatchOutcome::AlreadyConsumed
            }
            None => MatchOutcome::NoPriorSubmission,
        }
    }

    /// Number of Submissions still open.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// End the pass. Unmatched pending entries are discarded without
    /// being reported.
    pub fn finish(self) -> EngineOutput {
        EngineOutput {
            samples: self.samples,
            throughput: self.throughput,
            skipped_lines: self.skipped_lines,
        }
    }
}

/// Truncate to the start of the containing calendar minute.
fn truncate_to_minute(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}
