/// Correlation engine — pending-order state, latency samples and
/// per-minute throughput, produced by one forward pass over the log.

pub mod correlate;

pub use correlate::{CorrelationEngine, EngineOutput, MatchOutcome};
