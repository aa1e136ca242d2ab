// Domain-driven module structure for fixmetrics.

// Core parsing and correlation
pub mod parser;
pub mod engine;

// Domain modules
pub mod capture;
pub mod report;
pub mod sink;
pub mod conf;
pub mod runtime;
pub mod error;
