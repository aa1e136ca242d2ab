/// Runtime — boot (logging, config) and the end-to-end run.

pub mod boot;
pub mod run;
