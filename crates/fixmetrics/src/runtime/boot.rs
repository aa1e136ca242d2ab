//! Boot — logging init and config load.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::conf::Config;
use crate::error::RunResult;

/// Initialise the tracing / logging subsystem.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fixmetrics=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Load and validate the run configuration.
pub fn boot() -> RunResult<Config> {
    let config = Config::load()?;
    info!(
        "Loaded configuration: log_file={}, raw_output={}, metrics_output={}",
        config.log_file.display(),
        config.raw_output.display(),
        config.metrics_output.display()
    );
    Ok(config)
}
