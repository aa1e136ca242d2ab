use fixmetrics::error::RunError;
use fixmetrics::runtime::{boot, run};

fn main() -> Result<(), RunError> {
    boot::init_logging();
    let config = boot::boot()?;
    run::execute(&config)
}
