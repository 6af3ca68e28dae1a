use arena_fixtures::adapters::outbound::{init_combined_logger, init_tracing};
use arena_fixtures::application::FixtureService;
use arena_fixtures::Config;
use std::error::Error;
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "arena_fixtures.toml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing; the `log` facade stays free for the file logger
    init_tracing()?;

    info!("Starting arena fixture generation");

    let config_path =
        std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load_or_default(&config_path).await?;
    info!("Configuration loaded from {} (or defaults)", config_path);

    let logger = init_combined_logger(config.logging.file.as_deref());
    let service = FixtureService::new(config, logger);
    if let Some(file) = &service.config().logging.file {
        info!("Domain log file: {}", file);
    }

    match service.generate() {
        Ok(summary) => {
            info!(
                "Wrote {} fixtures ({} obstacles)",
                summary.scenes_written, summary.obstacles_written
            );
            Ok(())
        }
        Err(e) => {
            error!("Fixture generation aborted: {}", e);
            Err(e.into())
        }
    }
}
