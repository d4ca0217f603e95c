use mapmark::{init_logging, run_headless, Config};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    tracing::info!("MapMark {} (built {})", mapmark::VERSION, mapmark::BUILD_DATE);

    // An explicit config path wins over the platform location
    let config_path = match std::env::args_os().nth(1) {
        Some(path) => PathBuf::from(path),
        None => Config::default_path()?,
    };
    let config = Config::load_or_default(&config_path)?;
    tracing::info!("Using configuration from {}", config_path.display());

    run_headless(&config).await
}
