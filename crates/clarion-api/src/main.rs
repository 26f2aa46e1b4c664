//! Clarion API server binary.

use clarion_api::config::ApiConfig;
use clarion_api::start_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ApiConfig::from_env()?;
    start_server(config).await?;

    Ok(())
}
