use anyhow::{Context, Result};
use resume_api::serve;
use resume_core::BotConfig;
use resume_observability::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing("resume_bot");

    let config = BotConfig::from_env().context("invalid bot configuration")?;
    tracing::info!(
        generation_enabled = config.generation_enabled(),
        "resume bot starting"
    );

    serve(config).await
}
