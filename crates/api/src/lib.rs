pub mod gemini;
pub mod keep_alive;
pub mod runtime;
pub mod telegram;

use std::sync::Arc;

use anyhow::Result;
use resume_agents::{Responder, TextGenerator};
use resume_core::{BotConfig, GenerationConfig};
use resume_observability::BotMetrics;
use tracing::{info, warn};

pub use gemini::GeminiClient;
pub use keep_alive::{build_keep_alive_router, KeepAliveState, ALIVE_BODY};
pub use runtime::BotRuntime;
pub use telegram::TelegramClient;

/// Builds the generation backend when a credential is configured.
pub fn build_generator(
    config: Option<&GenerationConfig>,
) -> Result<Option<Arc<dyn TextGenerator>>> {
    let Some(config) = config else {
        warn!("GEMINI_API_KEY not found; AI replies are disabled");
        return Ok(None);
    };
    let client = GeminiClient::new(config)?;
    info!(model = client.model(), "gemini backend configured");
    let generator: Arc<dyn TextGenerator> = Arc::new(client);
    Ok(Some(generator))
}

pub fn build_responder(
    generation: Option<&GenerationConfig>,
    metrics: Arc<BotMetrics>,
) -> Result<Responder> {
    Ok(Responder::with_generator(build_generator(generation)?, metrics))
}

/// Runs the keep-alive listener in the background and the polling loop in
/// the foreground until the process is stopped.
pub async fn serve(config: BotConfig) -> Result<()> {
    let metrics = BotMetrics::shared();
    let responder = build_responder(config.generation.as_ref(), metrics.clone())?;

    let router = build_keep_alive_router(KeepAliveState {
        metrics,
        generation_enabled: responder.generation_enabled(),
    });
    let listener = tokio::net::TcpListener::bind(config.keep_alive_addr).await?;
    info!(bind = %config.keep_alive_addr, "keep-alive listener started");
    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, router).await {
            tracing::error!(error = %err, "keep-alive listener stopped");
        }
    });

    let client = TelegramClient::new(&config.transport)?;
    BotRuntime::new(client, responder).run().await;
    Ok(())
}
