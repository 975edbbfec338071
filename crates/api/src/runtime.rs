use std::time::Duration;

use anyhow::Result;
use resume_agents::Responder;
use tracing::{error, info, warn};

use crate::telegram::TelegramClient;

const POLL_ERROR_BACKOFF: Duration = Duration::from_secs(1);

/// Long-polling loop. Updates are handled one at a time, in order.
pub struct BotRuntime {
    client: TelegramClient,
    responder: Responder,
    offset: Option<i64>,
}

impl BotRuntime {
    pub fn new(client: TelegramClient, responder: Responder) -> Self {
        Self {
            client,
            responder,
            offset: None,
        }
    }

    pub fn offset(&self) -> Option<i64> {
        self.offset
    }

    /// Fetches one batch and answers it. Returns how many updates were consumed.
    pub async fn poll_once(&mut self) -> Result<usize> {
        let updates = self.client.get_updates(self.offset).await?;
        let count = updates.len();

        for update in updates {
            self.offset = Some(update.update_id + 1);
            let Some(inbound) = update.into_inbound() else {
                continue;
            };
            let Some(outbound) = self.responder.respond(&inbound).await else {
                continue;
            };
            if let Err(err) = self.client.send_message(&outbound).await {
                self.responder.metrics().inc_send_failure();
                error!(chat_id = outbound.chat_id, error = %err, "failed to deliver reply");
            }
        }

        Ok(count)
    }

    pub async fn run(mut self) {
        info!(
            generation_enabled = self.responder.generation_enabled(),
            "bot is polling for updates"
        );
        loop {
            if let Err(err) = self.poll_once().await {
                warn!(error = %err, "polling failed");
                tokio::time::sleep(POLL_ERROR_BACKOFF).await;
            }
        }
    }
}
