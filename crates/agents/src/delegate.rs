use std::sync::Arc;

use resume_core::reply::{apology_reply, fallback_reply, generated_reply};
use resume_core::Resolution;
use tracing::{error, instrument};

use crate::generation::TextGenerator;

/// Last resort for text nothing else claimed: a single best-effort call to
/// the generation backend, or the static fallback when none is configured.
#[derive(Clone, Default)]
pub struct GenerationDelegate {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl GenerationDelegate {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }

    pub fn disabled() -> Self {
        Self { generator: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.generator.is_some()
    }

    #[instrument(skip_all)]
    pub async fn resolve(&self, text: &str) -> Resolution {
        let Some(generator) = self.generator.as_ref() else {
            return Resolution::Fallback {
                reply: fallback_reply(text),
            };
        };

        match generator.generate(text).await {
            Ok(generated) => Resolution::Generated {
                reply: generated_reply(&generated),
            },
            Err(err) => {
                error!(
                    backend = generator.backend_name(),
                    error = %err,
                    "generation backend failed"
                );
                Resolution::Apology {
                    reply: apology_reply(),
                }
            }
        }
    }
}
