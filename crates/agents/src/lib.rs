pub mod delegate;
pub mod generation;

use std::sync::Arc;

use resume_core::{
    parse_command, CommandParse, InboundMessage, KeywordClassifier, MenuRouter, OutboundMessage,
    Resolution,
};
use resume_observability::BotMetrics;
use tracing::{debug, info, instrument};

pub use delegate::GenerationDelegate;
pub use generation::{GenerationError, TextGenerator};

/// Resolves each inbound message through commands, the menu router, the
/// keyword classifier and finally the generation delegate. Holds no state
/// between messages.
#[derive(Clone)]
pub struct Responder {
    router: MenuRouter,
    classifier: KeywordClassifier,
    delegate: GenerationDelegate,
    metrics: Arc<BotMetrics>,
}

impl Responder {
    pub fn new(
        router: MenuRouter,
        classifier: KeywordClassifier,
        delegate: GenerationDelegate,
        metrics: Arc<BotMetrics>,
    ) -> Self {
        Self {
            router,
            classifier,
            delegate,
            metrics,
        }
    }

    pub fn with_generator(
        generator: Option<Arc<dyn TextGenerator>>,
        metrics: Arc<BotMetrics>,
    ) -> Self {
        Self::new(
            MenuRouter::default(),
            KeywordClassifier::default(),
            GenerationDelegate::new(generator),
            metrics,
        )
    }

    pub fn generation_enabled(&self) -> bool {
        self.delegate.is_enabled()
    }

    pub fn metrics(&self) -> &Arc<BotMetrics> {
        &self.metrics
    }

    /// `None` for messages the bot deliberately leaves unanswered.
    #[instrument(skip(self, message), fields(chat_id = message.chat_id))]
    pub async fn respond(&self, message: &InboundMessage) -> Option<OutboundMessage> {
        self.metrics.inc_message();

        let Some(resolution) = self.resolve(message).await else {
            self.metrics.inc_ignored();
            debug!("message ignored");
            return None;
        };

        self.metrics.record_resolution(resolution.kind());
        info!(
            chat_id = message.chat_id,
            resolution = resolution.kind().as_str(),
            "message handled"
        );
        Some(resolution.into_outbound(message.chat_id))
    }

    pub async fn resolve(&self, message: &InboundMessage) -> Option<Resolution> {
        let text = message.text.as_str();
        let sender = message.display_name();

        match parse_command(text) {
            CommandParse::Known(command) => {
                return Some(Resolution::Command {
                    command: command.name(),
                    reply: command.reply(sender),
                })
            }
            CommandParse::Unknown => return None,
            CommandParse::Text => {}
        }

        if let Some(option) = self.router.route(text) {
            return Some(Resolution::Menu {
                label: option.label,
                reply: option.render(sender),
            });
        }

        if let Some(rule) = self.classifier.classify(text) {
            return Some(Resolution::Keyword {
                topic: rule.topic,
                reply: rule.reply(),
            });
        }

        Some(self.delegate.resolve(text).await)
    }
}
