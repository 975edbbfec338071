use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use resume_core::ResolutionKind;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct BotMetrics {
    messages_total: AtomicU64,
    ignored_total: AtomicU64,
    command_total: AtomicU64,
    menu_total: AtomicU64,
    keyword_total: AtomicU64,
    generated_total: AtomicU64,
    generation_failures_total: AtomicU64,
    fallback_total: AtomicU64,
    send_failures_total: AtomicU64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub messages_total: u64,
    pub ignored_total: u64,
    pub command_total: u64,
    pub menu_total: u64,
    pub keyword_total: u64,
    pub generated_total: u64,
    pub generation_failures_total: u64,
    pub fallback_total: u64,
    pub send_failures_total: u64,
}

impl BotMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_message(&self) {
        self.messages_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("resume_bot_messages_total").increment(1);
    }

    pub fn inc_ignored(&self) {
        self.ignored_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("resume_bot_ignored_total").increment(1);
    }

    pub fn inc_send_failure(&self) {
        self.send_failures_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("resume_bot_send_failures_total").increment(1);
    }

    pub fn record_resolution(&self, kind: ResolutionKind) {
        let counter = match kind {
            ResolutionKind::Command => &self.command_total,
            ResolutionKind::Menu => &self.menu_total,
            ResolutionKind::Keyword => &self.keyword_total,
            ResolutionKind::Generated => &self.generated_total,
            ResolutionKind::Apology => &self.generation_failures_total,
            ResolutionKind::Fallback => &self.fallback_total,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("resume_bot_replies_total", "kind" => kind.as_str()).increment(1);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            messages_total: self.messages_total.load(Ordering::Relaxed),
            ignored_total: self.ignored_total.load(Ordering::Relaxed),
            command_total: self.command_total.load(Ordering::Relaxed),
            menu_total: self.menu_total.load(Ordering::Relaxed),
            keyword_total: self.keyword_total.load(Ordering::Relaxed),
            generated_total: self.generated_total.load(Ordering::Relaxed),
            generation_failures_total: self.generation_failures_total.load(Ordering::Relaxed),
            fallback_total: self.fallback_total.load(Ordering::Relaxed),
            send_failures_total: self.send_failures_total.load(Ordering::Relaxed),
        }
    }
}

/// Installs the JSON subscriber once per process. `RUST_LOG` wins; without it
/// bot crates log at `info` and everything else at `warn`.
pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directives(service_name)));

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .init();
    });
}

fn default_directives(service_name: &str) -> String {
    format!("warn,{service_name}=info,resume_api=info,resume_agents=info")
}
