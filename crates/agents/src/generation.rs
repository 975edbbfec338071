use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    Transport(String),
    #[error("generation backend returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("generation response could not be decoded: {0}")]
    Malformed(String),
    #[error("generation backend returned no text")]
    EmptyOutput,
}

/// External text-generation capability. One prompt in, one answer out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn backend_name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
