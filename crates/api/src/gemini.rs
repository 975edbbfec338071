use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use resume_agents::{GenerationError, TextGenerator};
use resume_core::GenerationConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Google Gemini `generateContent` over REST. The key goes in the
/// `x-goog-api-key` header, never the URL.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(6))
            .timeout(config.timeout)
            .build()
            .context("failed to build Gemini HTTP client")?;

        Ok(Self {
            http,
            endpoint: format!(
                "{}/v1beta/models/{}:generateContent",
                config.api_base.trim_end_matches('/'),
                config.model
            ),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn backend_name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let payload = serde_json::json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        });

        let response = self
            .http
            .post(&self.endpoint)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&payload)
            .send()
            .await
            .map_err(|err| GenerationError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: body.chars().take(400).collect(),
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| GenerationError::Malformed(err.to_string()))?;
        extract_text(body).ok_or(GenerationError::EmptyOutput)
    }
}

fn extract_text(body: GenerateContentResponse) -> Option<String> {
    let content = body.candidates.into_iter().next()?.content?;
    let text = content
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect::<String>();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn client(server: &MockServer) -> GeminiClient {
        GeminiClient::new(&GenerationConfig {
            api_key: "test-key".to_string(),
            model: "gemini-pro".to_string(),
            api_base: server.base_url(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn joins_candidate_parts() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1beta/models/gemini-pro:generateContent")
                    .header(API_KEY_HEADER, "test-key")
                    .json_body_partial(
                        r#"{"contents":[{"parts":[{"text":"what is rust"}]}]}"#,
                    );
                then.status(200).json_body(json!({
                    "candidates": [
                        {
                            "content": {
                                "parts": [ { "text": "Rust is " }, { "text": "a language." } ]
                            }
                        }
                    ]
                }));
            })
            .await;

        let text = client(&server).generate("what is rust").await.unwrap();
        assert_eq!(text, "Rust is a language.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn transport_error_does_not_leak_key() {
        let client = GeminiClient::new(&GenerationConfig {
            api_key: "SECRET-KEY-123".to_string(),
            model: "gemini-pro".to_string(),
            api_base: "http://127.0.0.1:1".to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap();

        let err = client.generate("hi").await.unwrap_err();
        assert!(matches!(err, GenerationError::Transport(_)));
        assert!(!err.to_string().contains("SECRET-KEY-123"), "{err}");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(403).body("API key not valid");
            })
            .await;

        let err = client(&server).generate("hi").await.unwrap_err();
        assert!(matches!(err, GenerationError::Status { status: 403, .. }));
    }

    #[tokio::test]
    async fn blocked_prompt_has_no_text() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200)
                    .json_body(json!({ "promptFeedback": { "blockReason": "SAFETY" } }));
            })
            .await;

        let err = client(&server).generate("hi").await.unwrap_err();
        assert!(matches!(err, GenerationError::EmptyOutput));
    }

    #[tokio::test]
    async fn garbage_body_is_malformed() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).body("<html>oops</html>");
            })
            .await;

        let err = client(&server).generate("hi").await.unwrap_err();
        assert!(matches!(err, GenerationError::Malformed(_)));
    }
}
