use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use httpmock::prelude::*;
use parking_lot::Mutex;
use resume_agents::{GenerationError, Responder, TextGenerator};
use resume_api::{build_generator, build_keep_alive_router, KeepAliveState, ALIVE_BODY};
use resume_core::reply::{AI_ATTRIBUTION, APOLOGY_TEXT, GENERATED_TEXT_LIMIT, TRUNCATION_MARKER};
use resume_core::{GenerationConfig, InboundMessage, ParseMode, ResolutionKind};
use resume_observability::BotMetrics;
use serde_json::json;
use tower::ServiceExt;

fn keep_alive_app(metrics: Arc<BotMetrics>) -> axum::Router {
    build_keep_alive_router(KeepAliveState {
        metrics,
        generation_enabled: false,
    })
}

fn gemini_config(server: &MockServer) -> GenerationConfig {
    GenerationConfig {
        api_key: "k".to_string(),
        model: "gemini-pro".to_string(),
        api_base: server.base_url(),
        timeout: Duration::from_secs(5),
    }
}

fn message(text: &str) -> InboundMessage {
    InboundMessage::new(100, Some("Lin"), text)
}

#[tokio::test]
async fn root_reports_alive() {
    let response = keep_alive_app(BotMetrics::shared())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], ALIVE_BODY.as_bytes());
}

#[tokio::test]
async fn health_exposes_counters() {
    let metrics = BotMetrics::shared();
    let responder = Responder::with_generator(None, metrics.clone());
    responder.respond(&message("python")).await.unwrap();

    let response = keep_alive_app(metrics)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed["status"], "ok");
    assert_eq!(parsed["generation_enabled"], false);
    assert_eq!(parsed["metrics"]["keyword_total"], 1);
}

#[tokio::test]
async fn gemini_answer_is_truncated_and_attributed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1beta/models/gemini-pro:generateContent");
            then.status(200).json_body(json!({
                "candidates": [ { "content": { "parts": [ { "text": "g".repeat(5_000) } ] } } ]
            }));
        })
        .await;

    let metrics = BotMetrics::shared();
    let generator = build_generator(Some(&gemini_config(&server))).unwrap();
    let responder = Responder::with_generator(generator, metrics.clone());

    let outbound = responder
        .respond(&message("Tell me a long story"))
        .await
        .unwrap();
    let text = outbound.reply.text;
    assert!(text.ends_with(&format!("{TRUNCATION_MARKER}{AI_ATTRIBUTION}")));
    assert_eq!(
        text.chars().count(),
        GENERATED_TEXT_LIMIT
            + TRUNCATION_MARKER.chars().count()
            + AI_ATTRIBUTION.chars().count()
    );
    assert_eq!(outbound.reply.parse_mode, Some(ParseMode::Markdown));
    assert_eq!(metrics.snapshot().generated_total, 1);
}

#[tokio::test]
async fn gemini_failure_is_recovered_locally() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(500).body("internal");
        })
        .await;

    let metrics = BotMetrics::shared();
    let generator = build_generator(Some(&gemini_config(&server))).unwrap();
    let responder = Responder::with_generator(generator, metrics.clone());

    let outbound = responder
        .respond(&message("Tell me a long story"))
        .await
        .unwrap();
    assert_eq!(outbound.reply.text, APOLOGY_TEXT);
    assert_eq!(metrics.snapshot().generation_failures_total, 1);
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn unreachable_gemini_is_logged_without_the_key() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let config = GenerationConfig {
        api_key: "SECRET-KEY-123".to_string(),
        model: "gemini-pro".to_string(),
        api_base: "http://127.0.0.1:1".to_string(),
        timeout: Duration::from_secs(5),
    };
    let generator = build_generator(Some(&config)).unwrap();
    let responder = Responder::with_generator(generator, BotMetrics::shared());

    let outbound = responder
        .respond(&message("Tell me a long story"))
        .await
        .unwrap();
    assert_eq!(outbound.reply.text, APOLOGY_TEXT);

    let captured = String::from_utf8_lossy(&logs.0.lock()).into_owned();
    assert!(!captured.contains("SECRET-KEY-123"), "{captured}");
    let errors = captured
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
        .filter(|record| record["level"] == "ERROR")
        .collect::<Vec<_>>();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["fields"]["backend"], "gemini");
    assert!(errors[0]["fields"]["error"]
        .as_str()
        .unwrap()
        .starts_with("generation request failed"));
}

#[tokio::test]
async fn keyword_match_skips_generation() {
    let server = MockServer::start_async().await;
    let gemini = server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200).json_body(json!({}));
        })
        .await;

    let generator = build_generator(Some(&gemini_config(&server))).unwrap();
    let responder = Responder::with_generator(generator, BotMetrics::shared());

    let resolution = responder
        .resolve(&message("docker compose tips"))
        .await
        .unwrap();
    assert_eq!(resolution.kind(), ResolutionKind::Keyword);
    gemini.assert_hits_async(0).await;
}

struct Recording {
    prompts: Mutex<Vec<String>>,
}

#[async_trait]
impl TextGenerator for Recording {
    fn backend_name(&self) -> &str {
        "recording"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().push(prompt.to_string());
        Ok("Sure.".to_string())
    }
}

#[tokio::test]
async fn generator_receives_raw_text() {
    let recording = Arc::new(Recording {
        prompts: Mutex::new(Vec::new()),
    });
    let generator: Arc<dyn TextGenerator> = recording.clone();
    let responder = Responder::with_generator(Some(generator), BotMetrics::shared());

    let outbound = responder
        .respond(&message("Who won the 1998 World Cup?"))
        .await
        .unwrap();

    assert_eq!(outbound.reply.text, format!("Sure.{AI_ATTRIBUTION}"));
    assert_eq!(recording.prompts.lock().as_slice(), ["Who won the 1998 World Cup?"]);
}

#[test]
fn missing_gemini_key_yields_no_generator() {
    assert!(build_generator(None).unwrap().is_none());
}
