use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::Client;
use resume_core::{InboundMessage, KeyboardLayout, OutboundMessage, TransportConfig};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub chat: Chat,
    pub from: Option<User>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub first_name: String,
}

impl Update {
    /// Text messages only; stickers, photos and edits carry no text here.
    pub fn into_inbound(self) -> Option<InboundMessage> {
        let message = self.message?;
        let text = message.text?;
        Some(InboundMessage {
            chat_id: message.chat.id,
            sender_name: message.from.map(|user| user.first_name),
            text,
        })
    }
}

/// Minimal Telegram Bot API client: long polling plus `sendMessage`.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: Client,
    base: String,
    poll_timeout: Duration,
}

impl TelegramClient {
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(6))
            .timeout(config.poll_timeout + Duration::from_secs(10))
            .build()
            .context("failed to build Telegram HTTP client")?;

        Ok(Self {
            http,
            base: format!(
                "{}/bot{}",
                config.api_base.trim_end_matches('/'),
                config.token
            ),
            poll_timeout: config.poll_timeout,
        })
    }

    pub async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>> {
        let mut payload = json!({
            "timeout": self.poll_timeout.as_secs(),
            "allowed_updates": ["message"],
        });
        if let Some(offset) = offset {
            payload["offset"] = json!(offset);
        }
        self.call("getUpdates", &payload).await
    }

    pub async fn send_message(&self, message: &OutboundMessage) -> Result<()> {
        let _: Value = self
            .call("sendMessage", &send_message_payload(message))
            .await?;
        Ok(())
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, payload: &Value) -> Result<T> {
        let response = self
            .http
            .post(format!("{}/{}", self.base, method))
            .json(payload)
            .send()
            .await
            .with_context(|| format!("telegram {method} request failed"))?;

        let status = response.status();
        let body: ApiResponse<T> = response
            .json()
            .await
            .with_context(|| format!("telegram {method} decode failed (HTTP {status})"))?;

        if !body.ok {
            bail!(
                "telegram {} rejected: {}",
                method,
                body.description.unwrap_or_else(|| status.to_string())
            );
        }
        body.result
            .with_context(|| format!("telegram {method} returned no result"))
    }
}

pub fn send_message_payload(message: &OutboundMessage) -> Value {
    let reply = &message.reply;
    let mut payload = json!({
        "chat_id": message.chat_id,
        "text": reply.text,
        "disable_web_page_preview": reply.disable_web_page_preview,
    });
    if let Some(mode) = reply.parse_mode {
        payload["parse_mode"] = json!(mode.as_str());
    }
    if let Some(layout) = reply.keyboard {
        payload["reply_markup"] = keyboard_markup(layout);
    }
    payload
}

fn keyboard_markup(layout: KeyboardLayout) -> Value {
    let rows = layout
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|label| json!({ "text": label }))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    json!({ "keyboard": rows, "resize_keyboard": true })
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use resume_core::menu::labels;
    use resume_core::Reply;

    use super::*;

    fn client(server: &MockServer) -> TelegramClient {
        TelegramClient::new(&TransportConfig {
            token: "123:abc".to_string(),
            api_base: server.base_url(),
            poll_timeout: Duration::from_secs(1),
        })
        .unwrap()
    }

    #[test]
    fn payload_carries_keyboard_and_flags() {
        let outbound = OutboundMessage {
            chat_id: 7,
            reply: Reply::markdown("*hi*")
                .without_preview()
                .with_keyboard(KeyboardLayout::Courses),
        };
        let payload = send_message_payload(&outbound);

        assert_eq!(payload["chat_id"], 7);
        assert_eq!(payload["parse_mode"], "Markdown");
        assert_eq!(payload["disable_web_page_preview"], true);
        assert_eq!(payload["reply_markup"]["resize_keyboard"], true);
        assert_eq!(
            payload["reply_markup"]["keyboard"][1][0]["text"],
            labels::BACK_TO_MAIN
        );
    }

    #[test]
    fn plain_payload_omits_optional_fields() {
        let outbound = OutboundMessage {
            chat_id: 7,
            reply: Reply::plain("hello"),
        };
        let payload = send_message_payload(&outbound);
        assert!(payload.get("parse_mode").is_none());
        assert!(payload.get("reply_markup").is_none());
    }

    #[test]
    fn only_text_updates_become_messages() {
        let updates: Vec<Update> = serde_json::from_value(json!([
            {
                "update_id": 1,
                "message": {
                    "chat": { "id": 5 },
                    "from": { "first_name": "Ada" },
                    "text": "hi"
                }
            },
            { "update_id": 2, "message": { "chat": { "id": 5 }, "sticker": {} } },
            { "update_id": 3, "edited_message": { "chat": { "id": 5 }, "text": "x" } }
        ]))
        .unwrap();

        let inbound = updates
            .into_iter()
            .filter_map(Update::into_inbound)
            .collect::<Vec<_>>();
        assert_eq!(inbound, vec![InboundMessage::new(5, Some("Ada"), "hi")]);
    }

    #[tokio::test]
    async fn polls_with_offset() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/bot123:abc/getUpdates")
                    .json_body_partial(r#"{"offset": 11}"#);
                then.status(200).json_body(json!({
                    "ok": true,
                    "result": [
                        { "update_id": 11, "message": { "chat": { "id": 1 }, "text": "python" } }
                    ]
                }));
            })
            .await;

        let updates = client(&server).get_updates(Some(11)).await.unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].update_id, 11);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rejected_call_surfaces_description() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/bot123:abc/sendMessage");
                then.status(400).json_body(json!({
                    "ok": false,
                    "description": "Bad Request: can't parse entities"
                }));
            })
            .await;

        let outbound = OutboundMessage {
            chat_id: 1,
            reply: Reply::markdown("*broken"),
        };
        let err = client(&server).send_message(&outbound).await.unwrap_err();
        assert!(err.to_string().contains("can't parse entities"));
    }
}
