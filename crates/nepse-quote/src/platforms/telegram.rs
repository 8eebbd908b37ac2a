//! Telegram Bot API transport
//!
//! Only the slice of the Bot API the relay needs: decoding webhook updates,
//! `sendMessage` and `setWebhook`.

use crate::error::{QuoteError, Result};
use async_trait::async_trait;
use nepse_utils::EnvReader;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Bot API host used when `TELEGRAM_API_BASE` is not set
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Telegram bot configuration
#[derive(Clone, PartialEq, Eq)]
pub struct TelegramConfig {
    /// Bot token from BotFather
    pub token: String,

    /// Public base URL the webhook is served under (optional)
    pub webhook_base_url: Option<String>,

    /// Bot API host
    pub api_base: String,
}

impl TelegramConfig {
    /// Create a config with the default API host and no webhook registration
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            webhook_base_url: None,
            api_base: DEFAULT_TELEGRAM_API_BASE.to_string(),
        }
    }

    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_reader(&EnvReader::system())
    }

    /// Read `BOT_TOKEN`, `WEBHOOK_BASE_URL` and `TELEGRAM_API_BASE`
    pub fn from_reader(env: &EnvReader) -> Result<Self> {
        let token = env.require("BOT_TOKEN")?;

        Ok(Self {
            token,
            webhook_base_url: env.get("WEBHOOK_BASE_URL"),
            api_base: env
                .get("TELEGRAM_API_BASE")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE.to_string()),
        })
    }

    /// Set the public webhook base URL
    pub fn with_webhook_base_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_base_url = Some(url.into());
        self
    }

    /// Set the Bot API host
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Full webhook URL to register, `{base}/{token}`
    pub fn webhook_url(&self) -> Option<String> {
        self.webhook_base_url
            .as_deref()
            .map(|base| format!("{}/{}", base.trim_end_matches('/'), self.token))
    }
}

// The token is a credential, keep it out of logs.
impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("token", &"<redacted>")
            .field("webhook_base_url", &self.webhook_base_url)
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// Incoming webhook update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

/// Chat message carried by an update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Conversation a message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to_message_id: Option<i64>,
}

#[derive(Debug, Serialize)]
struct SetWebhookRequest<'a> {
    url: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Delivers a reply to the conversation it answers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplySender: Send + Sync {
    async fn send_reply(&self, chat_id: i64, reply_to: Option<i64>, text: &str) -> Result<()>;
}

/// Bot API client
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    endpoint: String,
}

impl TelegramClient {
    /// Create a new client
    pub fn new(config: &TelegramConfig) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/bot{}",
                config.api_base.trim_end_matches('/'),
                config.token
            ),
        })
    }

    async fn call<T: Serialize + Sync>(&self, method: &str, payload: &T) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/{method}", self.endpoint))
            .json(payload)
            .send()
            .await
            .map_err(|e| QuoteError::Network(e.without_url()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| QuoteError::Network(e.without_url()))?;
        let reply: ApiResponse = serde_json::from_slice(&body).map_err(|e| {
            QuoteError::Telegram(format!("{method} returned {status} with unreadable body: {e}"))
        })?;

        if reply.ok {
            Ok(())
        } else {
            Err(QuoteError::Telegram(format!(
                "{method} failed ({status}): {}",
                reply.description.unwrap_or_default()
            )))
        }
    }

    /// Point Telegram at our webhook
    pub async fn set_webhook(&self, url: &str) -> Result<()> {
        self.call("setWebhook", &SetWebhookRequest { url }).await
    }
}

// The endpoint embeds the token.
impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("endpoint", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ReplySender for TelegramClient {
    #[instrument(skip(self, text))]
    async fn send_reply(&self, chat_id: i64, reply_to: Option<i64>, text: &str) -> Result<()> {
        self.call(
            "sendMessage",
            &SendMessageRequest {
                chat_id,
                text,
                reply_to_message_id: reply_to,
            },
        )
        .await?;
        debug!("Reply delivered");
        Ok(())
    }
}
