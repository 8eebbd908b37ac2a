//! Webhook server
//!
//! Telegram posts each update to `/{token}`. Every update is answered with
//! `200 OK` once handled, even when the reply could not be delivered, so that
//! Telegram does not keep redelivering it.

use crate::bot::QuoteBot;
use crate::error::Result;
use crate::platforms::{ReplySender, Update};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use nepse_utils::EnvReader;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

const DEFAULT_PORT: u16 = 5000;

/// Listen address for the webhook server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `PORT`, listening on all interfaces
    pub fn from_reader(env: &EnvReader) -> Result<Self> {
        Ok(Self {
            port: env.parse_or("PORT", DEFAULT_PORT)?,
            ..Self::default()
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// State shared by all webhook requests
pub struct AppState {
    bot: QuoteBot,
    sender: Arc<dyn ReplySender>,
    token: String,
}

impl AppState {
    pub fn new(bot: QuoteBot, sender: Arc<dyn ReplySender>, token: impl Into<String>) -> Self {
        Self {
            bot,
            sender,
            token: token.into(),
        }
    }

    /// Handle one update: dispatch its text and deliver the reply, if any
    pub async fn process_update(&self, update: Update) {
        let Some(message) = update.message else {
            debug!(update_id = update.update_id, "Update without message");
            return;
        };
        let Some(text) = message.text.as_deref() else {
            debug!(update_id = update.update_id, "Message without text");
            return;
        };

        let Some(reply) = self.bot.handle_text(text).await else {
            return;
        };

        if let Err(e) = self
            .sender
            .send_reply(message.chat.id, Some(message.message_id), &reply)
            .await
        {
            error!(chat_id = message.chat.id, error = %e, "Failed to deliver reply");
        }
    }
}

/// Build the webhook router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/:token", post(telegram_webhook))
        .with_state(state)
}

async fn telegram_webhook(
    Path(token): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<Update>,
) -> (StatusCode, &'static str) {
    if token != state.token {
        warn!("Webhook called with unknown path");
        return (StatusCode::NOT_FOUND, "Not Found");
    }

    info!(update_id = update.update_id, "Received update");
    state.process_update(update).await;
    (StatusCode::OK, "OK")
}

/// Serve the router until Ctrl-C
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down webhook server");
}
