//! NEPSE quote bot webhook server
//!
//! # Usage
//!
//! ```bash
//! # Set up environment variables (or put them in .env)
//! export BOT_TOKEN="123456:ABC..."
//! export WEBHOOK_BASE_URL="https://your-host.example.com"
//! export PORT=5000
//!
//! # Run the bot
//! cargo run --bin nepse-bot -p nepse-quote
//! ```

use anyhow::Context;
use nepse_quote::server::{self, AppState, ServerConfig};
use nepse_quote::{QuoteBot, QuoteConfig, TelegramClient, TelegramConfig};
use nepse_utils::EnvReader;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    nepse_utils::load_dotenv();
    nepse_utils::init_tracing();

    let env = EnvReader::system();
    let quote_config = QuoteConfig::from_reader(&env)?;
    let telegram_config = TelegramConfig::from_reader(&env)?;
    let server_config = ServerConfig::from_reader(&env)?;

    info!(
        quote_site = %quote_config.base_url,
        timeout = ?quote_config.request_timeout,
        language = quote_config.language.code(),
        "Starting nepse-bot"
    );

    let telegram = Arc::new(TelegramClient::new(&telegram_config)?);

    match telegram_config.webhook_url() {
        Some(url) => {
            telegram
                .set_webhook(&url)
                .await
                .context("failed to register webhook")?;
            info!("Webhook registered");
        }
        None => warn!("WEBHOOK_BASE_URL not set, skipping webhook registration"),
    }

    let bot = QuoteBot::new(&quote_config)?;
    let state = Arc::new(AppState::new(bot, telegram, telegram_config.token.clone()));

    let addr = server_config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "Webhook server listening");

    server::serve(listener, server::router(state)).await?;

    Ok(())
}
