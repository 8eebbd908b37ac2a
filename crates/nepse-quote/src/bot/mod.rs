//! Quote bot
//!
//! [`QuoteBot`] is the service context behind every transport: it owns the
//! quote site client and the reply formatter, and turns one piece of chat
//! text into at most one reply.
//!
//! # Example
//!
//! ```rust,ignore
//! use nepse_quote::{QuoteBot, QuoteConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let bot = QuoteBot::new(&QuoteConfig::from_env()?)?;
//!     println!("{}", bot.stock("nmb").await);
//!     Ok(())
//! }
//! ```

pub mod commands;

use crate::api::QuotePageClient;
use crate::config::QuoteConfig;
use crate::error::Result;
use crate::interface::{Formatter, PlainTextFormatter};
use tracing::{debug, info};

pub use commands::{Command, normalize_symbol};

/// Fetch-and-format pipeline shared by the webhook and the CLI
pub struct QuoteBot {
    client: QuotePageClient,
    formatter: Box<dyn Formatter>,
}

impl QuoteBot {
    /// Create a bot with the plain text formatter
    pub fn new(config: &QuoteConfig) -> Result<Self> {
        Ok(Self::with_formatter(
            QuotePageClient::new(config)?,
            Box::new(PlainTextFormatter::new(config.language)),
        ))
    }

    /// Create a bot from parts
    pub fn with_formatter(client: QuotePageClient, formatter: Box<dyn Formatter>) -> Self {
        Self { client, formatter }
    }

    /// Greeting for `/start` and `/help`
    pub fn start(&self) -> String {
        self.formatter.format_welcome()
    }

    /// Look up `symbol` and render the reply
    ///
    /// Never fails: any lookup failure renders the not-found message.
    pub async fn stock(&self, symbol: &str) -> String {
        let symbol = normalize_symbol(symbol);
        info!(symbol = %symbol, "Looking up quote");

        let record = self.client.lookup(&symbol).await;
        self.formatter.format_reply(record.as_ref())
    }

    /// Reply for one incoming chat text, `None` when it needs no answer
    pub async fn handle_text(&self, text: &str) -> Option<String> {
        let command = match Command::parse(text) {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "Ignoring message");
                return None;
            }
        };

        match command {
            Command::Start | Command::Help => Some(self.start()),
            Command::Quote { symbol } => Some(self.stock(&symbol).await),
            Command::Unknown { name } => {
                debug!(command = %name, "Ignoring unknown command");
                None
            }
        }
    }
}

impl std::fmt::Debug for QuoteBot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteBot")
            .field("client", &self.client)
            .field("language", &self.formatter.language().code())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::{not_found_text, welcome_text};
    use crate::language::Language;
    use crate::test_support::spawn_single_quote;

    fn bot_for(base_url: &str, language: Language) -> QuoteBot {
        let config = QuoteConfig::builder()
            .base_url(base_url)
            .language(language)
            .build()
            .unwrap();
        QuoteBot::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_stock_found() {
        let base = spawn_single_quote("NMB", "1234").await;
        let bot = bot_for(&base, Language::Nepali);

        let reply = bot.stock("NMB").await;
        let lines: Vec<&str> = reply.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "Symbol: NMB");
        assert_eq!(lines[1], "LTP: 1234");
        assert_eq!(lines[2], "Change Percent: +1.2%");
    }

    #[tokio::test]
    async fn test_stock_is_case_insensitive() {
        let base = spawn_single_quote("NMB", "1234").await;
        let bot = bot_for(&base, Language::Nepali);

        assert_eq!(bot.stock("nmb").await, bot.stock("NMB").await);
    }

    #[tokio::test]
    async fn test_stock_not_found() {
        let base = spawn_single_quote("NMB", "1234").await;
        let bot = bot_for(&base, Language::Nepali);

        assert_eq!(bot.stock("ZZZZ").await, not_found_text(Language::Nepali));
    }

    #[tokio::test]
    async fn test_handle_text() {
        let base = spawn_single_quote("NMB", "1234").await;
        let bot = bot_for(&base, Language::English);

        assert_eq!(
            bot.handle_text("/start").await.as_deref(),
            Some(welcome_text(Language::English))
        );
        assert!(bot.handle_text("/unknown").await.is_none());
        assert!(bot.handle_text("   ").await.is_none());

        let reply = bot.handle_text("nmb").await.unwrap();
        assert!(reply.starts_with("Symbol: NMB\nLTP: 1234\n"));
    }

    #[test]
    fn test_debug_shows_language_code() {
        let bot = bot_for("https://nepse.ct.ws", Language::English);
        assert!(format!("{bot:?}").contains(r#"language: "en""#));
    }
}
