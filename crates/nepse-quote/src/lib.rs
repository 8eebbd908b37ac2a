//! NEPSE quote relay
//!
//! This crate answers chat messages naming a NEPSE ticker with the figures
//! scraped from that ticker's quote page. It includes:
//!
//! - A quote page client with an explicit request timeout
//! - Encoding detection and HTML field extraction for the page
//! - A fixed-order plain text reply formatter with localised canned messages
//! - Command dispatch for `/start` and bare symbols
//! - A Telegram webhook server and Bot API client
//!
//! # Architecture
//!
//! The pipeline is linear: chat text → [`Command`] → [`QuotePageClient`] →
//! [`Formatter`] → reply. [`QuoteBot`] bundles the client and formatter so
//! that the webhook handler and the CLI share one explicit service context.
//!
//! # Example
//!
//! ```rust,ignore
//! use nepse_quote::{QuoteBot, QuoteConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let bot = QuoteBot::new(&QuoteConfig::default())?;
//!
//!     // Eleven "Label: value" lines, or the not-found message
//!     println!("{}", bot.stock("NMB").await);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod bot;
pub mod config;
pub mod error;
pub mod interface;
pub mod language;
pub mod model;
pub mod platforms;
pub mod server;

#[cfg(test)]
mod test_support;

// Re-export main types for convenience
pub use api::QuotePageClient;
pub use bot::{Command, QuoteBot};
pub use config::QuoteConfig;
pub use error::{QuoteError, Result};
pub use interface::{Formatter, PlainTextFormatter, format_reply};
pub use language::Language;
pub use model::{QuoteField, QuoteRecord};
pub use platforms::{ReplySender, TelegramClient, TelegramConfig};
pub use server::{AppState, ServerConfig};
