//! Command parsing for incoming chat text

use crate::error::{QuoteError, Result};

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Greet the user
    Start,
    /// Same greeting, listing example symbols
    Help,
    /// Look up a ticker symbol
    Quote { symbol: String },
    /// Any other slash command; left unanswered
    Unknown { name: String },
}

impl Command {
    /// Parse a command from user input
    ///
    /// Plain text is treated as a symbol. Slash commands may carry a bot
    /// mention (`/start@nepse_bot`) as sent in group chats.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if input.is_empty() {
            return Err(QuoteError::Command("Empty input".to_string()));
        }

        let Some(rest) = input.strip_prefix('/') else {
            return Ok(Command::Quote {
                symbol: normalize_symbol(input),
            });
        };

        let word = rest.split_whitespace().next().unwrap_or_default();
        let name = word.split('@').next().unwrap_or_default().to_lowercase();

        match name.as_str() {
            "start" => Ok(Command::Start),
            "help" => Ok(Command::Help),
            "" => Err(QuoteError::Command("Empty command".to_string())),
            _ => Ok(Command::Unknown { name }),
        }
    }
}

/// Symbols are looked up uppercased, so `nmb` and `NMB` hit the same page
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}
