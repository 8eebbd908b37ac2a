//! Command-line interface for nepse-bot
//!
//! Prints the reply the bot would send for one symbol.

use clap::Parser;
use nepse_quote::{Language, QuoteBot, QuoteConfig};
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "nepse-cli")]
#[command(about = "Look up a NEPSE quote from the terminal", long_about = None)]
struct Args {
    /// Ticker symbol, case-insensitive
    symbol: String,

    /// Quote site base URL (overrides QUOTE_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides QUOTE_TIMEOUT_SECS)
    #[arg(long)]
    timeout: Option<u64>,

    /// Reply language: ne or en (overrides BOT_LANGUAGE)
    #[arg(long, value_parser = parse_language)]
    language: Option<Language>,
}

fn parse_language(s: &str) -> Result<Language, String> {
    Language::from_code(s).ok_or_else(|| format!("unknown language {s:?}, expected ne or en"))
}

impl Args {
    fn quote_config(&self, base: QuoteConfig) -> nepse_quote::Result<QuoteConfig> {
        QuoteConfig::builder()
            .base_url(self.base_url.clone().unwrap_or(base.base_url))
            .request_timeout(self.timeout.map_or(base.request_timeout, Duration::from_secs))
            .language(self.language.unwrap_or(base.language))
            .build()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    nepse_utils::load_dotenv();
    nepse_utils::init_tracing();

    let args = Args::parse();
    let config = args.quote_config(QuoteConfig::from_env()?)?;

    info!(symbol = %args.symbol, site = %config.base_url, "Looking up quote");

    let bot = QuoteBot::new(&config)?;
    println!("{}", bot.stock(&args.symbol).await);

    Ok(())
}
