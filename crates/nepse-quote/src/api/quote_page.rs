//! Quote page client
//!
//! Fetches the per-symbol quote page and turns it into a [`QuoteRecord`].

use crate::api::parser;
use crate::config::QuoteConfig;
use crate::error::{QuoteError, Result};
use crate::model::QuoteRecord;
use reqwest::Client;
use tracing::{debug, error, instrument};
use url::Url;

/// Client for the quote site
#[derive(Debug, Clone)]
pub struct QuotePageClient {
    client: Client,
    base_url: Url,
}

impl QuotePageClient {
    /// Create a client from a validated configuration
    pub fn new(config: &QuoteConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("nepse-bot/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base()?,
        })
    }

    /// URL of the quote page for `symbol`
    ///
    /// The symbol becomes one path segment under the base URL, so characters
    /// such as `/` or `?` are percent-encoded instead of changing the path.
    pub fn quote_url(&self, symbol: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                QuoteError::Config(format!("base URL {} cannot take a path", self.base_url))
            })?
            .pop_if_empty()
            .push(symbol);
        Ok(url)
    }

    /// Fetch and parse the quote page for `symbol`
    #[instrument(skip(self))]
    pub async fn fetch(&self, symbol: &str) -> Result<QuoteRecord> {
        let url = self.quote_url(symbol)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| QuoteError::from_transport(symbol, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status {
                symbol: symbol.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| QuoteError::from_transport(symbol, e))?;

        let html = parser::decode_body(symbol, &body)?;
        parser::parse_quote_page(symbol, &html)
    }

    /// Fetch a quote, logging and discarding any failure
    pub async fn lookup(&self, symbol: &str) -> Option<QuoteRecord> {
        match self.fetch(symbol).await {
            Ok(record) => {
                debug!(symbol, "Fetched quote");
                Some(record)
            }
            Err(QuoteError::Status { status, .. }) => {
                error!(symbol, status, "Failed to fetch quote page");
                None
            }
            Err(e @ QuoteError::Unreachable { .. }) => {
                error!(symbol, error = %e, "Quote site unreachable");
                None
            }
            Err(e) => {
                error!(symbol, error = %e, "Error fetching quote");
                None
            }
        }
    }
}
