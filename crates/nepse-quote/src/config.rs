//! Configuration for quote lookups

use crate::error::{QuoteError, Result};
use crate::language::Language;
use nepse_utils::EnvReader;
use std::time::Duration;
use url::Url;

/// Quote site used when `QUOTE_BASE_URL` is not set
pub const DEFAULT_QUOTE_BASE_URL: &str = "https://nepse.ct.ws";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for quote lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteConfig {
    /// Base URL of the quote site; the symbol is appended as a path segment
    pub base_url: String,

    /// Upper bound on a single page fetch
    pub request_timeout: Duration,

    /// Language of canned replies
    pub language: Language,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_QUOTE_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            language: Language::default(),
        }
    }
}

impl QuoteConfig {
    /// Create a new configuration builder
    pub fn builder() -> QuoteConfigBuilder {
        QuoteConfigBuilder::default()
    }

    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_reader(&EnvReader::system())
    }

    /// Load from `QUOTE_BASE_URL`, `QUOTE_TIMEOUT_SECS` and `BOT_LANGUAGE`
    pub fn from_reader(env: &EnvReader) -> Result<Self> {
        let mut builder = Self::builder()
            .request_timeout(Duration::from_secs(
                env.parse_or("QUOTE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            ));

        if let Some(base_url) = env.get("QUOTE_BASE_URL") {
            builder = builder.base_url(base_url);
        }

        if let Some(code) = env.get("BOT_LANGUAGE") {
            match Language::from_code(&code) {
                Some(language) => builder = builder.language(language),
                None => tracing::warn!(
                    language = %code,
                    "Unknown BOT_LANGUAGE, using {}",
                    Language::default()
                ),
            }
        }

        builder.build()
    }

    /// Parsed base URL
    pub fn base(&self) -> Result<Url> {
        Url::parse(&self.base_url)
            .map_err(|e| QuoteError::Config(format!("invalid base URL {}: {e}", self.base_url)))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let base = self.base()?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(QuoteError::Config(format!(
                "base URL must be http or https, got {}",
                base.scheme()
            )));
        }

        if self.request_timeout.is_zero() {
            return Err(QuoteError::Config(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for QuoteConfig
#[derive(Debug, Default)]
pub struct QuoteConfigBuilder {
    base_url: Option<String>,
    request_timeout: Option<Duration>,
    language: Option<Language>,
}

impl QuoteConfigBuilder {
    /// Set the quote site base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set reply language
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<QuoteConfig> {
        let defaults = QuoteConfig::default();

        let config = QuoteConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            language: self.language.unwrap_or(defaults.language),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QuoteConfig::default();
        assert_eq!(config.base_url, "https://nepse.ct.ws");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.language, Language::Nepali);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = QuoteConfig::builder()
            .base_url("http://127.0.0.1:9000/quotes/")
            .request_timeout(Duration::from_secs(3))
            .language(Language::English)
            .build()
            .unwrap();

        assert_eq!(config.base_url, "http://127.0.0.1:9000/quotes/");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.language, Language::English);
    }

    #[test]
    fn test_validation_rejects_bad_urls() {
        assert!(QuoteConfig::builder().base_url("not a url").build().is_err());
        assert!(QuoteConfig::builder().base_url("ftp://quotes.example").build().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let result = QuoteConfig::builder()
            .request_timeout(Duration::ZERO)
            .build();
        assert!(matches!(result, Err(QuoteError::Config(_))));
    }

    #[test]
    fn test_from_reader() {
        let env = EnvReader::from_pairs([
            ("QUOTE_BASE_URL", "http://localhost:8080"),
            ("QUOTE_TIMEOUT_SECS", "4"),
            ("BOT_LANGUAGE", "en"),
        ]);
        let config = QuoteConfig::from_reader(&env).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(4));
        assert_eq!(config.language, Language::English);
    }

    #[test]
    fn test_from_reader_defaults_and_bad_values() {
        let env = EnvReader::from_pairs([("BOT_LANGUAGE", "klingon")]);
        assert_eq!(QuoteConfig::from_reader(&env).unwrap(), QuoteConfig::default());

        let env = EnvReader::from_pairs([("QUOTE_TIMEOUT_SECS", "soon")]);
        assert!(matches!(
            QuoteConfig::from_reader(&env),
            Err(QuoteError::Config(_))
        ));
    }
}
