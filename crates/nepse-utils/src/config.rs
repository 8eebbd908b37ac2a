//! Environment configuration helpers

use crate::error::{Result, UtilsError};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Load variables from a `.env` file in the current directory or its parents
///
/// Variables already present in the process environment win. Returns the path
/// of the loaded file, or `None` when there is no file to load.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            Some(path)
        }
        Err(err) if err.not_found() => None,
        Err(err) => {
            tracing::warn!(error = %err, "Failed to load .env file");
            None
        }
    }
}

/// Typed reader over a source of environment variables
///
/// Values are trimmed and empty values are treated as unset.
pub struct EnvReader {
    lookup: Lookup,
}

impl EnvReader {
    /// Read from the process environment
    pub fn system() -> Self {
        Self {
            lookup: Box::new(|key: &str| std::env::var(key).ok()),
        }
    }

    /// Read from a fixed set of pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            lookup: Box::new(move |key: &str| vars.get(key).cloned()),
        }
    }

    /// Get a variable, `None` if unset or blank
    pub fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    /// Get a variable that must be set
    pub fn require(&self, key: &str) -> Result<String> {
        self.get(key)
            .ok_or_else(|| UtilsError::MissingVar(key.to_string()))
    }

    /// Parse a variable, using `default` when it is unset
    pub fn parse_or<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value.parse().map_err(|err: T::Err| UtilsError::InvalidVar {
                key: key.to_string(),
                reason: err.to_string(),
                value,
            }),
        }
    }
}

impl fmt::Debug for EnvReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvReader").finish_non_exhaustive()
    }
}
