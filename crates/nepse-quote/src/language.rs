//! Reply language selection
//!
//! Only the human-facing copy (welcome and not-found messages) is localised.
//! Field labels stay fixed so replies can be read by scripts.

use std::fmt;

/// Language of the bot's canned messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Nepali
    #[default]
    Nepali,
    /// English
    English,
}

impl Language {
    /// Get ISO 639-1 language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Nepali => "ne",
            Language::English => "en",
        }
    }

    /// Get language name for display
    pub fn name(&self) -> &'static str {
        match self {
            Language::Nepali => "Nepali",
            Language::English => "English",
        }
    }

    /// Parse from ISO 639-1 code or common name
    ///
    /// Unknown values yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nepse_quote::Language;
    ///
    /// assert_eq!(Language::from_code("en"), Some(Language::English));
    /// assert_eq!(Language::from_code("नेपाली"), Some(Language::Nepali));
    /// assert_eq!(Language::from_code("ja"), None);
    /// ```
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ne" | "nepali" | "नेपाली" | "ne-np" => Some(Language::Nepali),
            "en" | "english" | "en-us" | "en-gb" => Some(Language::English),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
