//! Reply formatting

use crate::language::Language;
use crate::model::QuoteRecord;

pub trait Formatter: Send + Sync {
    fn language(&self) -> Language;
    fn format_quote(&self, record: &QuoteRecord) -> String;
    fn format_not_found(&self) -> String;
    fn format_welcome(&self) -> String;

    /// Reply for a lookup result, quote or not-found
    fn format_reply(&self, result: Option<&QuoteRecord>) -> String {
        match result {
            Some(record) => self.format_quote(record),
            None => self.format_not_found(),
        }
    }
}

/// Plain text replies, one `Label: value` line per field
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextFormatter {
    language: Language,
}

impl PlainTextFormatter {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl Formatter for PlainTextFormatter {
    fn language(&self) -> Language {
        self.language
    }

    fn format_quote(&self, record: &QuoteRecord) -> String {
        record
            .entries()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_not_found(&self) -> String {
        not_found_text(self.language).to_string()
    }

    fn format_welcome(&self) -> String {
        welcome_text(self.language).to_string()
    }
}

/// Reply for a lookup result in the given language
pub fn format_reply(result: Option<&QuoteRecord>, language: Language) -> String {
    PlainTextFormatter::new(language).format_reply(result)
}

/// Static reply when a symbol cannot be looked up
pub fn not_found_text(language: Language) -> &'static str {
    match language {
        Language::Nepali => {
            "Symbol ..... 'ल्या, फेला परेन त 🤗🤗।\n\
             नआत्तिनु Symbol राम्रो सङ्ग फेरि दिनुस।\n\
             म फेरि खोज्छु।"
        }
        Language::English => {
            "Symbol ..... oops, couldn't find that 🤗🤗.\n\
             No worries, please send the symbol again carefully.\n\
             I'll look it up once more."
        }
    }
}

/// Greeting sent for `/start`
pub fn welcome_text(language: Language) -> &'static str {
    match language {
        Language::Nepali => {
            "Welcome 🙏 to NEPSE💹bot!\n\
             के को डाटा चाहियो भन्नुस ?\n\
             म फ्याट्टै खोजिहाल्छु 😂😅\n\
             Symbol दिनुस जस्तै:- NMB, SHINE, SHPC, SWBBL"
        }
        Language::English => {
            "Welcome 🙏 to NEPSE💹bot!\n\
             Which stock would you like data for?\n\
             I'll find it in a flash 😂😅\n\
             Send a symbol, e.g. NMB, SHINE, SHPC, SWBBL"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuoteField;

    fn record(last_price: &str) -> QuoteRecord {
        QuoteRecord::try_from_fields::<()>("NMB", |field| {
            Ok(match field {
                QuoteField::LastPrice => last_price.to_string(),
                QuoteField::ChangePercent => "+1.2%".to_string(),
                other => format!("{}-value", other.element_id()),
            })
        })
        .unwrap()
    }

    #[test]
    fn test_format_quote_lines() {
        let reply = format_reply(Some(&record("1234")), Language::Nepali);
        let lines: Vec<&str> = reply.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Symbol: NMB",
                "LTP: 1234",
                "Change Percent: +1.2%",
                "Day High: day_high-value",
                "Day Low: day_low-value",
                "Volume: volume-value",
                "Turn Over: turn_over-value",
                "52 Week High: 52_week_high-value",
                "52 Week Low: 52_week_low-value",
                "Down From High%: down_from_high-value",
                "Up From Low%: up_from_low-value",
            ]
        );
        assert!(!reply.ends_with('\n'));
    }

    #[test]
    fn test_format_quote_ignores_language() {
        let record = record("1234");
        assert_eq!(
            format_reply(Some(&record), Language::Nepali),
            format_reply(Some(&record), Language::English)
        );
    }

    #[test]
    fn test_format_not_found() {
        let reply = format_reply(None, Language::Nepali);
        assert_eq!(reply, not_found_text(Language::Nepali));
        assert_eq!(reply.lines().count(), 3);

        let reply = format_reply(None, Language::English);
        assert_eq!(reply, not_found_text(Language::English));
    }

    #[test]
    fn test_format_is_pure() {
        let record = record("1,000.50");
        let formatter = PlainTextFormatter::default();
        assert_eq!(
            formatter.format_reply(Some(&record)),
            formatter.format_reply(Some(&record))
        );
        assert_eq!(formatter.format_reply(None), formatter.format_reply(None));
    }

    #[test]
    fn test_welcome_lists_examples() {
        for language in [Language::Nepali, Language::English] {
            let formatter = PlainTextFormatter::new(language);
            assert_eq!(formatter.language(), language);
            assert!(formatter.format_welcome().contains("NMB, SHINE, SHPC, SWBBL"));
        }
    }
}
