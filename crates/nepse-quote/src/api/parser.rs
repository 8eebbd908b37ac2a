//! Quote page decoding and field extraction

use crate::error::{QuoteError, Result};
use crate::model::{QuoteField, QuoteRecord};
use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use scraper::{Html, Selector};

/// Guess the text encoding of a response body
///
/// Falls back to UTF-8 when the detector is not confident.
pub fn detect_encoding(body: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(body, true);

    let (encoding, confident) = detector.guess_assess(None, true);
    if confident { encoding } else { UTF_8 }
}

/// Decode a response body into text
///
/// A byte order mark overrides the detected encoding. Malformed sequences are
/// an error rather than being replaced.
pub fn decode_body(symbol: &str, body: &[u8]) -> Result<String> {
    let detected = detect_encoding(body);
    let (text, used, had_errors) = detected.decode(body);

    if had_errors {
        return Err(QuoteError::Decode {
            symbol: symbol.to_string(),
            reason: format!("malformed {} sequence in response body", used.name()),
        });
    }

    Ok(text.into_owned())
}

/// Extract a [`QuoteRecord`] from a decoded quote page
pub fn parse_quote_page(symbol: &str, html: &str) -> Result<QuoteRecord> {
    let document = Html::parse_document(html);
    QuoteRecord::try_from_fields(symbol, |field| field_text(&document, symbol, field))
}

fn field_text(document: &Html, symbol: &str, field: QuoteField) -> Result<String> {
    let selector = field_selector(field)?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect())
        .ok_or_else(|| QuoteError::MissingField {
            symbol: symbol.to_string(),
            field,
        })
}

// Attribute form, since `#52_week_high` is not a valid id selector.
fn field_selector(field: QuoteField) -> Result<Selector> {
    let css = format!(r#"span[id="{}"]"#, field.element_id());
    Selector::parse(&css).map_err(|e| QuoteError::Selector(format!("{css}: {e}")))
}
