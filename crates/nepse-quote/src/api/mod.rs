//! Quote site access

pub mod parser;
pub mod quote_page;

pub use parser::{decode_body, detect_encoding, parse_quote_page};
pub use quote_page::QuotePageClient;
