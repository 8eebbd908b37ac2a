//! Chat-facing output

pub mod formatter;

pub use formatter::{Formatter, PlainTextFormatter, format_reply, not_found_text, welcome_text};
