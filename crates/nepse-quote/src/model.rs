//! Quote data model
//!
//! A [`QuoteRecord`] holds the ten fields scraped from one quote page. Values
//! are kept exactly as they appear on the page; nothing is parsed as a number.

use std::fmt;

/// Label of the symbol line in a reply
pub const SYMBOL_LABEL: &str = "Symbol";

/// One of the data fields carried by a quote page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteField {
    /// Last traded price
    LastPrice,
    ChangePercent,
    DayHigh,
    DayLow,
    Volume,
    Turnover,
    Week52High,
    Week52Low,
    /// Percentage below the 52 week high
    DownFromHigh,
    /// Percentage above the 52 week low
    UpFromLow,
}

impl QuoteField {
    /// All fields, in reply order
    pub const ALL: [Self; 10] = [
        Self::LastPrice,
        Self::ChangePercent,
        Self::DayHigh,
        Self::DayLow,
        Self::Volume,
        Self::Turnover,
        Self::Week52High,
        Self::Week52Low,
        Self::DownFromHigh,
        Self::UpFromLow,
    ];

    /// The `id` attribute of the element carrying this field
    pub fn element_id(self) -> &'static str {
        match self {
            Self::LastPrice => "last_price",
            Self::ChangePercent => "change_percent",
            Self::DayHigh => "day_high",
            Self::DayLow => "day_low",
            Self::Volume => "volume",
            Self::Turnover => "turn_over",
            Self::Week52High => "52_week_high",
            Self::Week52Low => "52_week_low",
            Self::DownFromHigh => "down_from_high",
            Self::UpFromLow => "up_from_low",
        }
    }

    /// Label used in replies
    pub fn label(self) -> &'static str {
        match self {
            Self::LastPrice => "LTP",
            Self::ChangePercent => "Change Percent",
            Self::DayHigh => "Day High",
            Self::DayLow => "Day Low",
            Self::Volume => "Volume",
            Self::Turnover => "Turn Over",
            Self::Week52High => "52 Week High",
            Self::Week52Low => "52 Week Low",
            Self::DownFromHigh => "Down From High%",
            Self::UpFromLow => "Up From Low%",
        }
    }
}

impl fmt::Display for QuoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of one ticker's market data at fetch time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    pub symbol: String,
    pub last_price: String,
    pub change_percent: String,
    pub day_high: String,
    pub day_low: String,
    pub volume: String,
    pub turnover: String,
    pub week52_high: String,
    pub week52_low: String,
    pub down_from_high_percent: String,
    pub up_from_low_percent: String,
}

impl QuoteRecord {
    /// Build a record by resolving every field through `field`
    ///
    /// The first failing field aborts the build, so a record is either
    /// complete or not produced at all.
    pub fn try_from_fields<E>(
        symbol: impl Into<String>,
        mut field: impl FnMut(QuoteField) -> Result<String, E>,
    ) -> Result<Self, E> {
        Ok(Self {
            symbol: symbol.into(),
            last_price: field(QuoteField::LastPrice)?,
            change_percent: field(QuoteField::ChangePercent)?,
            day_high: field(QuoteField::DayHigh)?,
            day_low: field(QuoteField::DayLow)?,
            volume: field(QuoteField::Volume)?,
            turnover: field(QuoteField::Turnover)?,
            week52_high: field(QuoteField::Week52High)?,
            week52_low: field(QuoteField::Week52Low)?,
            down_from_high_percent: field(QuoteField::DownFromHigh)?,
            up_from_low_percent: field(QuoteField::UpFromLow)?,
        })
    }

    /// Value of a single field
    pub fn get(&self, field: QuoteField) -> &str {
        match field {
            QuoteField::LastPrice => &self.last_price,
            QuoteField::ChangePercent => &self.change_percent,
            QuoteField::DayHigh => &self.day_high,
            QuoteField::DayLow => &self.day_low,
            QuoteField::Volume => &self.volume,
            QuoteField::Turnover => &self.turnover,
            QuoteField::Week52High => &self.week52_high,
            QuoteField::Week52Low => &self.week52_low,
            QuoteField::DownFromHigh => &self.down_from_high_percent,
            QuoteField::UpFromLow => &self.up_from_low_percent,
        }
    }

    /// `(label, value)` pairs in reply order, symbol first
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        std::iter::once((SYMBOL_LABEL, self.symbol.as_str())).chain(
            QuoteField::ALL
                .into_iter()
                .map(move |field| (field.label(), self.get(field))),
        )
    }
}
