//! Reuters Instrument Codes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{Component, Result, StyleError};

/// An instrument code paired with its exchange suffix, e.g. `AAPL.O`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRic")]
pub struct Ric {
    /// Instrument code (e.g., "AAPL").
    code: String,
    /// Exchange code (e.g., "O" for Nasdaq).
    exchange: String,
    /// Company or instrument name (e.g., "Apple Inc").
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

impl Ric {
    /// Creates a new RIC from its two parts.
    ///
    /// # Errors
    ///
    /// Returns an error if either part is empty or contains a `.` or
    /// whitespace.
    pub fn new(code: impl Into<String>, exchange: impl Into<String>) -> Result<Self> {
        let code = code.into();
        let exchange = exchange.into();
        check_part(Component::InstrumentCode, &code)?;
        check_part(Component::ExchangeCode, &exchange)?;
        Ok(Self {
            code,
            exchange,
            title: None,
        })
    }

    /// Parses a combined `CODE.EXCHANGE` string, splitting at the last `.`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no exchange suffix or either part is
    /// malformed.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let (code, exchange) = input.rsplit_once('.').ok_or(StyleError::EmptyComponent {
            field: Component::ExchangeCode,
        })?;
        Self::new(code, exchange)
    }

    /// Attaches a human-readable title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns the instrument code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the exchange code.
    #[must_use]
    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    /// Returns the title, if one was attached.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Renders the RIC as written in copy: `CODE.EXCHANGE`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Ric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.code, self.exchange)
    }
}

impl FromStr for Ric {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn check_part(field: Component, part: &str) -> Result<()> {
    if part.is_empty() {
        return Err(StyleError::EmptyComponent { field });
    }
    if let Some((position, ch)) = part
        .char_indices()
        .find(|&(_, c)| c == '.' || c.is_whitespace())
    {
        return Err(StyleError::InvalidComponent {
            field,
            ch,
            position,
        });
    }
    Ok(())
}

#[derive(Deserialize)]
struct RawRic {
    code: String,
    exchange: String,
    #[serde(default)]
    title: Option<String>,
}

impl TryFrom<RawRic> for Ric {
    type Error = StyleError;

    fn try_from(raw: RawRic) -> Result<Self> {
        let ric = Self::new(raw.code, raw.exchange)?;
        Ok(match raw.title {
            Some(title) => ric.with_title(title),
            None => ric,
        })
    }
}
