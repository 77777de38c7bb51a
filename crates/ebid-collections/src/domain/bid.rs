//! Bid record and currency parsing.

use std::fmt;

use thiserror::Error;

/// A single auction bid as read from the monthly sales export.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bid {
    /// Nominally unique identifier; the container key. Uniqueness is not
    /// validated at load time.
    pub id: String,
    /// Free-text title; the sorting exercises key on it.
    pub title: String,
    /// Categorical fund tag.
    pub fund: String,
    /// Winning amount in dollars.
    pub amount: f64,
}

impl Bid {
    /// Create a bid from its four fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        fund: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            fund: fund.into(),
            amount,
        }
    }
}

// `id: title | amount | fund` - the line format every exercise prints.
impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} | {:.2} | {}",
            self.id, self.title, self.amount, self.fund
        )
    }
}

/// Error returned when a currency string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a currency amount: {raw:?}")]
pub struct ParseAmountError {
    /// The rejected input.
    pub raw: String,
}

/// Parse a currency-formatted amount such as `$1,400.00`.
///
/// The dollar sign and thousands separators are stripped before parsing.
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`ParseAmountError`] when nothing parsable remains.
pub fn parse_amount(raw: &str) -> Result<f64, ParseAmountError> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();

    cleaned.parse::<f64>().map_err(|_| ParseAmountError {
        raw: raw.to_string(),
    })
}
