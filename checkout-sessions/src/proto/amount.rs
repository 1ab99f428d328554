//! Monetary amount in minor units.

use serde::{Deserialize, Serialize};

/// A monetary amount expressed in the minor units of its currency
/// (e.g. `{ "currency": "EUR", "value": 1000 }` is EUR 10.00).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amount {
    /// ISO 4217 currency code (e.g. `"EUR"`).
    pub currency: String,

    /// Amount in minor units.
    pub value: i64,
}

impl Amount {
    /// Creates a new amount.
    #[must_use]
    pub fn new(currency: impl Into<String>, value: i64) -> Self {
        Self {
            currency: currency.into(),
            value,
        }
    }
}
