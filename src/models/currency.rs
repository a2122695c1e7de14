use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A currency code supported by the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Mkd,
    Eur,
    Usd,
}

/// Rejection for a currency code outside the supported set. The message is
/// part of the API surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Currency must be one of the following: MKD, EUR or USD")]
pub struct UnsupportedCurrency(pub String);

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Mkd => "MKD",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = UnsupportedCurrency;

    // Codes arrive from path parameters and form fields in any casing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MKD" => Ok(Currency::Mkd),
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            _ => Err(UnsupportedCurrency(s.to_string())),
        }
    }
}

/// An amount denominated in one of the supported currencies.
///
/// Serializes flat into the product wire shape, i.e. as sibling `price` and
/// `currency` fields rather than a nested object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Money {
    #[serde(rename = "price")]
    pub amount: f64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }
}
