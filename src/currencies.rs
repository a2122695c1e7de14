// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use serde::{Deserialize, Serialize};

use crate::models::{Currency, Money};

/// EUR-relative exchange rates for the supported currencies.
///
/// Each field is the value of 1 EUR in that currency; the EUR rate is
/// implicitly 1.0. Both values must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub eur_to_mkd: f64,
    pub eur_to_usd: f64,
}

impl RateTable {
    pub fn new(eur_to_mkd: f64, eur_to_usd: f64) -> Self {
        Self {
            eur_to_mkd,
            eur_to_usd,
        }
    }

    /// Conversion factor between two currencies, derived from the two
    /// EUR-relative rates.
    pub fn factor(&self, from: Currency, to: Currency) -> f64 {
        use Currency::*;

        match (from, to) {
            (Eur, Mkd) => self.eur_to_mkd,
            (Eur, Usd) => self.eur_to_usd,
            (Usd, Mkd) => self.eur_to_mkd / self.eur_to_usd,
            (Usd, Eur) => 1.0 / self.eur_to_usd,
            (Mkd, Eur) => 1.0 / self.eur_to_mkd,
            (Mkd, Usd) => self.eur_to_usd / self.eur_to_mkd,
            (Mkd, Mkd) | (Eur, Eur) | (Usd, Usd) => 1.0,
        }
    }
}

/// Convert an amount from one currency to another.
///
/// No rounding is applied; display formatting is a caller concern.
pub fn convert(amount: f64, from: Currency, to: Currency, rates: &RateTable) -> f64 {
    if from == to {
        return amount;
    }

    amount * rates.factor(from, to)
}

impl Money {
    /// Re-denominate into `desired`, converting the amount when the
    /// currencies differ.
    pub fn converted_to(self, desired: Currency, rates: &RateTable) -> Money {
        Money::new(convert(self.amount, self.currency, desired, rates), desired)
    }
}
