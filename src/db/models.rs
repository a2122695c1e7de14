use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::models::{Address, Buyer, Currency, Money, Product, UnsupportedCurrency};

/// A product row as stored in SQLite.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub product_name: String,
    pub product_category: String,
    pub quantity: i64,
    pub size: String,
    pub price: f64,
    pub currency: String,
}

impl TryFrom<ProductRow> for Product {
    type Error = UnsupportedCurrency;

    // Currency codes are validated on insert, so a failure here means the
    // database was modified out of band.
    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let currency = Currency::from_str(&row.currency)?;

        Ok(Product {
            id: row.id,
            name: row.product_name,
            category: row.product_category,
            quantity: row.quantity,
            size: row.size,
            price: Money::new(row.price, currency),
        })
    }
}

/// A buyer row as stored in SQLite, with the address columns flattened.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BuyerRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub credit_card: Option<String>,
    pub profile_created: DateTime<Utc>,
    pub address_street_name: String,
    pub address_street_number: String,
    pub address_zip_code: String,
    pub address_city: String,
    pub address_country: String,
}

impl From<BuyerRow> for Buyer {
    fn from(row: BuyerRow) -> Self {
        Buyer {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            credit_card: row.credit_card,
            time_profile_created: row.profile_created,
            address: Address {
                street_name: row.address_street_name,
                street_number: row.address_street_number,
                zip_code: row.address_zip_code,
                city: row.address_city,
                country: row.address_country,
            },
        }
    }
}
