use serde::{Deserialize, Serialize};

use super::currency::Money;

/// A product as it appears on the wire: flat `price` and `currency` fields
/// next to the descriptive ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub size: String,
    #[serde(flatten)]
    pub price: Money,
}
