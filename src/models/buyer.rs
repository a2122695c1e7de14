use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street_name: String,
    pub street_number: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
}

/// A buyer as it appears on the wire, with the address grouped into a
/// nested object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buyer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub credit_card: Option<String>,
    pub time_profile_created: DateTime<Utc>,
    pub address: Address,
}
