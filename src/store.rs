// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::sqlite::SqlitePool;

use crate::db::models::{BuyerRow, ProductRow};
use crate::models::{Address, Buyer, Currency, Product};

/// Insert payload for a product. Category, size and currency are validated
/// by the handler before this struct is built.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub size: String,
    pub price: f64,
    pub currency: Currency,
}

/// Insert payload for a buyer. `credit_card` is None when the field was
/// omitted; a present value has already been validated.
#[derive(Debug, Clone)]
pub struct NewBuyer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub credit_card: Option<String>,
    pub address: Address,
}

/// All products, ordered by id ascending.
pub async fn list_products(pool: &SqlitePool) -> Result<Vec<Product>> {
    let rows = sqlx::query_as::<_, ProductRow>(
        r#"
        SELECT id, product_name, product_category, quantity, size, price, currency
        FROM products
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| {
            Product::try_from(row).context("stored product has an unsupported currency")
        })
        .collect()
}

/// Insert a product and return its id.
pub async fn insert_product(pool: &SqlitePool, product: &NewProduct) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO products (product_name, product_category, quantity, size, price, currency)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&product.name)
    .bind(&product.category)
    .bind(product.quantity)
    .bind(&product.size)
    .bind(product.price)
    .bind(product.currency.as_str())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Delete a product by id. Returns false when no such product exists.
pub async fn delete_product(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// All buyers, ordered by id ascending.
pub async fn list_buyers(pool: &SqlitePool) -> Result<Vec<Buyer>> {
    let rows = sqlx::query_as::<_, BuyerRow>(
        r#"
        SELECT id, first_name, last_name, email, credit_card, profile_created,
               address_street_name, address_street_number, address_zip_code,
               address_city, address_country
        FROM buyers
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Buyer::from).collect())
}

/// Insert a buyer, stamping the profile creation time, and return the id.
pub async fn insert_buyer(pool: &SqlitePool, buyer: &NewBuyer) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO buyers (
            first_name, last_name, email, credit_card, profile_created,
            address_street_name, address_street_number, address_zip_code,
            address_city, address_country
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&buyer.first_name)
    .bind(&buyer.last_name)
    .bind(&buyer.email)
    .bind(&buyer.credit_card)
    .bind(Utc::now())
    .bind(&buyer.address.street_name)
    .bind(&buyer.address.street_number)
    .bind(&buyer.address.zip_code)
    .bind(&buyer.address.city)
    .bind(&buyer.address.country)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Delete a buyer by id. Returns false when no such buyer exists.
pub async fn delete_buyer(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM buyers WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
