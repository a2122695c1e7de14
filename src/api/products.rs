use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};

use crate::api::{require, ApiMessage, AppState};
use crate::error::AppError;
use crate::listing::{list_with_currency, Listing};
use crate::models::{Currency, Product};
use crate::store::{self, NewProduct};

const PRODUCT_CATEGORIES: [&str; 3] = ["TRENERKI", "PIZAMI", "BLUZI"];
const PRODUCT_SIZES: [&str; 4] = ["S", "M", "L", "XL"];

const NO_PRODUCTS_MESSAGE: &str = "There are no products in the database";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:currency", get(list_products_in_currency))
        .route("/delete/:id", delete(delete_product))
}

#[derive(Serialize)]
struct ProductList {
    success: bool,
    products: Vec<Product>,
}

async fn list_products(State(state): State<AppState>) -> Result<Response, AppError> {
    let products = store::list_products(&state.pool).await?;
    if products.is_empty() {
        return Ok(ApiMessage::empty(NO_PRODUCTS_MESSAGE).into_response());
    }

    Ok(Json(ProductList {
        success: true,
        products,
    })
    .into_response())
}

/// List all products re-denominated into the requested currency, cheapest
/// first. The rate lookup happens once per request.
async fn list_products_in_currency(
    State(state): State<AppState>,
    Path(currency): Path<String>,
) -> Result<Response, AppError> {
    let desired: Currency = currency.parse()?;

    let products = store::list_products(&state.pool).await?;
    if products.is_empty() {
        return Ok(ApiMessage::empty(NO_PRODUCTS_MESSAGE).into_response());
    }

    let rates = state.rates.get_rates().await;
    match list_with_currency(products, desired, &rates) {
        Listing::Empty => Ok(ApiMessage::empty(NO_PRODUCTS_MESSAGE).into_response()),
        Listing::Products(products) => Ok(Json(ProductList {
            success: true,
            products,
        })
        .into_response()),
    }
}

#[derive(Deserialize)]
struct CreateProductForm {
    name: Option<String>,
    category: Option<String>,
    quantity: Option<String>,
    size: Option<String>,
    price: Option<String>,
    currency: Option<String>,
}

async fn create_product(
    State(state): State<AppState>,
    Form(form): Form<CreateProductForm>,
) -> Result<Json<ApiMessage>, AppError> {
    let name = require(form.name, "name")?;
    let category = require(form.category, "category")?;
    let quantity = require(form.quantity, "quantity")?;
    let size = require(form.size, "size")?;
    let price = require(form.price, "price")?;
    let currency = require(form.currency, "currency")?;

    // Non-numeric quantity and price count as not provided. Prices must be
    // positive; a zero quantity is rejected the same way.
    let quantity = quantity.trim().parse::<i64>().ok().filter(|q| *q != 0);
    let price = price.trim().parse::<f64>().ok().filter(|p| *p > 0.0);

    let provided = !name.is_empty() && !category.is_empty() && !size.is_empty() && !currency.is_empty();
    let (quantity, price) = match (quantity, price) {
        (Some(quantity), Some(price)) if provided => (quantity, price),
        _ => {
            return Err(AppError::BadRequest(
                "You must provide all necessary data".to_string(),
            ))
        }
    };

    if !PRODUCT_CATEGORIES.contains(&category.to_uppercase().as_str()) {
        return Err(AppError::BadRequest(
            "Product category must be one of the following: Trenerki, pizami, bluzi".to_string(),
        ));
    }
    if !PRODUCT_SIZES.contains(&size.to_uppercase().as_str()) {
        return Err(AppError::BadRequest(
            "Product size must be one of the following: S, M, L, XL".to_string(),
        ));
    }
    let currency: Currency = currency.parse()?;

    let product = NewProduct {
        name,
        category,
        quantity,
        size: size.to_uppercase(),
        price,
        currency,
    };
    store::insert_product(&state.pool, &product).await?;

    Ok(ApiMessage::ok("Product successfully added to database"))
}

async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiMessage>, AppError> {
    if !store::delete_product(&state.pool, id).await? {
        return Err(AppError::NotFound(format!(
            "No product with id {id} in database"
        )));
    }

    Ok(ApiMessage::ok(format!(
        "Product with id {id} successfully deleted from database"
    )))
}
