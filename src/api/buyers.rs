use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};

use crate::api::{require, ApiMessage, AppState};
use crate::error::AppError;
use crate::models::{Address, Buyer};
use crate::store::{self, NewBuyer};
use crate::validation::validate_card_number;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_buyers).post(create_buyer))
        .route("/delete/:id", delete(delete_buyer))
}

#[derive(Serialize)]
struct BuyerList {
    success: bool,
    buyers: Vec<Buyer>,
}

async fn list_buyers(State(state): State<AppState>) -> Result<Response, AppError> {
    let buyers = store::list_buyers(&state.pool).await?;
    if buyers.is_empty() {
        return Ok(ApiMessage::empty("There are no buyers in the database").into_response());
    }

    Ok(Json(BuyerList {
        success: true,
        buyers,
    })
    .into_response())
}

#[derive(Deserialize)]
struct CreateBuyerForm {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    credit_card: Option<String>,
    address_street_name: Option<String>,
    address_street_number: Option<String>,
    address_zip_code: Option<String>,
    address_city: Option<String>,
    address_country: Option<String>,
}

async fn create_buyer(
    State(state): State<AppState>,
    Form(form): Form<CreateBuyerForm>,
) -> Result<Json<ApiMessage>, AppError> {
    let first_name = require(form.first_name, "first_name")?;
    let last_name = require(form.last_name, "last_name")?;
    let email = require(form.email, "email")?;
    let credit_card = require(form.credit_card, "credit_card")?;
    let address_street_name = require(form.address_street_name, "address_street_name")?;
    let address_street_number = require(form.address_street_number, "address_street_number")?;
    let address_zip_code = require(form.address_zip_code, "address_zip_code")?;
    let address_city = require(form.address_city, "address_city")?;
    let address_country = require(form.address_country, "address_country")?;

    // The credit card is optional: an empty value is stored as NULL, a
    // present one must pass structural validation.
    let credit_card = match credit_card.as_str() {
        "" => None,
        number => {
            validate_card_number(number)?;
            Some(number.to_string())
        }
    };

    if first_name.is_empty()
        || last_name.is_empty()
        || email.is_empty()
        || address_street_name.is_empty()
        || address_street_number.is_empty()
        || address_zip_code.is_empty()
        || address_city.is_empty()
        || address_country.is_empty()
    {
        return Err(AppError::BadRequest(
            "You must provide all necessary data".to_string(),
        ));
    }

    let buyer = NewBuyer {
        first_name,
        last_name,
        email,
        credit_card,
        address: Address {
            street_name: address_street_name,
            street_number: address_street_number,
            zip_code: address_zip_code,
            city: address_city,
            country: address_country,
        },
    };
    store::insert_buyer(&state.pool, &buyer).await?;

    Ok(ApiMessage::ok("Buyer successfully added to database"))
}

async fn delete_buyer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiMessage>, AppError> {
    if !store::delete_buyer(&state.pool, id).await? {
        return Err(AppError::NotFound(format!(
            "No buyer with id {id} in database"
        )));
    }

    Ok(ApiMessage::ok(format!(
        "Buyer with id {id} successfully deleted from database"
    )))
}
