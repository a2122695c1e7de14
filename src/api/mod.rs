use std::sync::Arc;

use axum::{Json, Router};
use serde::Serialize;
use sqlx::sqlite::SqlitePool;

use crate::error::AppError;
use crate::rates::RateProvider;

pub mod buyers;
pub mod products;

/// Shared state for all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub rates: Arc<RateProvider>,
}

/// Assemble the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/buyers", buyers::routes())
        .nest("/products", products::routes())
        .with_state(state)
}

/// Message-only response body, `{"success": ..., "message": ...}`.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}

impl ApiMessage {
    pub fn ok(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.into(),
        })
    }

    /// An empty collection is reported with the failure shape for
    /// compatibility, but stays a 200 response; it is not an error.
    pub fn empty(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: false,
            message: message.into(),
        })
    }
}

pub(crate) fn require(field: Option<String>, key: &str) -> Result<String, AppError> {
    field.ok_or_else(|| AppError::BadRequest(format!("Key '{key}' must be in request form")))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    use super::{router, AppState};
    use crate::currencies::RateTable;
    use crate::rates::{RateFetchError, RateProvider, RateSource};

    struct OfflineSource;

    #[async_trait::async_trait]
    impl RateSource for OfflineSource {
        async fn fetch_rates(&self) -> Result<RateTable, RateFetchError> {
            Err(RateFetchError::Status(
                reqwest::StatusCode::TOO_MANY_REQUESTS,
            ))
        }
    }

    /// Router over a fresh in-memory database and a rate source that always
    /// fails, so listings use the fallback table {MKD: 61.63, USD: 1.10}.
    pub(crate) async fn test_app() -> Router {
        let pool = crate::db::create_test_pool().await.expect("test pool");
        let rates = RateProvider::new(Box::new(OfflineSource), RateTable::new(61.63, 1.10));

        router(AppState {
            pool,
            rates: Arc::new(rates),
        })
    }

    /// Drive one request through the router and decode the JSON body.
    pub(crate) async fn send(
        app: Router,
        method: &str,
        uri: &str,
        form: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match form {
            Some(form) => {
                builder = builder.header("content-type", "application/x-www-form-urlencoded");
                Body::from(form.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .oneshot(builder.body(body).expect("request"))
            .await
            .expect("response");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json = serde_json::from_slice(&bytes).expect("json body");

        (status, json)
    }
}
