// SPDX-FileCopyrightText: 2025 Joost van der Laan
// SPDX-License-Identifier: AGPL-3.0-only

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::warn;

use crate::config::RatesConfig;
use crate::currencies::RateTable;

/// Failure of a single rate lookup. Never surfaced to API callers; the
/// provider resolves every failure with the configured fallback table.
#[derive(Debug, thiserror::Error)]
pub enum RateFetchError {
    #[error("rate request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("rate service returned status {0}")]
    Status(StatusCode),
    #[error("rate response has no rate for {0}")]
    MissingRate(&'static str),
    #[error("rate response has a non-positive rate for {0}")]
    InvalidRate(&'static str),
    #[error("malformed rate response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl RateFetchError {
    /// Transient failures may succeed on a later request; the rest keep
    /// failing until the provider or credentials change.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            RateFetchError::Transport(_) | RateFetchError::Status(_)
        )
    }
}

/// Source of current EUR-relative exchange rates.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch_rates(&self) -> Result<RateTable, RateFetchError>;
}

// A quota-exceeded fixer.io reply still has HTTP 200 but no `rates` object,
// so the field defaults to empty and fails the MKD/USD extraction below.
#[derive(Debug, Deserialize)]
struct FixerResponse {
    #[serde(default)]
    rates: HashMap<String, f64>,
}

fn parse_rate_table(body: &str) -> Result<RateTable, RateFetchError> {
    let response: FixerResponse = serde_json::from_str(body)?;

    let eur_to_mkd = extract_rate(&response.rates, "MKD")?;
    let eur_to_usd = extract_rate(&response.rates, "USD")?;

    Ok(RateTable::new(eur_to_mkd, eur_to_usd))
}

fn extract_rate(rates: &HashMap<String, f64>, code: &'static str) -> Result<f64, RateFetchError> {
    let rate = rates
        .get(code)
        .copied()
        .ok_or(RateFetchError::MissingRate(code))?;
    if rate <= 0.0 {
        return Err(RateFetchError::InvalidRate(code));
    }

    Ok(rate)
}

/// Client for a fixer.io-style exchange rate service. Rates are quoted
/// against an implicit EUR base.
pub struct FixerClient {
    client: Client,
    endpoint: String,
    access_key: String,
}

impl FixerClient {
    pub fn new(config: &RatesConfig, access_key: String) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            access_key,
        })
    }
}

#[async_trait]
impl RateSource for FixerClient {
    async fn fetch_rates(&self) -> Result<RateTable, RateFetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("access_key", self.access_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateFetchError::Status(status));
        }

        let body = response.text().await?;
        parse_rate_table(&body)
    }
}

/// Produces the exchange rates used by the listing pipeline.
///
/// Infallible from the caller's perspective: when the source fails for any
/// reason the configured fallback table is returned instead, at the cost of
/// potential staleness.
pub struct RateProvider {
    source: Box<dyn RateSource>,
    fallback: RateTable,
}

impl RateProvider {
    pub fn new(source: Box<dyn RateSource>, fallback: RateTable) -> Self {
        Self { source, fallback }
    }

    pub async fn get_rates(&self) -> RateTable {
        match self.source.fetch_rates().await {
            Ok(rates) => rates,
            Err(e) => {
                warn!(
                    transient = e.is_transient(),
                    "using fallback exchange rates: {e}"
                );
                self.fallback
            }
        }
    }
}
