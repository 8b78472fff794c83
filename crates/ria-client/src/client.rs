//! HTTP client for the AUTO.RIA developers API.
//!
//! One GET per operation with a per-request timeout, no retries. All
//! transport and API failures are mapped into [`ClientError`] at this
//! boundary so callers branch on a typed result instead of exceptions.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};
use crate::filter::{AveragePriceQuery, SearchFilter};
use crate::query::{self, QueryParam};
use crate::response::{SearchEnvelope, SearchPage};

/// Production endpoint for the AUTO.RIA developers API.
pub const BASE_URL: &str = "https://developers.ria.com/auto";

/// Per-request timeout. No retry: a stuck request is a local timeout
/// failure, never a process hang.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the AUTO.RIA search, info, and average-price endpoints.
///
/// Holds no API key itself; the key is passed into every operation so a
/// server session can swap keys without rebuilding the client.
#[derive(Debug, Clone)]
pub struct RiaClient {
    http: reqwest::Client,
    base_url: String,
}

impl RiaClient {
    /// Client against the production endpoint with the default timeout.
    pub fn new() -> ClientResult<Self> {
        Self::with_base_url(BASE_URL)
    }

    /// Client against a custom endpoint (tests, staging).
    pub fn with_base_url(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Client with a custom endpoint and timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Transport)?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Search vehicle listings.
    ///
    /// Validates the filter before touching the network, so a
    /// structurally inconsistent filter never produces a request URL.
    pub async fn search(&self, api_key: &str, filter: &SearchFilter) -> ClientResult<SearchPage> {
        filter.validate()?;
        let params = query::encode(filter, api_key);

        let url = format!("{}/search", self.base_url);
        debug!(page = filter.page, countpage = filter.countpage, "dispatching search request");

        let response = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let request_url = response.url().to_string();
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "upstream rejected search request");
            return Err(ClientError::api_error(status.as_u16(), body));
        }

        let envelope: SearchEnvelope = response
            .json()
            .await
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;

        Ok(SearchPage::from_envelope(envelope, filter, request_url))
    }

    /// Fetch the full detail record for a single listing.
    pub async fn car_info(&self, api_key: &str, auto_id: u64) -> ClientResult<Value> {
        let params = vec![
            ("api_key".to_string(), api_key.to_string()),
            ("auto_id".to_string(), auto_id.to_string()),
        ];
        self.get_json("info", &params).await
    }

    /// Fetch the market average price for a brand/model/year combination.
    pub async fn average_price(
        &self,
        api_key: &str,
        query: &AveragePriceQuery,
    ) -> ClientResult<Value> {
        let params = query::encode_average_price(query, api_key);
        self.get_json("average_price", &params).await
    }

    /// Issue a GET and parse the body as opaque JSON, with the shared
    /// transport/status/parse error mapping.
    async fn get_json(&self, endpoint: &str, params: &[QueryParam]) -> ClientResult<Value> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(endpoint, "dispatching request");

        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), endpoint, "upstream rejected request");
            return Err(ClientError::api_error(status.as_u16(), body));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))
    }
}
