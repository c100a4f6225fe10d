//! Backend REST client
//!
//! Implements the backend API for:
//! - Order history (filtered) and per-order recheck
//! - Open positions
//! - Tradable symbols
//!
//! Export and webhook URLs are never fetched here; the host opens or
//! displays them.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{DashboardError, Result};
use crate::types::{
    ApiErrorBody, Order, OrderFilter, Position, PositionsResponse, RecheckResult, Symbol,
    SymbolsResponse,
};

/// Header carrying the opaque auth key
pub const AUTH_HEADER: &str = "X-Auth-Key";

const EXPORT_PATH: &str = "/orders/export?format=csv";

/// Backend operations the dashboard needs.
///
/// The controller is generic over this so it can run against an in-memory
/// backend in tests.
#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    async fn list_orders(&self, auth_key: &str, filter: &OrderFilter) -> Result<Vec<Order>>;

    async fn list_positions(&self, auth_key: &str) -> Result<Vec<Position>>;

    /// Public endpoint, no auth key
    async fn list_symbols(&self, simulation: bool) -> Result<Vec<Symbol>>;

    async fn recheck_order(
        &self,
        auth_key: &str,
        order_id: i64,
        simulation: bool,
    ) -> Result<RecheckResult>;

    /// Absolute CSV export URL
    fn export_url(&self) -> String;

    /// Absolute webhook URL for the given mode
    fn webhook_url(&self, simulation: bool) -> String;
}

/// Build the `/orders` path; unset or empty filters are omitted
pub fn orders_path(limit: u32, filter: &OrderFilter) -> String {
    let mut path = format!("/orders?limit={limit}");
    let params = [
        ("status", &filter.status),
        ("action", &filter.action),
        ("symbol", &filter.symbol),
    ];
    for (key, value) in params {
        if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
            path.push_str(&format!("&{key}={}", urlencoding::encode(v)));
        }
    }
    path
}

pub fn symbols_path(simulation: bool) -> String {
    format!("/symbols?simulation={simulation}")
}

pub fn recheck_path(order_id: i64, simulation: bool) -> String {
    format!("/orders/{order_id}/recheck?simulation={simulation}")
}

/// Webhook path shown to the user; real trading adds `simulation=false`
pub fn webhook_path(simulation: bool) -> &'static str {
    if simulation {
        "/order"
    } else {
        "/order?simulation=false"
    }
}

/// reqwest-backed client for the trading backend
pub struct ApiClient {
    http: reqwest::Client,
    origin: String,
    order_limit: u32,
}

impl ApiClient {
    /// Create a client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
        }

        Ok(Self {
            http: builder.build()?,
            origin: config.origin().to_string(),
            order_limit: config.order_limit,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.origin)
    }

    /// Perform GET request, optionally authenticated
    async fn get<T: DeserializeOwned>(&self, path: &str, auth_key: Option<&str>) -> Result<T> {
        debug!(path, authenticated = auth_key.is_some(), "GET");

        let mut request = self.http.get(self.url(path));
        if let Some(key) = auth_key {
            request = request.header(AUTH_HEADER, key);
        }

        Self::handle_response(request.send().await?).await
    }

    /// Perform authenticated POST request with an empty body
    async fn post<T: DeserializeOwned>(&self, path: &str, auth_key: &str) -> Result<T> {
        debug!(path, "POST");

        let response = self
            .http
            .post(self.url(path))
            .header(AUTH_HEADER, auth_key)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Handle API response, checking for errors
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.bytes().await?;
        decode(status, &body)
    }
}

/// Map a response status and body to the payload or an error.
///
/// 401 is reported as [`DashboardError::Unauthorized`] whatever the body says;
/// other failures carry the backend's `detail`, or the raw body without one.
pub fn decode<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T> {
    if status == StatusCode::UNAUTHORIZED {
        warn!("backend rejected auth key");
        return Err(DashboardError::Unauthorized);
    }

    if !status.is_success() {
        let detail = serde_json::from_slice::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.detail_text())
            .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned());
        warn!(status = status.as_u16(), %detail, "backend request failed");
        return Err(DashboardError::Api {
            status: status.as_u16(),
            detail,
        });
    }

    Ok(serde_json::from_slice(body)?)
}

impl DashboardApi for ApiClient {
    async fn list_orders(&self, auth_key: &str, filter: &OrderFilter) -> Result<Vec<Order>> {
        self.get(&orders_path(self.order_limit, filter), Some(auth_key))
            .await
    }

    async fn list_positions(&self, auth_key: &str) -> Result<Vec<Position>> {
        let response: PositionsResponse = self.get("/positions", Some(auth_key)).await?;
        Ok(response.positions)
    }

    async fn list_symbols(&self, simulation: bool) -> Result<Vec<Symbol>> {
        let response: SymbolsResponse = self.get(&symbols_path(simulation), None).await?;
        Ok(response.symbols)
    }

    async fn recheck_order(
        &self,
        auth_key: &str,
        order_id: i64,
        simulation: bool,
    ) -> Result<RecheckResult> {
        self.post(&recheck_path(order_id, simulation), auth_key)
            .await
    }

    fn export_url(&self) -> String {
        self.url(EXPORT_PATH)
    }

    fn webhook_url(&self, simulation: bool) -> String {
        self.url(webhook_path(simulation))
    }
}
