//! Common types for the dashboard
//!
//! Wire models mirror the backend's JSON verbatim. Enumerated fields are
//! closed enums with a raw fallback so an unexpected value never fails a
//! whole response.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Order lifecycle status as stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Submitted,
    Filled,
    PartialFilled,
    Cancelled,
    Failed,
    NoAction,
    Success,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Submitted => "submitted",
            OrderStatus::Filled => "filled",
            OrderStatus::PartialFilled => "partial_filled",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Failed => "failed",
            OrderStatus::NoAction => "no_action",
            OrderStatus::Success => "success",
            OrderStatus::Other(raw) => raw,
        }
    }

    /// Orders still open on the exchange side can be rechecked
    pub fn can_recheck(&self) -> bool {
        matches!(
            self,
            OrderStatus::Submitted | OrderStatus::Pending | OrderStatus::PartialFilled
        )
    }

    /// Counted in the "success" summary card
    pub fn is_success(&self) -> bool {
        matches!(self, OrderStatus::Filled | OrderStatus::Success)
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => OrderStatus::Pending,
            "submitted" => OrderStatus::Submitted,
            "filled" => OrderStatus::Filled,
            "partial_filled" => OrderStatus::PartialFilled,
            "cancelled" => OrderStatus::Cancelled,
            "failed" => OrderStatus::Failed,
            "no_action" => OrderStatus::NoAction,
            "success" => OrderStatus::Success,
            _ => OrderStatus::Other(raw),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Webhook order action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderAction {
    LongEntry,
    LongExit,
    ShortEntry,
    ShortExit,
    Other(String),
}

impl OrderAction {
    pub fn as_str(&self) -> &str {
        match self {
            OrderAction::LongEntry => "long_entry",
            OrderAction::LongExit => "long_exit",
            OrderAction::ShortEntry => "short_entry",
            OrderAction::ShortExit => "short_exit",
            OrderAction::Other(raw) => raw,
        }
    }
}

impl From<String> for OrderAction {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "long_entry" => OrderAction::LongEntry,
            "long_exit" => OrderAction::LongExit,
            "short_entry" => OrderAction::ShortEntry,
            "short_exit" => OrderAction::ShortExit,
            _ => OrderAction::Other(raw),
        }
    }
}

impl From<OrderAction> for String {
    fn from(action: OrderAction) -> Self {
        match action {
            OrderAction::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Exchange-side order status reported by a recheck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FillStatus {
    PendingSubmit,
    PreSubmitted,
    Submitted,
    Filled,
    PartFilled,
    Cancelled,
    Failed,
    Other(String),
}

impl FillStatus {
    pub fn as_str(&self) -> &str {
        match self {
            FillStatus::PendingSubmit => "PendingSubmit",
            FillStatus::PreSubmitted => "PreSubmitted",
            FillStatus::Submitted => "Submitted",
            FillStatus::Filled => "Filled",
            FillStatus::PartFilled => "PartFilled",
            FillStatus::Cancelled => "Cancelled",
            FillStatus::Failed => "Failed",
            FillStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for FillStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "PendingSubmit" => FillStatus::PendingSubmit,
            "PreSubmitted" => FillStatus::PreSubmitted,
            "Submitted" => FillStatus::Submitted,
            "Filled" => FillStatus::Filled,
            "PartFilled" => FillStatus::PartFilled,
            "Cancelled" => FillStatus::Cancelled,
            "Failed" => FillStatus::Failed,
            _ => FillStatus::Other(raw),
        }
    }
}

impl From<FillStatus> for String {
    fn from(status: FillStatus) -> Self {
        match status {
            FillStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Position direction; the backend sends `Buy`/`Sell` in varying case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    Buy,
    Sell,
}

impl From<String> for Direction {
    fn from(raw: String) -> Self {
        if raw.eq_ignore_ascii_case("buy") {
            Direction::Buy
        } else {
            Direction::Sell
        }
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Buy => "Buy".to_string(),
            Direction::Sell => "Sell".to_string(),
        }
    }
}

/// A row of the backend's order history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub symbol: String,
    #[serde(default)]
    pub code: Option<String>,
    pub action: OrderAction,
    pub quantity: i64,
    pub status: OrderStatus,
    #[serde(default)]
    pub fill_quantity: Option<f64>,
    #[serde(default)]
    pub fill_price: Option<f64>,
    #[serde(default)]
    pub error_message: Option<String>,
    pub created_at: String,
}

/// An open futures position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub code: String,
    pub direction: Direction,
    pub quantity: f64,
    pub price: f64,
    pub last_price: f64,
    pub pnl: f64,
}

/// A tradable symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Identifier used in webhook orders
    pub symbol: String,
    /// Exchange contract code
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
}

impl Symbol {
    /// Case-insensitive substring match on symbol, code or name.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.symbol.to_lowercase().contains(needle)
            || self.code.to_lowercase().contains(needle)
            || self.name.to_lowercase().contains(needle)
    }
}

/// API response for the positions endpoint
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PositionsResponse {
    #[serde(default)]
    pub positions: Vec<Position>,
}

/// API response for the symbols endpoint
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SymbolsResponse {
    #[serde(default)]
    pub symbols: Vec<Symbol>,
}

/// A single exchange deal attached to a recheck
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: f64,
}

/// Result of `POST /orders/{id}/recheck`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecheckResult {
    pub previous_status: OrderStatus,
    pub current_status: OrderStatus,
    pub current_fill_status: FillStatus,
    /// Zero when nothing filled, whether the key is missing or null
    #[serde(default, deserialize_with = "null_as_default")]
    pub fill_quantity: f64,
    #[serde(default)]
    pub fill_price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deals: Vec<Deal>,
}

/// FastAPI-style error body
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ApiErrorBody {
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        }
    }
}

/// Order filter controls; empty values are treated as unset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub status: Option<String>,
    pub action: Option<String>,
    pub symbol: Option<String>,
}

/// Dashboard tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Orders,
    Positions,
    Symbols,
}

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Orders => "orders",
            Tab::Positions => "positions",
            Tab::Symbols => "symbols",
        }
    }
}
