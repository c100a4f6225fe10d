//! View-models for the dashboard tables and cards
//!
//! Pure functions from backend data to what the page shows. Nothing here
//! touches the network or the host.

use std::time::Duration;

use super::format::{fill_info, format_locale, format_order_time, format_signed};
use super::labels::{
    ActionStyle, DirectionStyle, StatusBadge, action_style, direction_style, fill_status_label,
    status_badge,
};
use crate::types::{Order, Position, RecheckResult, Symbol};

pub const LOADING: &str = "載入中...";
pub const LOAD_FAILED: &str = "載入失敗";
pub const EMPTY_ORDERS: &str = "無委託紀錄";
pub const EMPTY_POSITIONS: &str = "目前無持倉";
pub const EMPTY_SYMBOLS: &str = "無符合的商品";
pub const SYMBOLS_FAILED: &str = "載入失敗: 無法取得商品列表";

/// Content of one table region
#[derive(Debug, Clone, PartialEq)]
pub enum TableView<R> {
    Loading,
    Empty(&'static str),
    Failed(String),
    Rows(Vec<R>),
}

impl<R> TableView<R> {
    fn from_rows(rows: Vec<R>, empty: &'static str) -> Self {
        if rows.is_empty() {
            TableView::Empty(empty)
        } else {
            TableView::Rows(rows)
        }
    }

    pub fn rows(&self) -> &[R] {
        match self {
            TableView::Rows(rows) => rows,
            _ => &[],
        }
    }
}

/// Exchange code worth showing next to the symbol
fn distinct_code(symbol: &str, code: Option<&str>) -> Option<String> {
    code.filter(|c| !c.is_empty() && *c != symbol)
        .map(str::to_string)
}

// ============================================================================
// Orders
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub id: i64,
    pub symbol: String,
    pub code: Option<String>,
    pub action: ActionStyle,
    pub quantity: i64,
    pub status: StatusBadge,
    /// Tooltip for the warning marker
    pub error: Option<String>,
    pub fill: String,
    pub time: String,
    pub can_recheck: bool,
}

impl OrderRow {
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: order.id,
            symbol: order.symbol.clone(),
            code: distinct_code(&order.symbol, order.code.as_deref()),
            action: action_style(&order.action),
            quantity: order.quantity,
            status: status_badge(&order.status),
            error: order.error_message.clone().filter(|m| !m.is_empty()),
            fill: fill_info(order.fill_quantity, order.fill_price),
            time: format_order_time(&order.created_at),
            can_recheck: order.status.can_recheck(),
        }
    }
}

/// Rows in server order
pub fn orders_table(orders: &[Order]) -> TableView<OrderRow> {
    TableView::from_rows(orders.iter().map(OrderRow::from_order).collect(), EMPTY_ORDERS)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderStats {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
}

pub fn order_stats(orders: &[Order]) -> OrderStats {
    OrderStats {
        total: orders.len(),
        success: orders.iter().filter(|o| o.status.is_success()).count(),
        failed: orders
            .iter()
            .filter(|o| o.status == crate::types::OrderStatus::Failed)
            .count(),
    }
}

/// Recheck button state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecheckButton {
    Idle,
    Busy,
}

impl RecheckButton {
    pub fn label(self) -> &'static str {
        match self {
            RecheckButton::Idle => "🔄",
            RecheckButton::Busy => "⏳",
        }
    }

    pub fn disabled(self) -> bool {
        self == RecheckButton::Busy
    }
}

/// Alert text after a successful recheck
pub fn recheck_summary(order_id: i64, result: &RecheckResult) -> String {
    let mut msg = format!("訂單 #{order_id} 狀態更新:\n");
    msg.push_str(&format!(
        "• 狀態: {} → {}\n",
        result.previous_status, result.current_status
    ));
    msg.push_str(&format!(
        "• 交易所狀態: {}\n",
        fill_status_label(&result.current_fill_status)
    ));
    if result.fill_quantity > 0.0 {
        let price = result
            .fill_price
            .map_or_else(|| "-".to_string(), |p| format!("{p:.2}"));
        msg.push_str(&format!("• 成交: {} 口 @ {price}\n", result.fill_quantity));
    }
    if !result.deals.is_empty() {
        msg.push_str(&format!("• 成交明細: {} 筆", result.deals.len()));
    }
    msg
}

// ============================================================================
// Positions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PositionRow {
    pub symbol: String,
    pub code: Option<String>,
    pub direction: DirectionStyle,
    pub quantity: String,
    pub price: String,
    pub last_price: String,
    pub pnl: String,
    pub pnl_positive: bool,
}

impl PositionRow {
    pub fn from_position(position: &Position) -> Self {
        Self {
            symbol: position.symbol.clone(),
            code: distinct_code(&position.symbol, Some(position.code.as_str())),
            direction: direction_style(position.direction),
            quantity: position.quantity.to_string(),
            price: format_locale(position.price),
            last_price: format_locale(position.last_price),
            pnl: format_signed(position.pnl),
            pnl_positive: position.pnl >= 0.0,
        }
    }

    pub fn pnl_class(&self) -> &'static str {
        pnl_class(self.pnl_positive)
    }
}

pub fn pnl_class(positive: bool) -> &'static str {
    if positive { "pnl-positive" } else { "pnl-negative" }
}

pub fn positions_table(positions: &[Position]) -> TableView<PositionRow> {
    TableView::from_rows(
        positions.iter().map(PositionRow::from_position).collect(),
        EMPTY_POSITIONS,
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionStats {
    pub count: usize,
    pub total_pnl: f64,
    /// Signed, locale formatted total
    pub total_pnl_text: String,
    /// Summary card is styled positive iff total >= 0
    pub positive: bool,
}

pub fn position_stats(positions: &[Position]) -> PositionStats {
    let total_pnl: f64 = positions.iter().map(|p| p.pnl).sum();
    PositionStats {
        count: positions.len(),
        total_pnl,
        total_pnl_text: format_signed(total_pnl),
        positive: total_pnl >= 0.0,
    }
}

// ============================================================================
// Symbols
// ============================================================================

/// Case-insensitive substring filter over symbol, code and name
pub fn filter_symbols<'a>(symbols: &'a [Symbol], query: &str) -> Vec<&'a Symbol> {
    let needle = query.to_lowercase();
    symbols.iter().filter(|s| s.matches(&needle)).collect()
}

pub fn symbols_table(symbols: &[Symbol], query: &str) -> TableView<Symbol> {
    TableView::from_rows(
        filter_symbols(symbols, query).into_iter().cloned().collect(),
        EMPTY_SYMBOLS,
    )
}

// ============================================================================
// Mode & clipboard
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelEmphasis {
    pub color: &'static str,
    pub bold: bool,
}

const DIM: LabelEmphasis = LabelEmphasis { color: "#71717a", bold: false };

/// Webhook card state for the current trading mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeView {
    pub simulation: bool,
    pub webhook_url: String,
    pub show_real_warning: bool,
    pub show_sim_info: bool,
    pub sim_label: LabelEmphasis,
    pub real_label: LabelEmphasis,
}

pub fn mode_view(simulation: bool, webhook_url: String) -> ModeView {
    if simulation {
        ModeView {
            simulation,
            webhook_url,
            show_real_warning: false,
            show_sim_info: true,
            sim_label: LabelEmphasis { color: "#22c55e", bold: true },
            real_label: DIM,
        }
    } else {
        ModeView {
            simulation,
            webhook_url,
            show_real_warning: true,
            show_sim_info: false,
            sim_label: DIM,
            real_label: LabelEmphasis { color: "#ef4444", bold: true },
        }
    }
}

/// What a copy button copied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyTarget {
    Webhook,
    Symbol(String),
}

/// Transient confirmation shown on a copy button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyFeedback {
    pub label: &'static str,
    pub revert_after: Duration,
}

impl CopyTarget {
    pub fn feedback(&self) -> CopyFeedback {
        match self {
            CopyTarget::Webhook => CopyFeedback {
                label: "已複製！",
                revert_after: Duration::from_millis(2000),
            },
            CopyTarget::Symbol(_) => CopyFeedback {
                label: "✓ 已複製",
                revert_after: Duration::from_millis(1500),
            },
        }
    }
}
