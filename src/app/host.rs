//! Presentation boundary
//!
//! The controller never touches markup. It reads the input controls and
//! pushes view-models through [`DashboardView`]; the host decides how they
//! reach the screen.

use crate::dashboard::view::{
    CopyFeedback, CopyTarget, ModeView, OrderRow, OrderStats, PositionRow, PositionStats,
    RecheckButton, TableView,
};
use crate::error::Result;
use crate::types::{OrderFilter, Symbol, Tab};

/// Live state of the input controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    pub auth_key: String,
    /// Simulation checkbox; unchecked means real trading
    pub simulation: bool,
    pub filter: OrderFilter,
    pub symbol_query: String,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            auth_key: String::new(),
            simulation: true,
            filter: OrderFilter::default(),
            symbol_query: String::new(),
        }
    }
}

impl Inputs {
    /// Auth key exactly as typed, `None` when the field is empty
    pub fn auth_key(&self) -> Option<&str> {
        Some(self.auth_key.as_str()).filter(|k| !k.is_empty())
    }
}

/// Everything the controller can do to the screen
pub trait DashboardView {
    /// Read the input controls as they are right now
    fn inputs(&self) -> Inputs;

    fn show_error(&mut self, message: &str);
    fn hide_error(&mut self);

    fn render_orders(&mut self, table: TableView<OrderRow>);
    fn render_order_stats(&mut self, stats: OrderStats);
    fn render_positions(&mut self, table: TableView<PositionRow>);
    fn render_position_stats(&mut self, stats: PositionStats);
    fn render_symbols(&mut self, table: TableView<Symbol>);
    fn render_symbol_count(&mut self, count: usize);
    fn render_mode(&mut self, mode: ModeView);

    fn activate_tab(&mut self, tab: Tab);
    fn set_recheck_button(&mut self, order_id: i64, state: RecheckButton);

    /// Blocking notification
    fn alert(&mut self, message: &str);

    /// Navigate to a URL outside the page (new tab, download)
    fn open_url(&mut self, url: &str) -> Result<()>;

    fn write_clipboard(&mut self, text: &str) -> Result<()>;

    /// Show copy confirmation; the host reverts it after `feedback.revert_after`
    fn flash_copied(&mut self, target: CopyTarget, feedback: CopyFeedback);
}
