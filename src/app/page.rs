//! HTML snapshot host
//!
//! Implements the presentation boundary by keeping the latest view-models in
//! a [`PageModel`] and rendering the whole page on demand. Alerts, opened
//! URLs and clipboard writes are recorded for the caller to surface.

use tracing::debug;

use super::host::{DashboardView, Inputs};
use crate::dashboard::view::{
    CopyFeedback, CopyTarget, ModeView, OrderRow, OrderStats, PositionRow, PositionStats,
    RecheckButton, TableView,
};
use crate::dashboard::{PageModel, dashboard_html};
use crate::error::Result;
use crate::types::{Symbol, Tab};

#[derive(Debug, Clone, Default)]
pub struct HtmlPage {
    inputs: Inputs,
    page: PageModel,
    alerts: Vec<String>,
    opened: Vec<String>,
    clipboard: Option<String>,
}

impl HtmlPage {
    pub fn new(inputs: Inputs) -> Self {
        Self {
            inputs,
            ..Self::default()
        }
    }

    /// Mutable access to the input controls, as a user typing would have
    pub fn inputs_mut(&mut self) -> &mut Inputs {
        &mut self.inputs
    }

    pub fn page(&self) -> &PageModel {
        &self.page
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn opened_urls(&self) -> &[String] {
        &self.opened
    }

    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    /// Copy confirmation timer elapsed
    pub fn revert_copied(&mut self) {
        self.page.copied = None;
    }

    /// Full HTML document for the current state
    pub fn render(&self) -> String {
        dashboard_html(&self.page)
    }
}

impl DashboardView for HtmlPage {
    fn inputs(&self) -> Inputs {
        self.inputs.clone()
    }

    fn show_error(&mut self, message: &str) {
        self.page.error = Some(message.to_string());
    }

    fn hide_error(&mut self) {
        self.page.error = None;
    }

    fn render_orders(&mut self, table: TableView<OrderRow>) {
        // Fresh rows come with fresh buttons
        self.page.recheck_buttons.clear();
        self.page.orders = Some(table);
    }

    fn render_order_stats(&mut self, stats: OrderStats) {
        self.page.order_stats = Some(stats);
    }

    fn render_positions(&mut self, table: TableView<PositionRow>) {
        self.page.positions = Some(table);
    }

    fn render_position_stats(&mut self, stats: PositionStats) {
        self.page.position_stats = Some(stats);
    }

    fn render_symbols(&mut self, table: TableView<Symbol>) {
        self.page.symbols = Some(table);
    }

    fn render_symbol_count(&mut self, count: usize) {
        self.page.symbol_count = Some(count);
    }

    fn render_mode(&mut self, mode: ModeView) {
        self.page.mode = Some(mode);
    }

    fn activate_tab(&mut self, tab: Tab) {
        self.page.active_tab = tab;
    }

    fn set_recheck_button(&mut self, order_id: i64, state: RecheckButton) {
        self.page.recheck_buttons.insert(order_id, state);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn open_url(&mut self, url: &str) -> Result<()> {
        debug!(url, "open");
        self.opened.push(url.to_string());
        Ok(())
    }

    fn write_clipboard(&mut self, text: &str) -> Result<()> {
        self.clipboard = Some(text.to_string());
        Ok(())
    }

    fn flash_copied(&mut self, target: CopyTarget, feedback: CopyFeedback) {
        debug!(label = feedback.label, revert_after = ?feedback.revert_after, "copied");
        self.page.copied = Some(target);
    }
}
