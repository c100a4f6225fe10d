//! Dashboard controller
//!
//! Owns the cached server snapshots and the active tab, runs the
//! fetch/render cycle for each resource and the user actions (recheck,
//! export, copy, mode toggle).
//!
//! Every operation takes `&mut self`, so one dashboard never has two
//! requests in flight and a late response cannot overwrite a newer one.

mod host;
mod page;

pub use host::{DashboardView, Inputs};
pub use page::HtmlPage;

use tracing::{debug, info, warn};

use crate::client::DashboardApi;
use crate::dashboard::view::{
    self, CopyTarget, LOAD_FAILED, RecheckButton, SYMBOLS_FAILED, TableView,
};
use crate::error::{DashboardError, Result};
use crate::types::{Order, Position, RecheckResult, Symbol, Tab};

/// Alert when recheck is pressed without an auth key
pub const MSG_RECHECK_NEEDS_KEY: &str = "請先輸入驗證金鑰";

/// Last successful server snapshots plus the active tab
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub orders: Vec<Order>,
    pub positions: Vec<Position>,
    pub symbols: Vec<Symbol>,
    pub active_tab: Tab,
}

pub struct Dashboard<A, V> {
    api: A,
    view: V,
    state: AppState,
}

impl<A: DashboardApi, V: DashboardView> Dashboard<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            state: AppState::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Page load: show the webhook for the current mode and load symbols
    pub async fn init(&mut self) -> Result<()> {
        self.toggle_mode();
        self.fetch_symbols().await
    }

    // ========================================================================
    // Tabs
    // ========================================================================

    pub fn switch_tab(&mut self, tab: Tab) {
        debug!(tab = tab.as_str(), "switch tab");
        self.state.active_tab = tab;
        self.view.activate_tab(tab);
    }

    /// Refresh whatever the active tab shows
    pub async fn load_current_tab(&mut self) -> Result<()> {
        match self.state.active_tab {
            Tab::Orders => self.fetch_orders().await,
            Tab::Positions => self.fetch_positions().await,
            Tab::Symbols => self.fetch_symbols().await,
        }
    }

    /// Enter pressed in the auth key field
    pub async fn submit_auth_key(&mut self) -> Result<()> {
        self.load_current_tab().await
    }

    /// Auth key from the input control, or the banner and an error
    fn require_auth_key(&mut self) -> Result<String> {
        match self.view.inputs().auth_key() {
            Some(key) => Ok(key.to_string()),
            None => {
                let err = DashboardError::MissingAuthKey;
                self.view.show_error(err.user_message());
                Err(err)
            }
        }
    }

    // ========================================================================
    // Orders
    // ========================================================================

    pub async fn fetch_orders(&mut self) -> Result<()> {
        let auth_key = self.require_auth_key()?;
        let filter = self.view.inputs().filter;

        self.view.render_orders(TableView::Loading);
        self.view.hide_error();

        match self.api.list_orders(&auth_key, &filter).await {
            Ok(orders) => {
                info!(count = orders.len(), "orders loaded");
                self.state.orders = orders;
                self.render_orders();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "orders fetch failed");
                self.view.show_error(e.user_message());
                self.view.render_orders(TableView::Failed(LOAD_FAILED.to_string()));
                Err(e)
            }
        }
    }

    fn render_orders(&mut self) {
        self.view.render_orders(view::orders_table(&self.state.orders));
        self.view.render_order_stats(view::order_stats(&self.state.orders));
    }

    /// Ask the backend to re-query the exchange for one order
    pub async fn recheck_order(&mut self, order_id: i64) -> Result<RecheckResult> {
        let inputs = self.view.inputs();
        let Some(auth_key) = inputs.auth_key().map(str::to_string) else {
            self.view.alert(MSG_RECHECK_NEEDS_KEY);
            return Err(DashboardError::MissingAuthKey);
        };

        self.view.set_recheck_button(order_id, RecheckButton::Busy);

        match self
            .api
            .recheck_order(&auth_key, order_id, inputs.simulation)
            .await
        {
            Ok(result) => {
                info!(
                    order_id,
                    previous = %result.previous_status,
                    current = %result.current_status,
                    "order rechecked"
                );
                self.view.alert(&view::recheck_summary(order_id, &result));
                if let Err(e) = self.fetch_orders().await {
                    debug!(error = %e, "refetch after recheck failed");
                }
                Ok(result)
            }
            Err(e) => {
                warn!(order_id, error = %e, "recheck failed");
                self.view.alert(&format!("查詢失敗: {}", e.detail()));
                self.view.set_recheck_button(order_id, RecheckButton::Idle);
                Err(e)
            }
        }
    }

    /// Open the CSV export in a new tab
    pub fn export_csv(&mut self) -> Result<()> {
        self.require_auth_key()?;
        let url = self.api.export_url();
        if let Err(e) = self.view.open_url(&url) {
            warn!(error = %e, "export failed");
            self.view.alert(&format!("匯出失敗: {e}"));
            return Err(e);
        }
        Ok(())
    }

    // ========================================================================
    // Positions
    // ========================================================================

    pub async fn fetch_positions(&mut self) -> Result<()> {
        let auth_key = self.require_auth_key()?;

        self.view.render_positions(TableView::Loading);
        self.view.hide_error();

        match self.api.list_positions(&auth_key).await {
            Ok(positions) => {
                info!(count = positions.len(), "positions loaded");
                self.state.positions = positions;
                self.view
                    .render_positions(view::positions_table(&self.state.positions));
                self.view
                    .render_position_stats(view::position_stats(&self.state.positions));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "positions fetch failed");
                self.view.show_error(e.user_message());
                self.view
                    .render_positions(TableView::Failed(LOAD_FAILED.to_string()));
                Err(e)
            }
        }
    }

    // ========================================================================
    // Symbols
    // ========================================================================

    pub async fn fetch_symbols(&mut self) -> Result<()> {
        let simulation = self.view.inputs().simulation;
        self.view.render_symbols(TableView::Loading);

        match self.api.list_symbols(simulation).await {
            Ok(symbols) => {
                info!(count = symbols.len(), simulation, "symbols loaded");
                self.state.symbols = symbols;
                self.filter_symbols();
                self.view.render_symbol_count(self.state.symbols.len());
                self.view.hide_error();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "symbols fetch failed");
                self.view
                    .render_symbols(TableView::Failed(SYMBOLS_FAILED.to_string()));
                Err(e)
            }
        }
    }

    /// Re-filter the cached symbols with the search box; no request
    pub fn filter_symbols(&mut self) {
        let query = self.view.inputs().symbol_query;
        self.view
            .render_symbols(view::symbols_table(&self.state.symbols, &query));
    }

    // ========================================================================
    // Mode & clipboard
    // ========================================================================

    /// Sync the webhook card with the simulation control
    pub fn toggle_mode(&mut self) {
        let simulation = self.view.inputs().simulation;
        let url = self.api.webhook_url(simulation);
        self.view.render_mode(view::mode_view(simulation, url));
    }

    pub fn copy_webhook_url(&mut self) -> Result<()> {
        let url = self.api.webhook_url(self.view.inputs().simulation);
        self.copy(&url, CopyTarget::Webhook)
    }

    pub fn copy_symbol(&mut self, symbol: &str) -> Result<()> {
        self.copy(symbol, CopyTarget::Symbol(symbol.to_string()))
    }

    fn copy(&mut self, text: &str, target: CopyTarget) -> Result<()> {
        if let Err(e) = self.view.write_clipboard(text) {
            warn!(error = %e, "clipboard write failed");
            return Err(e);
        }
        let feedback = target.feedback();
        self.view.flash_copied(target, feedback);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::dashboard::view::{EMPTY_SYMBOLS, OrderStats};
    use crate::error::ErrorCategory;
    use crate::types::{Deal, FillStatus, OrderFilter, OrderStatus, PositionsResponse};

    /// In-memory backend recording every call
    #[derive(Default)]
    struct FakeApi {
        orders: RefCell<Vec<Order>>,
        positions: Vec<Position>,
        symbols: Vec<Symbol>,
        recheck: Option<RecheckResult>,
        fail_status: Cell<Option<u16>>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeApi {
        fn outcome(&self) -> Result<()> {
            match self.fail_status.get() {
                None => Ok(()),
                Some(401) => Err(DashboardError::Unauthorized),
                Some(status) => Err(DashboardError::Api {
                    status,
                    detail: "Order not found".into(),
                }),
            }
        }

        fn record(&self, call: String) {
            self.calls.borrow_mut().push(call);
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl DashboardApi for FakeApi {
        async fn list_orders(&self, auth_key: &str, filter: &OrderFilter) -> Result<Vec<Order>> {
            self.record(format!("orders key={auth_key} status={:?}", filter.status));
            self.outcome()?;
            Ok(self.orders.borrow().clone())
        }

        async fn list_positions(&self, auth_key: &str) -> Result<Vec<Position>> {
            self.record(format!("positions key={auth_key}"));
            self.outcome()?;
            Ok(self.positions.clone())
        }

        async fn list_symbols(&self, simulation: bool) -> Result<Vec<Symbol>> {
            self.record(format!("symbols simulation={simulation}"));
            self.outcome()?;
            Ok(self.symbols.clone())
        }

        async fn recheck_order(
            &self,
            auth_key: &str,
            order_id: i64,
            simulation: bool,
        ) -> Result<RecheckResult> {
            self.record(format!("recheck {order_id} key={auth_key} simulation={simulation}"));
            self.outcome()?;
            Ok(self.recheck.clone().expect("recheck result configured"))
        }

        fn export_url(&self) -> String {
            "http://bot.test/orders/export?format=csv".to_string()
        }

        fn webhook_url(&self, simulation: bool) -> String {
            if simulation {
                "http://bot.test/order".to_string()
            } else {
                "http://bot.test/order?simulation=false".to_string()
            }
        }
    }

    fn scenario_orders() -> Vec<Order> {
        serde_json::from_str(
            r#"[{"id":1,"symbol":"TXF","status":"filled","action":"long_entry","quantity":2,
                "fill_quantity":2,"fill_price":105.5,"created_at":"2024-01-01T09:30:00"},
               {"id":2,"symbol":"MXF","status":"submitted","action":"short_entry","quantity":1,
                "created_at":"2024-01-01T10:00:00"}]"#,
        )
        .unwrap()
    }

    fn scenario_symbols() -> Vec<Symbol> {
        vec![
            Symbol { symbol: "TXF".into(), code: "TXFC4".into(), name: "臺股期貨".into() },
            Symbol { symbol: "MXF".into(), code: "MXFC4".into(), name: "小型臺指".into() },
        ]
    }

    fn page_with_key(key: &str) -> HtmlPage {
        HtmlPage::new(Inputs {
            auth_key: key.to_string(),
            ..Inputs::default()
        })
    }

    #[tokio::test]
    async fn test_fetch_orders_without_key_sends_nothing() {
        let mut dash = Dashboard::new(FakeApi::default(), page_with_key(""));

        let err = dash.fetch_orders().await.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::MissingCredential);
        assert_eq!(dash.api.call_count(), 0);
        assert_eq!(dash.view().page().error.as_deref(), Some("請輸入驗證金鑰"));
        assert!(dash.view().page().orders.is_none());

        assert!(dash.fetch_positions().await.is_err());
        assert_eq!(dash.api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_fetch_orders_success() {
        let api = FakeApi {
            orders: RefCell::new(scenario_orders()),
            ..FakeApi::default()
        };
        let mut page = page_with_key("secret");
        page.show_error("stale");
        page.inputs_mut().filter.status = Some("filled".into());
        let mut dash = Dashboard::new(api, page);

        dash.fetch_orders().await.unwrap();

        assert_eq!(dash.api.calls.borrow()[0], r#"orders key=secret status=Some("filled")"#);
        assert_eq!(dash.state().orders.len(), 2);
        let page = dash.view().page();
        assert!(page.error.is_none());
        assert_eq!(
            page.order_stats,
            Some(OrderStats { total: 2, success: 1, failed: 0 })
        );
        let rows = page.orders.as_ref().unwrap().rows();
        assert_eq!(rows[0].fill, "2口 @ 105.5");
        assert!(!rows[0].can_recheck);
        assert!(rows[1].can_recheck);
    }

    #[tokio::test]
    async fn test_unauthorized_keeps_last_snapshot() {
        let api = FakeApi {
            orders: RefCell::new(scenario_orders()),
            ..FakeApi::default()
        };
        let mut dash = Dashboard::new(api, page_with_key("secret"));
        dash.fetch_orders().await.unwrap();

        dash.api.fail_status.set(Some(401));
        let err = dash.fetch_orders().await.unwrap_err();

        assert_eq!(err.category(), ErrorCategory::AuthFailure);
        assert_eq!(dash.view().page().error.as_deref(), Some("驗證金鑰無效"));
        assert_eq!(
            dash.view().page().orders,
            Some(TableView::Failed("載入失敗".into()))
        );
        assert_eq!(dash.state().orders.len(), 2);
    }

    #[tokio::test]
    async fn test_positions_generic_failure() {
        let api = FakeApi::default();
        api.fail_status.set(Some(500));
        let mut dash = Dashboard::new(api, page_with_key("secret"));

        assert!(dash.fetch_positions().await.is_err());
        assert_eq!(dash.view().page().error.as_deref(), Some("載入失敗"));
        assert_eq!(
            dash.view().page().positions,
            Some(TableView::Failed("載入失敗".into()))
        );
    }

    #[tokio::test]
    async fn test_positions_scenario() {
        let resp: PositionsResponse = serde_json::from_str(
            r#"{"positions":[{"symbol":"TXF","code":"TXF202403","direction":"Buy","quantity":1,
                "price":17000,"last_price":17050,"pnl":50}]}"#,
        )
        .unwrap();
        let api = FakeApi {
            positions: resp.positions,
            ..FakeApi::default()
        };
        let mut dash = Dashboard::new(api, page_with_key("secret"));

        dash.fetch_positions().await.unwrap();

        let stats = dash.view().page().position_stats.clone().unwrap();
        assert_eq!(stats.total_pnl_text, "+50");
        assert!(stats.positive);
        assert!(dash.view().render().contains(r#"class="stat-card pnl-positive" id="totalPnlCard""#));
    }

    #[tokio::test]
    async fn test_symbols_public_and_filter_is_local() {
        let api = FakeApi {
            symbols: scenario_symbols(),
            ..FakeApi::default()
        };
        let mut page = HtmlPage::default();
        page.inputs_mut().simulation = false;
        let mut dash = Dashboard::new(api, page);

        dash.fetch_symbols().await.unwrap();
        assert_eq!(dash.api.calls.borrow()[0], "symbols simulation=false");
        assert_eq!(dash.view().page().symbol_count, Some(2));

        dash.view_mut().inputs_mut().symbol_query = "txf".into();
        dash.filter_symbols();
        assert_eq!(dash.view().page().symbols.as_ref().unwrap().rows().len(), 1);

        dash.view_mut().inputs_mut().symbol_query = "期貨".into();
        dash.filter_symbols();
        assert_eq!(dash.view().page().symbols.as_ref().unwrap().rows()[0].symbol, "TXF");

        dash.view_mut().inputs_mut().symbol_query = "nothing".into();
        dash.filter_symbols();
        assert_eq!(
            dash.view().page().symbols,
            Some(TableView::Empty(EMPTY_SYMBOLS))
        );

        assert_eq!(dash.api.call_count(), 1);
        assert_eq!(dash.view().page().symbol_count, Some(2));
    }

    #[tokio::test]
    async fn test_symbols_failure_placeholder() {
        let api = FakeApi::default();
        api.fail_status.set(Some(503));
        let mut dash = Dashboard::new(api, HtmlPage::default());

        assert!(dash.fetch_symbols().await.is_err());
        assert_eq!(
            dash.view().page().symbols,
            Some(TableView::Failed("載入失敗: 無法取得商品列表".into()))
        );
    }

    #[tokio::test]
    async fn test_recheck_without_key_alerts_only() {
        let mut dash = Dashboard::new(FakeApi::default(), page_with_key(""));

        assert!(dash.recheck_order(2).await.is_err());
        assert_eq!(dash.view().alerts(), ["請先輸入驗證金鑰"]);
        assert!(dash.view().page().recheck_buttons.is_empty());
        assert_eq!(dash.api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_recheck_success_refetches_orders() {
        let api = FakeApi {
            orders: RefCell::new(scenario_orders()),
            recheck: Some(RecheckResult {
                previous_status: OrderStatus::Submitted,
                current_status: OrderStatus::Filled,
                current_fill_status: FillStatus::Filled,
                fill_quantity: 1.0,
                fill_price: Some(17001.0),
                deals: vec![Deal { price: 17001.0, quantity: 1.0 }],
            }),
            ..FakeApi::default()
        };
        let mut dash = Dashboard::new(api, page_with_key("secret"));

        let result = dash.recheck_order(2).await.unwrap();

        assert_eq!(result.current_status, OrderStatus::Filled);
        let calls = dash.api.calls.borrow().clone();
        assert_eq!(calls[0], "recheck 2 key=secret simulation=true");
        assert!(calls[1].starts_with("orders"));
        let alert = &dash.view().alerts()[0];
        assert!(alert.contains("訂單 #2 狀態更新"));
        assert!(alert.contains("• 成交: 1 口 @ 17001.00"));
        assert!(alert.contains("• 成交明細: 1 筆"));
        assert!(dash.view().page().recheck_buttons.is_empty());
    }

    #[tokio::test]
    async fn test_recheck_failure_restores_button() {
        let api = FakeApi::default();
        api.fail_status.set(Some(404));
        let mut dash = Dashboard::new(api, page_with_key("secret"));

        assert!(dash.recheck_order(5).await.is_err());
        assert_eq!(dash.view().alerts(), ["查詢失敗: Order not found"]);
        assert_eq!(
            dash.view().page().recheck_buttons.get(&5),
            Some(&RecheckButton::Idle)
        );
        assert_eq!(dash.api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_load_current_tab_dispatch() {
        let api = FakeApi {
            symbols: scenario_symbols(),
            ..FakeApi::default()
        };
        let mut dash = Dashboard::new(api, page_with_key("secret"));

        dash.load_current_tab().await.unwrap();
        dash.switch_tab(Tab::Positions);
        dash.submit_auth_key().await.unwrap();
        dash.switch_tab(Tab::Symbols);
        dash.load_current_tab().await.unwrap();

        let calls = dash.api.calls.borrow().clone();
        assert!(calls[0].starts_with("orders"));
        assert!(calls[1].starts_with("positions"));
        assert!(calls[2].starts_with("symbols"));
        assert_eq!(dash.view().page().active_tab, Tab::Symbols);
    }

    #[tokio::test]
    async fn test_init_shows_webhook_and_loads_symbols() {
        let api = FakeApi {
            symbols: scenario_symbols(),
            ..FakeApi::default()
        };
        let mut dash = Dashboard::new(api, HtmlPage::default());

        dash.init().await.unwrap();

        let mode = dash.view().page().mode.clone().unwrap();
        assert_eq!(mode.webhook_url, "http://bot.test/order");
        assert!(mode.show_sim_info);
        assert_eq!(dash.state().symbols.len(), 2);
    }

    #[test]
    fn test_toggle_mode_and_copy_webhook() {
        let mut dash = Dashboard::new(FakeApi::default(), HtmlPage::default());
        dash.view_mut().inputs_mut().simulation = false;
        dash.toggle_mode();

        let mode = dash.view().page().mode.clone().unwrap();
        assert!(mode.show_real_warning);
        assert_eq!(mode.webhook_url, "http://bot.test/order?simulation=false");

        dash.copy_webhook_url().unwrap();
        assert_eq!(dash.view().clipboard(), Some("http://bot.test/order?simulation=false"));
        assert_eq!(dash.view().page().copied, Some(CopyTarget::Webhook));
    }

    #[test]
    fn test_copy_symbol() {
        let mut dash = Dashboard::new(FakeApi::default(), HtmlPage::default());
        dash.copy_symbol("MXF").unwrap();
        assert_eq!(dash.view().clipboard(), Some("MXF"));
        assert_eq!(
            dash.view().page().copied,
            Some(CopyTarget::Symbol("MXF".into()))
        );
    }

    #[test]
    fn test_export_requires_key() {
        let mut dash = Dashboard::new(FakeApi::default(), page_with_key(""));
        assert!(dash.export_csv().is_err());
        assert!(dash.view().opened_urls().is_empty());
        assert_eq!(dash.view().page().error.as_deref(), Some("請輸入驗證金鑰"));

        dash.view_mut().inputs_mut().auth_key = "secret".into();
        dash.export_csv().unwrap();
        assert_eq!(
            dash.view().opened_urls(),
            ["http://bot.test/orders/export?format=csv"]
        );
    }
}
