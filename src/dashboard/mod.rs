//! Dashboard module - orders, positions and symbols views
//!
//! Separated into pure view-models and their HTML rendering.
//!
//! # Architecture
//! - `labels.rs`: status/action/direction display mappings
//! - `format.rs`: number and timestamp formatting
//! - `view.rs`: table and card view-models built from backend data
//! - `html.rs`: markup fragments and page layout
//! - `css.rs`: styling with CSS custom properties

mod css;
pub mod format;
pub mod html;
pub mod labels;
pub mod view;

use std::collections::HashMap;

use crate::types::{Symbol, Tab};
use view::{
    CopyTarget, ModeView, OrderRow, OrderStats, PositionRow, PositionStats, RecheckButton,
    TableView,
};

/// Everything currently shown on the page.
///
/// `None` regions have not been rendered yet.
#[derive(Debug, Clone, Default)]
pub struct PageModel {
    pub active_tab: Tab,
    pub mode: Option<ModeView>,
    pub error: Option<String>,
    pub orders: Option<TableView<OrderRow>>,
    pub order_stats: Option<OrderStats>,
    pub recheck_buttons: HashMap<i64, RecheckButton>,
    pub positions: Option<TableView<PositionRow>>,
    pub position_stats: Option<PositionStats>,
    pub symbols: Option<TableView<Symbol>>,
    pub symbol_count: Option<usize>,
    /// Copy button currently showing its confirmation
    pub copied: Option<CopyTarget>,
}

/// Generate the complete dashboard HTML page
pub fn dashboard_html(page: &PageModel) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="zh-Hant">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Order Dashboard</title>
    <style>
{css}
    </style>
</head>
<body>
{body}
</body>
</html>"#,
        css = css::STYLES,
        body = html::body(page),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_page() {
        let html = dashboard_html(&PageModel::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<div class="tab-content active" id="orders-tab">"#));
        assert!(html.contains(r#"id="errorMsg" style="display:none""#));
    }

    #[test]
    fn test_error_banner_and_active_tab() {
        let page = PageModel {
            active_tab: Tab::Positions,
            error: Some("驗證金鑰無效".into()),
            ..PageModel::default()
        };
        let html = dashboard_html(&page);
        assert!(html.contains(r#"<div class="error-msg" id="errorMsg">驗證金鑰無效</div>"#));
        assert!(html.contains(r#"<button class="tab active" data-tab="positions">"#));
    }
}
