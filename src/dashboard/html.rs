//! HTML rendering for the dashboard
//!
//! Turns view-models into markup fragments and lays them out into the page
//! body. All text that came from the backend goes through [`escape`].

use std::collections::HashMap;

use super::PageModel;
use super::view::{
    CopyTarget, ModeView, OrderRow, OrderStats, PositionRow, PositionStats, RecheckButton,
    TableView, pnl_class,
};
use crate::types::{Symbol, Tab};

/// Escape text for element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Placeholder for a region that has no rows to show
fn placeholder<R>(table: &TableView<R>) -> Option<String> {
    match table {
        TableView::Loading => Some(format!(
            r#"<div class="loading">{}</div>"#,
            super::view::LOADING
        )),
        TableView::Empty(text) => Some(format!(r#"<div class="empty">{}</div>"#, escape(text))),
        TableView::Failed(text) => Some(format!(
            r#"<div class="empty failed">{}</div>"#,
            escape(text)
        )),
        TableView::Rows(_) => None,
    }
}

fn symbol_cell(symbol: &str, code: Option<&str>) -> String {
    let mut cell = format!(
        r#"<div class="mono"><span class="symbol">{}</span>"#,
        escape(symbol)
    );
    if let Some(code) = code {
        cell.push_str(&format!(r#"<span class="code">{}</span>"#, escape(code)));
    }
    cell.push_str("</div>");
    cell
}

pub fn orders_fragment(table: &TableView<OrderRow>, buttons: &HashMap<i64, RecheckButton>) -> String {
    if let Some(html) = placeholder(table) {
        return html;
    }

    let mut html = String::from(
        r#"<table><thead><tr>
        <th style="width:50px">#</th>
        <th>商品</th>
        <th style="width:70px">動作</th>
        <th style="width:50px">口數</th>
        <th style="width:90px">狀態</th>
        <th>成交</th>
        <th>時間</th>
        <th style="width:60px"></th>
    </tr></thead><tbody>"#,
    );

    for row in table.rows() {
        let error = row.error.as_deref().map_or_else(String::new, |msg| {
            format!(r#"<span class="error-indicator" title="{}">⚠️</span>"#, escape(msg))
        });
        let recheck = if row.can_recheck {
            let state = buttons.get(&row.id).copied().unwrap_or(RecheckButton::Idle);
            format!(
                r#"<button class="recheck-btn" data-order-id="{}" title="重新查詢狀態"{}>{}</button>"#,
                row.id,
                if state.disabled() { " disabled" } else { "" },
                state.label()
            )
        } else {
            String::new()
        };

        html.push_str(&format!(
            r#"<tr id="order-row-{id}">
            <td class="dim">{id}</td>
            <td>{symbol}</td>
            <td><span style="color:{color}" title="{title}">{icon} {label}</span></td>
            <td class="qty">{qty}</td>
            <td><span class="status {status_class}">{status}</span>{error}</td>
            <td class="mono small">{fill}</td>
            <td class="dim small">{time}</td>
            <td>{recheck}</td>
        </tr>"#,
            id = row.id,
            symbol = symbol_cell(&row.symbol, row.code.as_deref()),
            color = row.action.color,
            title = escape(&row.action.title),
            icon = row.action.icon,
            label = escape(&row.action.label),
            qty = row.quantity,
            status_class = escape(&row.status.class),
            status = escape(&row.status.label),
            fill = escape(&row.fill),
            time = escape(&row.time),
        ));
    }
    html.push_str("</tbody></table>");
    html
}

pub fn positions_fragment(table: &TableView<PositionRow>) -> String {
    if let Some(html) = placeholder(table) {
        return html;
    }

    let mut html = String::from(
        r#"<table><thead><tr>
        <th>商品</th>
        <th style="width:70px">方向</th>
        <th style="width:60px">口數</th>
        <th>均價</th>
        <th>現價</th>
        <th>損益</th>
    </tr></thead><tbody>"#,
    );

    for row in table.rows() {
        html.push_str(&format!(
            r#"<tr>
            <td>{symbol}</td>
            <td><span style="color:{color}">{icon} {dir}</span></td>
            <td class="qty">{qty}</td>
            <td class="mono">{price}</td>
            <td class="mono">{last}</td>
            <td class="{pnl_class} bold">{pnl}</td>
        </tr>"#,
            symbol = symbol_cell(&row.symbol, row.code.as_deref()),
            color = row.direction.color,
            icon = row.direction.icon,
            dir = row.direction.label,
            qty = escape(&row.quantity),
            price = row.price,
            last = row.last_price,
            pnl_class = row.pnl_class(),
            pnl = row.pnl,
        ));
    }
    html.push_str("</tbody></table>");
    html
}

pub fn symbols_fragment(table: &TableView<Symbol>, copied: Option<&CopyTarget>) -> String {
    if let Some(html) = placeholder(table) {
        return html;
    }

    let mut html = String::from(
        r#"<table><thead><tr>
        <th>Symbol (用於下單)</th>
        <th>Code (交易所代碼)</th>
        <th>名稱</th>
        <th>操作</th>
    </tr></thead><tbody>"#,
    );

    for item in table.rows() {
        let button = match copied {
            Some(target @ CopyTarget::Symbol(s)) if *s == item.symbol => format!(
                r#"<button class="recheck-btn copied">{}</button>"#,
                target.feedback().label
            ),
            _ => format!(
                r#"<button class="recheck-btn" data-copy="{}">📋 複製</button>"#,
                escape(&item.symbol)
            ),
        };
        html.push_str(&format!(
            r#"<tr>
            <td><strong class="symbol mono">{symbol}</strong></td>
            <td class="dim mono">{code}</td>
            <td>{name}</td>
            <td>{button}</td>
        </tr>"#,
            symbol = escape(&item.symbol),
            code = escape(&item.code),
            name = escape(&item.name),
        ));
    }
    html.push_str("</tbody></table>");
    html
}

fn display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

pub fn mode_fragment(mode: &ModeView, copied: bool) -> String {
    let weight = |bold: bool| if bold { "600" } else { "normal" };
    let copy_label = if copied {
        CopyTarget::Webhook.feedback().label
    } else {
        "複製"
    };
    format!(
        r#"<div class="card webhook-card{real_class}" id="webhookCard">
            <div class="mode-switch">
                <span id="simLabel" style="color:{sim_color};font-weight:{sim_weight}">模擬交易</span>
                <input type="checkbox" id="modeToggle"{checked}>
                <span id="realLabel" style="color:{real_color};font-weight:{real_weight}">實盤交易</span>
            </div>
            <div class="code-block" id="webhookCodeBlock">
                <code id="webhookUrl">{url}</code>
                <button class="copy-btn">{copy_label}</button>
            </div>
            <div class="banner warning" id="realTradingWarning" style="display:{warn}">⚠️ 實盤模式：訊號將送出真實委託</div>
            <div class="banner info" id="simModeInfo" style="display:{info}">ℹ️ 模擬模式：委託僅送至模擬環境</div>
        </div>"#,
        real_class = if mode.simulation { "" } else { " real-trading-mode" },
        sim_color = mode.sim_label.color,
        sim_weight = weight(mode.sim_label.bold),
        real_color = mode.real_label.color,
        real_weight = weight(mode.real_label.bold),
        checked = if mode.simulation { "" } else { " checked" },
        url = escape(&mode.webhook_url),
        warn = display(mode.show_real_warning),
        info = display(mode.show_sim_info),
    )
}

fn stat_card(id: &str, label: &str, value: &str, class: &str) -> String {
    format!(
        r#"<div class="stat-card{class}" id="{id}Card"><div class="stat-label">{label}</div><div class="stat-value" id="{id}">{value}</div></div>"#
    )
}

fn order_stat_cards(stats: Option<OrderStats>) -> String {
    let show = |n: Option<usize>| n.map_or_else(|| "-".to_string(), |n| n.to_string());
    [
        stat_card("statTotal", "總委託", &show(stats.map(|s| s.total)), ""),
        stat_card("statSuccess", "成交", &show(stats.map(|s| s.success)), ""),
        stat_card("statFailed", "失敗", &show(stats.map(|s| s.failed)), ""),
    ]
    .concat()
}

fn position_stat_cards(stats: Option<&PositionStats>) -> String {
    let count = stats.map_or_else(|| "-".to_string(), |s| s.count.to_string());
    let total = stats.map_or("-", |s| s.total_pnl_text.as_str());
    let class = stats.map_or(String::new(), |s| format!(" {}", pnl_class(s.positive)));
    [
        stat_card("posCount", "持倉數", &count, ""),
        stat_card("totalPnl", "總損益", total, &class),
    ]
    .concat()
}

fn tab_button(tab: Tab, label: &str, active: Tab) -> String {
    format!(
        r#"<button class="tab{}" data-tab="{}">{label}</button>"#,
        if tab == active { " active" } else { "" },
        tab.as_str()
    )
}

fn tab_content(tab: Tab, active: Tab, body: &str) -> String {
    format!(
        r#"<div class="tab-content{}" id="{}-tab">{body}</div>"#,
        if tab == active { " active" } else { "" },
        tab.as_str()
    )
}

/// Page body for a full snapshot of the dashboard
pub fn body(page: &PageModel) -> String {
    let orders = page.orders.as_ref().map_or_else(String::new, |t| {
        orders_fragment(t, &page.recheck_buttons)
    });
    let positions = page
        .positions
        .as_ref()
        .map_or_else(String::new, positions_fragment);
    let copied_symbol = page.copied.as_ref().filter(|c| matches!(c, CopyTarget::Symbol(_)));
    let symbols = page
        .symbols
        .as_ref()
        .map_or_else(String::new, |t| symbols_fragment(t, copied_symbol));
    let mode = page.mode.as_ref().map_or_else(String::new, |m| {
        mode_fragment(m, page.copied == Some(CopyTarget::Webhook))
    });
    let error = page.error.as_deref().map_or_else(
        || r#"<div class="error-msg" id="errorMsg" style="display:none"></div>"#.to_string(),
        |msg| format!(r#"<div class="error-msg" id="errorMsg">{}</div>"#, escape(msg)),
    );
    let symbol_count = page
        .symbol_count
        .map_or_else(|| "-".to_string(), |n| n.to_string());

    format!(
        r#"
    <div class="container">
        <header>
            <h1>📊 Order Dashboard</h1>
        </header>
        {mode}
        {error}
        <div class="tabs">
            {tab_orders}{tab_positions}{tab_symbols}
        </div>
        {content_orders}
        {content_positions}
        {content_symbols}
    </div>
"#,
        tab_orders = tab_button(Tab::Orders, "📋 委託紀錄", page.active_tab),
        tab_positions = tab_button(Tab::Positions, "💼 持倉", page.active_tab),
        tab_symbols = tab_button(Tab::Symbols, "🏷️ 商品", page.active_tab),
        content_orders = tab_content(
            Tab::Orders,
            page.active_tab,
            &format!(
                r#"<div class="stats">{}</div><div id="ordersTable">{orders}</div>"#,
                order_stat_cards(page.order_stats)
            )
        ),
        content_positions = tab_content(
            Tab::Positions,
            page.active_tab,
            &format!(
                r#"<div class="stats">{}</div><div id="positionsTable">{positions}</div>"#,
                position_stat_cards(page.position_stats.as_ref())
            )
        ),
        content_symbols = tab_content(
            Tab::Symbols,
            page.active_tab,
            &format!(
                r#"<div class="stats">{}</div><div id="symbolsTable">{symbols}</div>"#,
                stat_card("symbolCount", "商品數", &symbol_count, "")
            )
        ),
    )
}
