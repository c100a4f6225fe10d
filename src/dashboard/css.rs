//! Dashboard CSS styles
//!
//! Dark theme built on CSS custom properties. Class names match the
//! markup emitted by `html.rs`.

pub const STYLES: &str = r"
* { box-sizing: border-box; margin: 0; padding: 0; }

:root {
    --bg: #0f0f12;
    --card: #18181b;
    --border: #27272a;
    --text: #e4e4e7;
    --text-dim: #71717a;
    --text-mid: #a1a1aa;
    --green: #00ff88;
    --red: #ff6b6b;
    --cyan: #00d9ff;
    --yellow: #ffc107;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    padding: 20px;
    min-height: 100vh;
}

.container { max-width: 1200px; margin: 0 auto; }

header {
    margin-bottom: 24px;
    padding-bottom: 16px;
    border-bottom: 1px solid var(--border);
}

h1 { font-size: 24px; font-weight: 600; }

.mono { font-family: 'Consolas', monospace; }
.small { font-size: 0.85rem; }
.bold { font-weight: 600; }
.dim { color: var(--text-dim); }
.qty { text-align: center; font-weight: 600; }
.symbol { color: var(--cyan); font-weight: 600; }
.code { color: var(--text-dim); font-size: 0.75rem; margin-left: 4px; }

/* Webhook card */
.card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 20px;
    margin-bottom: 20px;
}

.webhook-card.real-trading-mode { border-color: #ef4444; }
.mode-switch { display: flex; align-items: center; gap: 10px; margin-bottom: 12px; }
.code-block {
    display: flex;
    justify-content: space-between;
    align-items: center;
    background: #09090b;
    border-radius: 8px;
    padding: 10px 14px;
}
.copy-btn {
    background: transparent;
    border: 1px solid var(--border);
    color: var(--text);
    border-radius: 6px;
    padding: 4px 10px;
    cursor: pointer;
}
.banner { margin-top: 12px; padding: 10px 14px; border-radius: 8px; font-size: 0.9rem; }
.banner.warning { background: rgba(239, 68, 68, 0.15); color: #ef4444; }
.banner.info { background: rgba(34, 197, 94, 0.12); color: #22c55e; }

/* Error banner */
.error-msg {
    background: rgba(255, 107, 107, 0.12);
    border: 1px solid var(--red);
    color: var(--red);
    border-radius: 8px;
    padding: 10px 14px;
    margin-bottom: 16px;
}

/* Tabs */
.tabs { display: flex; gap: 8px; margin-bottom: 16px; }
.tab {
    background: var(--card);
    border: 1px solid var(--border);
    color: var(--text-mid);
    padding: 8px 16px;
    border-radius: 8px;
    cursor: pointer;
}
.tab.active { color: var(--text); border-color: var(--cyan); }
.tab-content { display: none; }
.tab-content.active { display: block; }

/* Stat cards */
.stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 12px; margin-bottom: 16px; }
.stat-card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 10px;
    padding: 14px;
}
.stat-label { font-size: 12px; color: var(--text-dim); }
.stat-value { font-size: 22px; font-weight: 600; margin-top: 4px; }
.stat-card.pnl-positive .stat-value { color: var(--green); }
.stat-card.pnl-negative .stat-value { color: var(--red); }

/* Tables */
table { width: 100%; border-collapse: collapse; background: var(--card); border-radius: 10px; overflow: hidden; }
th, td { padding: 10px 12px; text-align: left; border-bottom: 1px solid var(--border); }
th { font-size: 12px; color: var(--text-dim); font-weight: 500; }
td.pnl-positive { color: var(--green); }
td.pnl-negative { color: var(--red); }

.status { padding: 3px 8px; border-radius: 10px; font-size: 12px; }
.status-success { background: rgba(0, 255, 136, 0.15); color: var(--green); }
.status-failed { background: rgba(255, 107, 107, 0.15); color: var(--red); }
.status-pending { background: rgba(255, 193, 7, 0.15); color: var(--yellow); }
.status-no_action { background: rgba(161, 161, 170, 0.15); color: var(--text-mid); }
.error-indicator { margin-left: 4px; cursor: help; }

.recheck-btn {
    background: transparent;
    border: 1px solid var(--border);
    color: var(--text);
    border-radius: 6px;
    padding: 3px 8px;
    cursor: pointer;
}
.recheck-btn:disabled { opacity: 0.5; cursor: wait; }
.recheck-btn.copied { background: rgba(0, 255, 136, 0.3); border-color: var(--green); }

.loading, .empty { text-align: center; padding: 40px; color: var(--text-dim); }
.empty.failed { color: var(--red); }
";
