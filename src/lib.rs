//! Order Dashboard - monitoring client for a futures trading webhook backend
//!
//! Polls the backend's `/orders`, `/positions` and `/symbols` endpoints and
//! renders them as tables with summary cards.
//!
//! # Architecture
//! - `client.rs`: HTTP client for the backend behind the `DashboardApi` trait
//! - `app/`: controller driving fetch/render cycles and user actions
//! - `dashboard/`: pure view-models and their HTML rendering
//!
//! # Features
//! - Orders with status/action/symbol filters and per-order recheck
//! - Positions with signed, color-coded P&L
//! - Public symbol catalogue with local search
//! - Simulation/real mode webhook URL, copy to clipboard, CSV export

// Clippy configuration for dashboard code patterns
#![allow(clippy::cast_precision_loss)] // Float casts OK for display
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)] // HTML templates
#![allow(clippy::doc_markdown)] // Doc style flexibility
#![allow(clippy::needless_pass_by_value)] // View-models are handed over to the host
#![allow(clippy::map_unwrap_or)] // Explicit fallback preference

pub mod app;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod types;

pub use app::{Dashboard, DashboardView, HtmlPage, Inputs};
pub use client::{ApiClient, DashboardApi};
pub use config::Config;
pub use error::{DashboardError, ErrorCategory, Result};
pub use types::*;
