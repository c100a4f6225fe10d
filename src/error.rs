//! Error types for the dashboard
//!
//! Uses thiserror for ergonomic error definitions.
//! Every failure is terminal for the action that raised it; nothing retries.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Banner text when the auth key field is empty
pub const MSG_ENTER_AUTH_KEY: &str = "請輸入驗證金鑰";
/// Banner text for HTTP 401
pub const MSG_AUTH_KEY_INVALID: &str = "驗證金鑰無效";
/// Banner text for every other load failure
pub const MSG_LOAD_FAILED: &str = "載入失敗";

/// Dashboard errors
#[derive(Error, Debug)]
pub enum DashboardError {
    /// No auth key in the input control; no request was sent
    #[error("Auth key missing")]
    MissingAuthKey,

    /// Backend rejected the auth key (HTTP 401)
    #[error("Auth key rejected by backend")]
    Unauthorized,

    /// Non-2xx response other than 401
    #[error("HTTP {status}: {detail}")]
    Api { status: u16, detail: String },

    /// Transport errors (connect, timeout, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Host could not complete an action (open URL, clipboard, output)
    #[error("Action failed: {0}")]
    Action(String),
}

/// Failure classes shown to the user in different ways
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Client-side precondition failed, no request sent
    MissingCredential,
    /// HTTP 401
    AuthFailure,
    /// Any other non-2xx or transport failure
    LoadFailure,
    /// Recheck/export specific, shown as an alert
    ActionFailure,
}

impl DashboardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashboardError::MissingAuthKey => ErrorCategory::MissingCredential,
            DashboardError::Unauthorized => ErrorCategory::AuthFailure,
            DashboardError::Api { .. } | DashboardError::Http(_) | DashboardError::Json(_) => {
                ErrorCategory::LoadFailure
            }
            DashboardError::Config(_) | DashboardError::Action(_) => ErrorCategory::ActionFailure,
        }
    }

    /// Localized banner text for fetch failures
    pub fn user_message(&self) -> &'static str {
        match self.category() {
            ErrorCategory::MissingCredential => MSG_ENTER_AUTH_KEY,
            ErrorCategory::AuthFailure => MSG_AUTH_KEY_INVALID,
            ErrorCategory::LoadFailure | ErrorCategory::ActionFailure => MSG_LOAD_FAILED,
        }
    }

    /// Message for action alerts: the backend's `detail` when it sent one
    pub fn detail(&self) -> String {
        match self {
            DashboardError::Api { status, detail } if detail.is_empty() => format!("HTTP {status}"),
            DashboardError::Api { detail, .. } => detail.clone(),
            DashboardError::Unauthorized => MSG_AUTH_KEY_INVALID.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        DashboardError::Http(err.to_string())
    }
}
