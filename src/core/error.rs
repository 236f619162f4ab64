//! Custom error types for loomcheck
//!
//! One error enum covers the whole run; nothing is caught and recovered
//! internally, so every variant propagates to the process boundary.

use thiserror::Error;

/// Main error type for loomcheck operations
#[derive(Error, Debug)]
pub enum LoomcheckError {
    /// Target unreachable or page load failed
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// A required element or text never appeared within the wait window
    #[error("Timed out after {timeout_ms}ms waiting for {what}")]
    Timeout { what: String, timeout_ms: u64 },

    /// An unguarded interaction target does not exist
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Browser automation errors that fit no more specific kind
    #[error("Browser error: {0}")]
    Browser(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Agent-browser not installed
    #[error("agent-browser not found. Install with: npm install -g agent-browser && agent-browser install")]
    AgentBrowserNotFound,

    /// Generic error for other cases
    #[error("{0}")]
    Other(String),
}

/// Convenience Result type for loomcheck operations
pub type Result<T> = std::result::Result<T, LoomcheckError>;

impl LoomcheckError {
    /// Create a navigation error
    pub fn navigation(msg: impl Into<String>) -> Self {
        Self::Navigation(msg.into())
    }

    /// Create a timeout error
    pub fn timeout(what: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            what: what.into(),
            timeout_ms,
        }
    }

    /// Create an element-not-found error
    pub fn element_not_found(msg: impl Into<String>) -> Self {
        Self::ElementNotFound(msg.into())
    }

    /// Create a browser error
    pub fn browser(msg: impl Into<String>) -> Self {
        Self::Browser(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error is the hard-failure kind raised by a required wait
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
