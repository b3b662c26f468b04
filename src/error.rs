use std::fmt::Display;
use std::time::Duration;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, PrettyTreeError>;

/// Errors produced while converting values, emitting JSON, or driving a
/// debug-report session.
///
/// The core operations ([`format_value`][crate::format_value],
/// [`to_plain_tree`][crate::to_plain_tree], and the block renderer) are
/// infallible by signature; errors only arise at the boundaries.
#[derive(Debug, Error)]
pub enum PrettyTreeError {
    /// A value could not be converted through the serde data model.
    #[error("unsupported value: {0}")]
    Unsupported(String),
    /// Conversion recursion exceeded its depth budget.
    #[error("depth limit exceeded (max={max_depth}) - possible circular reference")]
    DepthExceeded {
        /// Configured depth ceiling.
        max_depth: usize,
    },
    /// Serializing a plain tree to JSON text failed.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    /// No input arrived within the session deadline.
    #[error("timed out waiting for input after {timeout:?}")]
    WaitTimeout {
        /// The deadline that elapsed.
        timeout: Duration,
    },
    /// The reply channel rejected an outgoing message.
    #[error("channel send failed: {0}")]
    Send(String),
}

impl serde::ser::Error for PrettyTreeError {
    fn custom<T: Display>(msg: T) -> Self {
        PrettyTreeError::Unsupported(msg.to_string())
    }
}
