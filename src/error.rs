//! Error taxonomy for the random node.

/// Per-item execution error.
///
/// `Display` yields the bare message text, so the continue-on-fail
/// conversion into an [`ErrorRecord`](crate::item::ErrorRecord) keeps the
/// human-readable message and drops the kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    /// Local precondition violated; raised before any network call.
    #[error("{0}")]
    Validation(String),
    /// Network, timeout or HTTP-layer failure during the remote call.
    #[error("{0}")]
    Transport(String),
    /// Remote response body is not a parseable integer.
    #[error("{0}")]
    Parse(String),
}
