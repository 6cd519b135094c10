/// Engine-wide Result type
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors raised while computing a report bundle.
///
/// Only `Authentication` is a hard failure that reaches the caller; every
/// other variant is recovered inside the orchestrator, which substitutes a
/// zeroed fallback bundle instead of surfacing the error.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// No resolvable store or session context
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The order repository failed to return data
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// A repository fetch exceeded the configured time budget
    #[error("Fetch timed out after {0} ms")]
    Timeout(u64),

    /// An order record could not be ingested at the adapter boundary
    #[error("Malformed order data: {0}")]
    MalformedData(String),

    /// Engine configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

// Helper functions for common error scenarios
impl ReportError {
    pub fn authentication(msg: impl Into<String>) -> Self {
        ReportError::Authentication(msg.into())
    }

    pub fn fetch(msg: impl Into<String>) -> Self {
        ReportError::Fetch(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        ReportError::MalformedData(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        ReportError::Configuration(msg.into())
    }

    /// Whether the orchestrator may degrade to a fallback bundle instead of
    /// propagating this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ReportError::Authentication(_))
    }
}
