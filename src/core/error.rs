use thiserror::Error;

/// Errors that can occur during a feed-generation run.
///
/// Malformed product data is deliberately not represented here: a bad record
/// is skipped and logged so one product cannot block the whole export.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FeedError {
    /// Catalog or availability backend failed. Propagated to the caller
    /// unchanged; retrying the run is the orchestrator's decision.
    #[error("backend error: {0}")]
    Backend(String),

    /// The pipeline input failed validation before any backend call.
    #[error("validation failed: {0}")]
    Validation(String),

    /// XML generation error.
    #[error("XML error: {0}")]
    Xml(String),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "request.currency_code").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    /// Create a validation error for a field path.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
