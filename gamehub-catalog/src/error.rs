/// Errors raised while talking to the Cosmic content API.
#[derive(Debug, thiserror::Error)]
pub enum CosmicError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Cosmic returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CosmicError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the remote store reported that nothing matched the query.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// A catalog operation failed for a reason other than absence.
///
/// Displays as the operation-labeled message the presentation side shows;
/// the underlying [`CosmicError`] stays reachable through `source()`.
#[derive(Debug, thiserror::Error)]
#[error("Failed to fetch {operation}")]
pub struct FetchError {
    operation: &'static str,
    #[source]
    source: CosmicError,
}

impl FetchError {
    pub(crate) fn new(operation: &'static str, source: CosmicError) -> Self {
        Self { operation, source }
    }

    /// Label of the operation that failed ("games", "categories", ...).
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// The client error that caused the failure.
    pub fn cause(&self) -> &CosmicError {
        &self.source
    }
}
