use thiserror::Error;

/// Classified outcome of a remote interaction. The kinds survive to the UI
/// so each failure can be surfaced with its own framing and scope.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SyncError {
    /// Request failed without an HTTP status (connection refused, DNS, ...).
    #[error("could not reach the server: {0}")]
    Transport(String),

    /// 404. On auxiliary resources this degrades the feature it supports
    /// instead of blocking the primary view.
    #[error("not found: {0}")]
    NotFound(String),

    /// Other 4xx; message from the response body when available.
    #[error("request rejected ({status}): {message}")]
    Client { status: u16, message: String },

    /// 5xx; surfaced more prominently than client errors.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// A 2xx body that did not parse as the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Local validation failure; the request was never sent.
    #[error("{0}")]
    Invalid(String),
}

impl SyncError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SyncError::NotFound(_))
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self, SyncError::Server { .. })
    }
}
