use thiserror::Error;

/// Failures talking to the booking backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {status}")]
    Http { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Parse(String),
    /// Business rejection reported by the backend, surfaced verbatim
    #[error("{0}")]
    Rejected(String),
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

impl ApiError {
    /// Text shown to the user after a prefix like "Failed to load schedule: "
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected(detail) => detail.clone(),
            other => other.to_string(),
        }
    }
}

/// Failures of the local profile store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("could not serialize profile: {0}")]
    Serialize(String),
}
