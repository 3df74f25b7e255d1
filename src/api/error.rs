//! Remote-call failure type.
//!
//! Every failure reaching the console is "the remote call failed". The
//! variants only exist so the log line and the banner text can say why.

/// Failure of a single HTTP round trip.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network Error: cannot reach {0}")]
    Connection(String),
    #[error("timeout of {0}s exceeded")]
    Timeout(u64),
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },
    #[error("Invalid response body: {0}")]
    Decode(String),
    #[error("{0}")]
    Client(String),
}

impl ApiError {
    /// Map a reqwest transport error the same way for every verb.
    pub(crate) fn from_reqwest(err: reqwest::Error, base_url: &str, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(timeout_secs)
        } else if err.is_connect() {
            ApiError::Connection(base_url.to_string())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Client(err.to_string())
        }
    }

    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Banner text for a failed operation: the error's own message, or the
/// operation fallback when that message is blank.
pub fn error_message(err: &ApiError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
