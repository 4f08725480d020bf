//! # API Errors
//!
//! Failure taxonomy of the ranking API client. Every variant ends up as the same
//! "could not fetch" reply for the user; the detail is only for the logs.

/// Error returned by a `RankingSource`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Network or transport level failure (DNS, connect, read)
    Transport(String),
    /// Upstream answered with a status other than 200
    Status { status: u16, body: String },
    /// Body was not a valid ranking payload
    Malformed(String),
    /// No API key configured (names the missing setting)
    MissingKey(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "transport error: {e}"),
            ApiError::Status { status, body } => write!(f, "status {status}, response: {body}"),
            ApiError::Malformed(e) => write!(f, "malformed ranking payload: {e}"),
            ApiError::MissingKey(name) => write!(f, "missing API key ({name})"),
        }
    }
}

impl std::error::Error for ApiError {}
