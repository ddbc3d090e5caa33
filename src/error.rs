use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Application-wide error taxonomy
///
/// Every external call degrades to a safe default rather than propagating;
/// these variants exist for classification and logging, and for the few
/// user-initiated operations whose failure is surfaced directly.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("network failure: {0}")]
    Network(String),

    #[error("API returned error status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("request timed out")]
    Timeout,

    #[error("location permission denied")]
    LocationPermissionDenied,

    #[error("location unavailable: {0}")]
    LocationUnavailable(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("parse failure: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown error: {0}")]
    Unknown(String),
}

impl AppError {
    /// Whether a retry could plausibly succeed
    pub fn should_retry(&self) -> bool {
        match self {
            AppError::Network(_)
            | AppError::Api { .. }
            | AppError::Timeout
            | AppError::LocationUnavailable(_)
            | AppError::Unknown(_) => true,
            AppError::LocationPermissionDenied
            | AppError::NotFound(_)
            | AppError::InvalidData(_)
            | AppError::Parse(_) => false,
        }
    }
}

/// Retry an idempotent async operation with a fixed backoff
///
/// Stops early when the error is classified as non-retryable. Not wired into
/// the critical request path; available for read operations that opt in.
pub async fn retry_with_backoff<T, F, Fut>(
    mut operation: F,
    max_attempts: u32,
    delay: Duration,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut last_error = AppError::Unknown("no attempts made".to_string());

    for attempt in 1..=max_attempts {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                if !e.should_retry() {
                    return Err(e);
                }
                if attempt < max_attempts {
                    tracing::debug!(attempt, max_attempts, error = %e, "retrying after backoff");
                    tokio::time::sleep(delay).await;
                }
                last_error = e;
            }
        }
    }

    Err(last_error)
}
