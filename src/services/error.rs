use thiserror::Error;

/// Errors raised by the market data and notification services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Network failure, timeout or unreadable response body.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote API answered with a non-success status.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The response did not have the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("no samples returned for {0}")]
    EmptySeries(String),
}
