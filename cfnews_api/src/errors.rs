//! Error types for the API client.

/// Errors that can occur when talking to the CFNEWS API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The `CFNEWS_API_KEY` environment variable is missing or empty.
    #[error("CFNEWS_API_KEY is not set")]
    MissingApiKey,
    /// An HTTP request failed (network error, timeout, or unexpected response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}: {body}")]
    HttpStatus { status: u16, body: String },
}
