//! Admin client error types.

/// Errors surfaced by the administrative API's trace stream.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Stream error: {0}")]
    Stream(String),
}
