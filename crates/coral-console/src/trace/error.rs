//! Trace relay error types.

use coral_admin::AdminError;

/// Errors that terminate a trace relay session.
///
/// Every variant is fatal: the loop never retries or resumes the stream,
/// and the caller owns closing the session and the upstream subscription.
#[derive(Debug, thiserror::Error)]
pub enum TraceRelayError {
    /// The admin trace stream reported a fault.
    #[error("Trace stream error: {0}")]
    Source(#[from] AdminError),

    /// A wire record could not be encoded.
    #[error("Record encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// The push channel rejected a write.
    #[error("Push channel write error: {0}")]
    Transport(String),
}
