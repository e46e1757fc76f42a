//! Outbound push-channel contract.

use std::fmt::Display;

/// Write side of the per-session push channel to the UI client.
///
/// One operation: deliver one serialized record as a single text message.
/// A call either fully succeeds or fails; there are no partial writes.
/// Handshake and close frames are the connection's concern, not the relay's.
pub trait TextSink {
    type Error: Display;

    fn write_text(
        &mut self,
        payload: Vec<u8>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
