//! Capability contract for admin clients that produce trace streams.

use tokio::sync::{mpsc, watch};

use crate::error::AdminError;
use crate::trace::{RequestTrace, TraceOptions};

/// One trace event, or the stream's terminal fault.
pub type TraceStreamItem = Result<RequestTrace, AdminError>;

/// The one operation the console needs from an admin client: subscribe to
/// the cluster's live request-trace stream.
///
/// The returned channel yields one item per traced request and terminates
/// either by closing (no more items) or by yielding a final `Err` item;
/// nothing follows an `Err`. Implementations stop producing once `shutdown`
/// flips to `true` or the receiver is dropped.
pub trait TraceStreams {
    fn service_trace(
        &self,
        shutdown: watch::Receiver<bool>,
        options: TraceOptions,
    ) -> mpsc::Receiver<TraceStreamItem>;
}
