//! Trace relay: bridges the admin API's live trace stream to a UI client.
//!
//! Data flow:
//! ```text
//! admin trace stream → TraceRecord transform → JSON → push channel
//! ```

mod error;
mod record;
mod relay;
mod sink;

pub use error::TraceRelayError;
pub use record::{RecordCallStats, TraceRecord};
pub use relay::stream_trace;
pub use sink::TextSink;
