//! Raw request-trace event model.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// One completed request handled by the cluster, as reported by the
/// administrative API's live trace stream.
#[derive(Debug, Clone)]
pub struct RequestTrace {
    /// API function/endpoint name (e.g. `"GetObject"`).
    pub func_name: String,
    pub req_info: TraceRequestInfo,
    pub resp_info: TraceResponseInfo,
    pub call_stats: TraceCallStats,
}

/// Request-side metadata of a trace event.
#[derive(Debug, Clone)]
pub struct TraceRequestInfo {
    /// Time the request was received.
    pub time: DateTime<Utc>,
    pub path: String,
    pub raw_query: String,
    /// Header multimap; values keep their wire order.
    pub headers: HashMap<String, Vec<String>>,
    /// Client address in `host:port` form, or bare host.
    pub client: String,
}

/// Response-side metadata of a trace event.
#[derive(Debug, Clone)]
pub struct TraceResponseInfo {
    pub status_code: u16,
}

/// Byte counts and timing for one traced call.
#[derive(Debug, Clone)]
pub struct TraceCallStats {
    pub input_bytes: u64,
    pub output_bytes: u64,
    pub latency: Duration,
    /// Pre-formatted time-to-first-byte; consumers forward this opaquely.
    pub time_to_first_byte: String,
}

/// Switches controlling what the trace stream produces.
#[derive(Debug, Clone, Copy)]
pub struct TraceOptions {
    /// Stream every request handled by the cluster.
    pub all_traffic: bool,
    /// Stream only failed requests.
    pub errors_only: bool,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            all_traffic: true,
            errors_only: false,
        }
    }
}
