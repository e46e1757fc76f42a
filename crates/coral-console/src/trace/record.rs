//! Compact wire records for the UI push channel.
//!
//! The admin API's trace events carry full request/response metadata; the
//! UI only renders one summary line per request. `TraceRecord` is that
//! summary, serialized as one JSON object per event.

use coral_admin::RequestTrace;
use http::StatusCode;
use serde::Serialize;

/// Compact rendering of one traced request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceRecord {
    pub host: String,
    pub time: String,
    pub client: String,
    #[serde(rename = "callStats")]
    pub call_stats: RecordCallStats,
    #[serde(rename = "api")]
    pub func_name: String,
    pub path: String,
    pub query: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(rename = "statusMsg")]
    pub status_msg: String,
}

/// Byte counts and timing summary for one traced request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordCallStats {
    pub rx: u64,
    pub tx: u64,
    pub duration: String,
    #[serde(rename = "timeToFirstByte")]
    pub time_to_first_byte: String,
}

impl TraceRecord {
    /// Derive the compact record from one raw trace event.
    ///
    /// Total over all inputs: no raw event shape fails the mapping.
    pub fn from_trace(trace: &RequestTrace) -> Self {
        let req = &trace.req_info;

        // Multiple Host values are fused without a separator; the UI
        // depends on this exact rendering.
        let host = req
            .headers
            .get("Host")
            .map(|values| values.concat())
            .unwrap_or_default();

        Self {
            host,
            time: req.time.to_string(),
            client: client_host(&req.client).to_string(),
            call_stats: RecordCallStats {
                rx: trace.call_stats.input_bytes,
                tx: trace.call_stats.output_bytes,
                duration: format!("{:?}", trace.call_stats.latency),
                time_to_first_byte: trace.call_stats.time_to_first_byte.clone(),
            },
            func_name: trace.func_name.clone(),
            path: req.path.clone(),
            query: req.raw_query.clone(),
            status_code: trace.resp_info.status_code,
            status_msg: status_text(trace.resp_info.status_code).to_string(),
        }
    }
}

/// Standard reason phrase for a status code, `""` when the code has none.
fn status_text(code: u16) -> &'static str {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("")
}

/// Host portion of a `host:port` address (the whole string when no port).
fn client_host(addr: &str) -> &str {
    addr.split(':').next().unwrap_or(addr)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use chrono::DateTime;
    use coral_admin::{RequestTrace, TraceCallStats, TraceRequestInfo, TraceResponseInfo};

    use super::*;

    fn sample_trace() -> RequestTrace {
        RequestTrace {
            func_name: "GetObject".into(),
            req_info: TraceRequestInfo {
                time: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
                path: "/photos/cat.jpg".into(),
                raw_query: "versionId=3".into(),
                headers: HashMap::from([("Host".to_string(), vec!["play.coral.io".to_string()])]),
                client: "10.0.0.5:54321".into(),
            },
            resp_info: TraceResponseInfo { status_code: 200 },
            call_stats: TraceCallStats {
                input_bytes: 310,
                output_bytes: 4096,
                latency: Duration::from_millis(150),
                time_to_first_byte: "2ms".into(),
            },
        }
    }

    #[test]
    fn transform_is_deterministic() {
        let trace = sample_trace();
        assert_eq!(
            TraceRecord::from_trace(&trace),
            TraceRecord::from_trace(&trace)
        );
    }

    #[test]
    fn fields_copied_verbatim() {
        let record = TraceRecord::from_trace(&sample_trace());
        assert_eq!(record.func_name, "GetObject");
        assert_eq!(record.path, "/photos/cat.jpg");
        assert_eq!(record.query, "versionId=3");
        assert_eq!(record.status_code, 200);
        assert_eq!(record.call_stats.rx, 310);
        assert_eq!(record.call_stats.tx, 4096);
        assert_eq!(record.call_stats.time_to_first_byte, "2ms");
    }

    #[test]
    fn time_uses_default_timestamp_rendering() {
        let trace = sample_trace();
        let record = TraceRecord::from_trace(&trace);
        assert_eq!(record.time, trace.req_info.time.to_string());
        assert_eq!(record.time, "2023-11-14 22:13:20 UTC");
    }

    #[test]
    fn duration_uses_default_rendering() {
        let mut trace = sample_trace();
        assert_eq!(TraceRecord::from_trace(&trace).call_stats.duration, "150ms");

        trace.call_stats.latency = Duration::from_millis(1500);
        assert_eq!(TraceRecord::from_trace(&trace).call_stats.duration, "1.5s");
    }

    /// Multiple Host values end up fused as one string with no separator.
    /// The UI expects exactly this rendering, so keep it even though a
    /// delimiter would read better.
    #[test]
    fn multiple_host_values_concatenate_without_separator() {
        let mut trace = sample_trace();
        trace.req_info.headers =
            HashMap::from([("Host".to_string(), vec!["a".to_string(), "b".to_string()])]);
        assert_eq!(TraceRecord::from_trace(&trace).host, "ab");
    }

    #[test]
    fn missing_host_header_yields_empty_host() {
        let mut trace = sample_trace();
        trace.req_info.headers = HashMap::new();
        assert_eq!(TraceRecord::from_trace(&trace).host, "");
    }

    #[test]
    fn client_port_is_stripped() {
        let record = TraceRecord::from_trace(&sample_trace());
        assert_eq!(record.client, "10.0.0.5");
    }

    #[test]
    fn client_without_port_is_unchanged() {
        let mut trace = sample_trace();
        trace.req_info.client = "10.0.0.5".into();
        assert_eq!(TraceRecord::from_trace(&trace).client, "10.0.0.5");
    }

    #[test]
    fn status_message_from_reason_phrase_table() {
        let mut trace = sample_trace();
        trace.resp_info.status_code = 404;
        assert_eq!(TraceRecord::from_trace(&trace).status_msg, "Not Found");

        // Unrecognized codes fall back to the table's empty default.
        trace.resp_info.status_code = 999;
        assert_eq!(TraceRecord::from_trace(&trace).status_msg, "");
    }

    #[test]
    fn wire_field_names_are_exact() {
        let value = serde_json::to_value(TraceRecord::from_trace(&sample_trace())).unwrap();

        assert_eq!(value["host"], "play.coral.io");
        assert_eq!(value["time"], "2023-11-14 22:13:20 UTC");
        assert_eq!(value["client"], "10.0.0.5");
        assert_eq!(value["api"], "GetObject");
        assert_eq!(value["path"], "/photos/cat.jpg");
        assert_eq!(value["query"], "versionId=3");
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["statusMsg"], "OK");
        assert_eq!(value["callStats"]["rx"], 310);
        assert_eq!(value["callStats"]["tx"], 4096);
        assert_eq!(value["callStats"]["duration"], "150ms");
        assert_eq!(value["callStats"]["timeToFirstByte"], "2ms");
    }
}
