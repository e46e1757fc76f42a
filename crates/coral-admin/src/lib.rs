//! Coral Admin Client Surface
//!
//! Types and contracts for consuming the storage cluster's administrative API:
//! - Raw request-trace event model produced by the live trace stream
//! - Trace stream switches (all traffic / errors only)
//! - The `TraceStreams` capability implemented by concrete admin clients
//! - Error type for stream faults

pub mod client;
pub mod error;
pub mod trace;

pub use client::{TraceStreamItem, TraceStreams};
pub use error::AdminError;
pub use trace::{RequestTrace, TraceCallStats, TraceOptions, TraceRequestInfo, TraceResponseInfo};
