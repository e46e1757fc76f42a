//! Coral Console Backend Library
//!
//! Core functionality for the Coral console server:
//! - Live request-trace relay from the cluster admin API to UI clients
//! - Compact wire records for the UI push channel
//! - Logging initialisation shared by console binaries

pub mod logging;
pub mod trace;
