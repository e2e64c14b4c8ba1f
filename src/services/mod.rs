//! Background Services
//!
//! I/O workers living on the tokio runtime, communicating with the
//! event loop over unbounded channels:
//! - api: executes parking API requests with bounded concurrency

pub mod api;
