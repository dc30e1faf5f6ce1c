//! # Observability
//!
//! Structured logging for the link budget driver. Every computed link emits a
//! `debug` event, every chart an `info` event, and every skipped band a
//! `warn` (computation failed) or `error` (rendering failed) event carrying
//! the band label, frequency and error.

pub mod logging;

pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
