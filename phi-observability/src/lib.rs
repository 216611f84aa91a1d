//! # phi-observability
//!
//! Subscriber setup and span macros. Library crates only emit `tracing`
//! events; binaries and tests call [`init_tracing`] once.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_filter, LOG_ENV_VAR};
