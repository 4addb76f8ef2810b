//! Service worker logic for the minute notifier.
//!
//! Compiled to wasm and loaded by the generated `service-worker.js` shim,
//! which calls [`service_worker`] once when the worker script is evaluated.

pub mod notify;
pub mod worker;

pub use worker::service_worker;
