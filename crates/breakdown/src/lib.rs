//! Client for the external script-breakdown service.
//!
//! The breakdown service accepts an uploaded script file, runs its own
//! analysis, and serves the result keyed by a generated `script_id`. Its
//! payloads are opaque here and passed through as [`serde_json::Value`].

pub mod api;

pub use api::{BreakdownApi, BreakdownError, ScriptUpload};
