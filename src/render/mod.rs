//! Rendering module for emitting outline results.

mod json;

pub use json::{to_json, JsonFormat};
