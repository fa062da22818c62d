//! Data models
//!
//! Persisted as one JSON document and echoed to the browser client as-is,
//! so every type serializes with camelCase keys.

pub mod document;
pub mod member;
pub mod record;
pub mod serde_helpers;

// Re-exports
pub use document::*;
pub use member::*;
pub use record::*;
