//! Shared types for the roster server
//!
//! Domain models persisted in the roster document and the id/time helpers
//! used to stamp them.

pub mod models;
pub mod util;

// Re-exports
pub use models::{Document, Member, MemberFields, Record, RecordCreate};
pub use serde::{Deserialize, Serialize};
