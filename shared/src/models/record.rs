//! Record Model

use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// A dated entry in a member's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub description: String,
    /// ISO-8601 date or date-time, kept exactly as the client sent it
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub date: String,
}

/// Append record payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCreate {
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "serde_helpers::empty_as_none")]
    pub date: Option<String>,
}
