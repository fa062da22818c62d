//! Member Model

use serde::{Deserialize, Serialize};

use super::Record;
use super::serde_helpers;

/// Roster entry (队员)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub specialty: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub weak_point: String,
    /// Public path of the current photo, e.g. `/uploads/123.jpg`
    #[serde(default)]
    pub photo: Option<String>,
    /// Insertion order is entry order, not date order
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub past_records: Vec<Record>,
}

/// Profile fields accepted on create and update
///
/// Every field is optional: create fills missing ones with empty strings,
/// update only overwrites the ones that are present and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub weak_point: Option<String>,
}

impl Member {
    /// Build a fresh member with no history
    pub fn new(id: String, fields: MemberFields, photo: Option<String>) -> Self {
        Self {
            id,
            name: fields.name.unwrap_or_default(),
            description: fields.description.unwrap_or_default(),
            specialty: fields.specialty.unwrap_or_default(),
            weak_point: fields.weak_point.unwrap_or_default(),
            photo,
            past_records: Vec::new(),
        }
    }

    /// Shallow fill-if-present merge of profile fields
    pub fn merge(&mut self, fields: MemberFields) {
        fn fill(target: &mut String, value: Option<String>) {
            if let Some(v) = value.filter(|v| !v.is_empty()) {
                *target = v;
            }
        }

        fill(&mut self.name, fields.name);
        fill(&mut self.description, fields.description);
        fill(&mut self.specialty, fields.specialty);
        fill(&mut self.weak_point, fields.weak_point);
    }
}

impl MemberFields {
    /// Convenience constructor used by tests and tooling
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}
