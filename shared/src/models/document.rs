//! Document Model - the persisted root of the roster

use serde::{Deserialize, Serialize};

use super::Member;
use super::serde_helpers;

/// Whole roster as stored in `data.json`
///
/// Unknown top-level keys are ignored on read and dropped on the next write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub members: Vec<Member>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the member with the given id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.members.iter().position(|m| m.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| m.id == id)
    }

    /// Remove and return the member with the given id
    pub fn remove(&mut self, id: &str) -> Option<Member> {
        self.position(id).map(|idx| self.members.remove(idx))
    }
}
