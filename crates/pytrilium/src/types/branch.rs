//! Branch types.
//!
//! A branch places a note under a parent. The same note may have several
//! branches, one per parent.

use serde::{Deserialize, Serialize};

/// A branch as returned by ETAPI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    /// The branch ID.
    pub branch_id: String,
    /// The note being placed.
    pub note_id: String,
    /// The parent it is placed under.
    pub parent_note_id: String,
    /// Prefix shown before the note title in the tree.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Position among siblings.
    #[serde(default)]
    pub note_position: i64,
    /// Whether the subtree is expanded.
    #[serde(default)]
    pub is_expanded: bool,
    /// UTC modification time.
    #[serde(default)]
    pub utc_date_modified: Option<String>,
}

/// Parameters for creating a branch (cloning a note under another parent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBranchParams {
    /// The note to place.
    pub note_id: String,
    /// The new parent.
    pub parent_note_id: String,
    /// Prefix shown before the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Position among siblings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_position: Option<i64>,
    /// Whether the subtree starts expanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_expanded: Option<bool>,
}

impl CreateBranchParams {
    /// Place `note_id` under `parent_note_id`.
    pub fn new(note_id: impl Into<String>, parent_note_id: impl Into<String>) -> Self {
        Self {
            note_id: note_id.into(),
            parent_note_id: parent_note_id.into(),
            prefix: None,
            note_position: None,
            is_expanded: None,
        }
    }

    /// Set the prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the position among siblings.
    pub fn note_position(mut self, position: i64) -> Self {
        self.note_position = Some(position);
        self
    }

    /// Set whether the subtree starts expanded.
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.is_expanded = Some(expanded);
        self
    }
}

/// Fields of a branch that can be changed with PATCH.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchPatch {
    /// New prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// New position among siblings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_position: Option<i64>,
    /// New expansion state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_expanded: Option<bool>,
}
