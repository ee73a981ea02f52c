//! Note-related types.

use serde::{Deserialize, Serialize};

use super::{Attribute, Branch};

/// A note as returned by ETAPI.
///
/// Content is not part of this record; fetch it with
/// [`NoteActions::content()`](crate::actions::NoteActions::content).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// The note ID.
    pub note_id: String,
    /// The note title.
    pub title: String,
    /// The note type (`text`, `code`, `file`, `image`, `book`, ...).
    #[serde(rename = "type")]
    pub note_type: String,
    /// MIME type of the content.
    #[serde(default)]
    pub mime: String,
    /// Whether the note is protected (encrypted).
    #[serde(default)]
    pub is_protected: bool,
    /// ID of the blob holding the content.
    #[serde(default)]
    pub blob_id: Option<String>,
    /// Attributes owned by the note.
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// IDs of the parent notes.
    #[serde(default)]
    pub parent_note_ids: Vec<String>,
    /// IDs of the child notes.
    #[serde(default)]
    pub child_note_ids: Vec<String>,
    /// IDs of the branches placing this note under its parents.
    #[serde(default)]
    pub parent_branch_ids: Vec<String>,
    /// IDs of the branches placing children under this note.
    #[serde(default)]
    pub child_branch_ids: Vec<String>,
    /// Local creation time.
    #[serde(default)]
    pub date_created: Option<String>,
    /// Local modification time.
    #[serde(default)]
    pub date_modified: Option<String>,
    /// UTC creation time.
    #[serde(default)]
    pub utc_date_created: Option<String>,
    /// UTC modification time.
    #[serde(default)]
    pub utc_date_modified: Option<String>,
}

/// A newly created note together with the branch that places it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NoteWithBranch {
    /// The created note.
    pub note: Note,
    /// Its branch under the requested parent.
    pub branch: Branch,
}

/// Parameters for creating a note.
///
/// Use [`CreateNoteParams::new`] and the chained setters for the optional
/// fields.
///
/// # Example
///
/// ```
/// use pytrilium::CreateNoteParams;
///
/// let params = CreateNoteParams::new("root", "Groceries", "text", "<p>milk</p>")
///     .prefix("todo")
///     .note_position(10);
/// assert_eq!(params.parent_note_id, "root");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteParams {
    /// Parent note ID.
    pub parent_note_id: String,
    /// Title of the new note.
    pub title: String,
    /// Note type.
    #[serde(rename = "type")]
    pub note_type: String,
    /// Initial content.
    pub content: String,
    /// MIME type, required by some note types such as `code` and `file`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    /// Position among siblings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_position: Option<i64>,
    /// Branch prefix shown before the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Whether the note starts expanded in the tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_expanded: Option<bool>,
    /// Force a specific note ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_id: Option<String>,
    /// Force a specific branch ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
}

impl CreateNoteParams {
    /// Create parameters with the required fields.
    pub fn new(
        parent_note_id: impl Into<String>,
        title: impl Into<String>,
        note_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            parent_note_id: parent_note_id.into(),
            title: title.into(),
            note_type: note_type.into(),
            content: content.into(),
            mime: None,
            note_position: None,
            prefix: None,
            is_expanded: None,
            note_id: None,
            branch_id: None,
        }
    }

    /// Set the MIME type.
    pub fn mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Set the position among siblings.
    pub fn note_position(mut self, position: i64) -> Self {
        self.note_position = Some(position);
        self
    }

    /// Set the branch prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set whether the note starts expanded.
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.is_expanded = Some(expanded);
        self
    }

    /// Force the note ID.
    pub fn note_id(mut self, id: impl Into<String>) -> Self {
        self.note_id = Some(id.into());
        self
    }

    /// Force the branch ID.
    pub fn branch_id(mut self, id: impl Into<String>) -> Self {
        self.branch_id = Some(id.into());
        self
    }
}

/// Fields of a note that can be changed with PATCH. Unset fields are left
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePatch {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New note type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub note_type: Option<String>,
    /// New MIME type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    /// New local creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    /// New UTC creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc_date_created: Option<String>,
}

/// Format of a note export archive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// HTML files.
    #[default]
    Html,
    /// Markdown files.
    Markdown,
}

impl ExportFormat {
    /// The value sent in the `format` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "markdown",
        }
    }
}

/// Body of a note search response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Matching notes.
    pub results: Vec<Note>,
    /// Server-side debug information, when requested.
    #[serde(default)]
    pub debug_info: Option<serde_json::Value>,
}
