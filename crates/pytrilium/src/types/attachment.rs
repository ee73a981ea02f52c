//! Attachment types.

use serde::{Deserialize, Serialize};

/// Attachment metadata as returned by ETAPI. The content itself is fetched
/// separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// The attachment ID.
    pub attachment_id: String,
    /// The owning note (or revision).
    pub owner_id: String,
    /// Role, e.g. `image` or `file`.
    pub role: String,
    /// MIME type of the content.
    pub mime: String,
    /// Title.
    pub title: String,
    /// Position among the owner's attachments.
    #[serde(default)]
    pub position: i64,
    /// ID of the blob holding the content.
    #[serde(default)]
    pub blob_id: Option<String>,
    /// Local modification time.
    #[serde(default)]
    pub date_modified: Option<String>,
    /// UTC modification time.
    #[serde(default)]
    pub utc_date_modified: Option<String>,
    /// When the attachment was scheduled for erasure, if it was.
    #[serde(default)]
    pub utc_date_scheduled_for_erasure_since: Option<String>,
    /// Content length in bytes.
    #[serde(default)]
    pub content_length: Option<u64>,
}

/// Parameters for creating an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttachmentParams {
    /// The owning note.
    pub owner_id: String,
    /// Role, e.g. `image` or `file`.
    pub role: String,
    /// MIME type.
    pub mime: String,
    /// Title.
    pub title: String,
    /// Initial content. Binary content is uploaded afterwards with
    /// [`AttachmentActions::update_content()`](crate::actions::AttachmentActions::update_content).
    pub content: String,
    /// Position among the owner's attachments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

impl CreateAttachmentParams {
    /// Create parameters with the required fields.
    pub fn new(
        owner_id: impl Into<String>,
        role: impl Into<String>,
        mime: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            owner_id: owner_id.into(),
            role: role.into(),
            mime: mime.into(),
            title: title.into(),
            content: content.into(),
            position: None,
        }
    }

    /// Set the position.
    pub fn position(mut self, position: i64) -> Self {
        self.position = Some(position);
        self
    }
}

/// Fields of an attachment that can be changed with PATCH.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentPatch {
    /// New role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// New MIME type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}
