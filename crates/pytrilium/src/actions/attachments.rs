//! Attachment-related ETAPI actions.
//!
//! Metadata and content are separate resources: metadata is JSON, content
//! is read and written as raw bytes.

use reqwest::Method;

use crate::client::TriliumClient;
use crate::error::Result;
use crate::request::RequestBody;
use crate::response::ApiResponse;
use crate::types::{Attachment, AttachmentPatch, CreateAttachmentParams};

/// Provides access to attachment-related ETAPI operations.
///
/// Obtained via [`TriliumClient::attachments()`].
#[derive(Debug)]
pub struct AttachmentActions<'a> {
    pub(crate) client: &'a TriliumClient,
}

impl<'a> AttachmentActions<'a> {
    /// Create an attachment.
    pub async fn create(&self, params: &CreateAttachmentParams) -> Result<Attachment> {
        self.client
            .invoke(Method::POST, "/attachments", RequestBody::json(params)?, &[])
            .await
    }

    /// Get an attachment's metadata.
    pub async fn get(&self, attachment_id: &str) -> Result<Attachment> {
        self.client
            .invoke(
                Method::GET,
                &format!("/attachments/{attachment_id}"),
                RequestBody::Empty,
                &[],
            )
            .await
    }

    /// Change an attachment's metadata.
    pub async fn patch(&self, attachment_id: &str, patch: &AttachmentPatch) -> Result<Attachment> {
        self.client
            .invoke(
                Method::PATCH,
                &format!("/attachments/{attachment_id}"),
                RequestBody::json(patch)?,
                &[],
            )
            .await
    }

    /// Delete an attachment.
    pub async fn delete(&self, attachment_id: &str) -> Result<ApiResponse> {
        self.client
            .request(
                Method::DELETE,
                &format!("/attachments/{attachment_id}"),
                RequestBody::Empty,
                &[],
            )
            .await
    }

    /// Download an attachment's content.
    pub async fn content(&self, attachment_id: &str) -> Result<Vec<u8>> {
        self.client
            .invoke_bytes(&format!("/attachments/{attachment_id}/content"), &[])
            .await
    }

    /// Replace an attachment's content.
    pub async fn update_content(
        &self,
        attachment_id: &str,
        data: impl Into<Vec<u8>>,
    ) -> Result<ApiResponse> {
        self.client
            .request(
                Method::PUT,
                &format!("/attachments/{attachment_id}/content"),
                RequestBody::Binary(data.into()),
                &[],
            )
            .await
    }
}
