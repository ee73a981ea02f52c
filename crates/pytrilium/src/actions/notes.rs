//! Note-related ETAPI actions.
//!
//! This module provides operations for reading, creating, updating,
//! deleting, searching and exporting notes.
//!
//! # Example
//!
//! ```no_run
//! use pytrilium::{CreateNoteParams, TriliumClient};
//!
//! # async fn example(client: TriliumClient) -> pytrilium::Result<()> {
//! let created = client
//!     .notes()
//!     .create(&CreateNoteParams::new("root", "Shopping", "text", "<p>eggs</p>"))
//!     .await?;
//!
//! let content = client.notes().content(&created.note.note_id).await?;
//! println!("{content}");
//! # Ok(())
//! # }
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use reqwest::Method;
use tracing::instrument::WithSubscriber;
use tracing::{error, info};

use crate::client::TriliumClient;
use crate::error::Result;
use crate::request::RequestBody;
use crate::response::ApiResponse;
use crate::types::{
    Attachment, CreateNoteParams, ExportFormat, Note, NotePatch, NoteWithBranch, SearchResponse,
};

/// File name prefix used when an export destination is a directory.
pub const EXPORT_FILE_PREFIX: &str = "pytrilium_export_";

/// Provides access to note-related ETAPI operations.
///
/// Obtained via [`TriliumClient::notes()`].
#[derive(Debug)]
pub struct NoteActions<'a> {
    pub(crate) client: &'a TriliumClient,
}

impl<'a> NoteActions<'a> {
    /// Get a note's metadata by ID.
    pub async fn get(&self, note_id: &str) -> Result<Note> {
        self.client
            .invoke(
                Method::GET,
                &format!("/notes/{note_id}"),
                RequestBody::Empty,
                &[],
            )
            .await
    }

    /// Get a note's content, usually HTML.
    pub async fn content(&self, note_id: &str) -> Result<String> {
        self.client
            .invoke_text(&format!("/notes/{note_id}/content"))
            .await
    }

    /// Replace a note's content.
    ///
    /// Returns the raw response; Trilium answers 204 on success.
    pub async fn update_content(
        &self,
        note_id: &str,
        content: impl Into<String>,
    ) -> Result<ApiResponse> {
        self.client
            .request(
                Method::PUT,
                &format!("/notes/{note_id}/content"),
                RequestBody::Text(content.into()),
                &[],
            )
            .await
    }

    /// Create a note under a parent.
    ///
    /// Returns the note and the branch that places it.
    pub async fn create(&self, params: &CreateNoteParams) -> Result<NoteWithBranch> {
        self.client
            .invoke(
                Method::POST,
                "/create-note",
                RequestBody::json(params)?,
                &[],
            )
            .await
    }

    /// Change a note's title, type or MIME type.
    pub async fn patch(&self, note_id: &str, patch: &NotePatch) -> Result<Note> {
        self.client
            .invoke(
                Method::PATCH,
                &format!("/notes/{note_id}"),
                RequestBody::json(patch)?,
                &[],
            )
            .await
    }

    /// Delete a note and its branches.
    pub async fn delete(&self, note_id: &str) -> Result<ApiResponse> {
        self.client
            .request(
                Method::DELETE,
                &format!("/notes/{note_id}"),
                RequestBody::Empty,
                &[],
            )
            .await
    }

    /// Search notes with Trilium's search syntax, e.g. `#book` or
    /// `note.title *= todo`.
    pub async fn search(&self, query: &str) -> Result<Vec<Note>> {
        let response: SearchResponse = self
            .client
            .invoke(Method::GET, "/notes", RequestBody::Empty, &[("search", query)])
            .await?;
        Ok(response.results)
    }

    /// List a note's attachments.
    pub async fn attachments(&self, note_id: &str) -> Result<Vec<Attachment>> {
        self.client
            .invoke(
                Method::GET,
                &format!("/notes/{note_id}/attachments"),
                RequestBody::Empty,
                &[],
            )
            .await
    }

    /// Export a note and its subtree as a zip archive, in memory.
    pub async fn export(&self, note_id: &str, format: ExportFormat) -> Result<Vec<u8>> {
        self.client
            .invoke_bytes(
                &format!("/notes/{note_id}/export"),
                &[("format", format.as_str())],
            )
            .await
    }

    /// Export a note and its subtree as a zip archive written to `path`.
    ///
    /// A `path` ending in `/` is treated as a directory and receives
    /// `pytrilium_export_<note_id>.zip`; otherwise `.zip` is appended when
    /// missing. Returns `false` if the export request or the file write
    /// fails; the cause is logged at error level.
    pub async fn export_to_file(
        &self,
        note_id: &str,
        path: impl AsRef<Path>,
        format: ExportFormat,
    ) -> bool {
        let destination = export_destination(note_id, path.as_ref());
        let export = self.export_and_log(note_id, &destination, format);
        match self.client.dispatch() {
            Some(dispatch) => export.with_subscriber(dispatch.clone()).await,
            None => export.await,
        }
    }

    async fn export_and_log(&self, note_id: &str, destination: &Path, format: ExportFormat) -> bool {
        match self.try_export_to_file(note_id, destination, format).await {
            Ok(()) => {
                info!(note_id, path = %destination.display(), "exported note");
                true
            }
            Err(e) => {
                error!(note_id, path = %destination.display(), error = %e, "note export failed");
                false
            }
        }
    }

    async fn try_export_to_file(
        &self,
        note_id: &str,
        destination: &Path,
        format: ExportFormat,
    ) -> Result<()> {
        let archive = self.export(note_id, format).await?;
        tokio::fs::write(destination, archive).await?;
        Ok(())
    }

    /// Create a revision snapshot of a note.
    pub async fn create_revision(&self, note_id: &str, format: ExportFormat) -> Result<ApiResponse> {
        self.client
            .request(
                Method::POST,
                &format!("/notes/{note_id}/note-revision"),
                RequestBody::Empty,
                &[("format", format.as_str())],
            )
            .await
    }
}

/// Resolve where an export archive is written.
fn export_destination(note_id: &str, path: &Path) -> PathBuf {
    let mut destination = OsString::from(path.as_os_str());

    let ends_with_separator = path
        .as_os_str()
        .as_encoded_bytes()
        .last()
        .is_some_and(|&b| std::path::is_separator(b as char));
    if ends_with_separator {
        destination.push(format!("{EXPORT_FILE_PREFIX}{note_id}.zip"));
    }

    if !destination.as_encoded_bytes().ends_with(b".zip") {
        destination.push(".zip");
    }

    PathBuf::from(destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_gets_default_file_name() {
        assert_eq!(
            export_destination("abc123", Path::new("/tmp/exports/")),
            PathBuf::from("/tmp/exports/pytrilium_export_abc123.zip")
        );
    }

    #[test]
    fn zip_extension_is_appended() {
        assert_eq!(
            export_destination("abc123", Path::new("/tmp/backup")),
            PathBuf::from("/tmp/backup.zip")
        );
    }

    #[test]
    fn existing_zip_extension_is_kept() {
        assert_eq!(
            export_destination("abc123", Path::new("backup.zip")),
            PathBuf::from("backup.zip")
        );
    }
}
