//! Domain types for the Trilium ETAPI.
//!
//! Entities returned by the server (notes, branches, attributes,
//! attachments) and the payloads used to create or patch them.

mod app;
mod attachment;
mod attribute;
mod branch;
mod note;

pub use app::AppInfo;
pub use attachment::{Attachment, AttachmentPatch, CreateAttachmentParams};
pub use attribute::{Attribute, AttributePatch, AttributeType, CreateAttributeParams};
pub use branch::{Branch, BranchPatch, CreateBranchParams};
pub use note::{CreateNoteParams, ExportFormat, Note, NotePatch, NoteWithBranch, SearchResponse};
