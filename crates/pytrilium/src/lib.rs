//! An async Rust client for the Trilium Notes ETAPI.
//!
//! This crate provides typed access to Trilium's external API: notes,
//! branches, attributes, attachments and calendar notes, over one shared
//! HTTP session that handles authentication, retries and response-code
//! checks.
//!
//! # Quick Start
//!
//! ```no_run
//! use pytrilium::TriliumClient;
//!
//! # async fn example() -> pytrilium::Result<()> {
//! // The URL and token are checked against /app-info before build() returns
//! let client = TriliumClient::builder()
//!     .url("https://trilium.example.com")
//!     .token("my-etapi-token")
//!     .build()
//!     .await?;
//!
//! let info = client.app_info().await?;
//! println!("Trilium {}", info.app_version);
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! ```no_run
//! use pytrilium::{RetryPolicy, TriliumClient};
//!
//! # async fn example() -> pytrilium::Result<()> {
//! let client = TriliumClient::builder()
//!     .url("http://localhost:8080")
//!     .password("my-password")
//!     .debug(true)
//!     .retry_policy(RetryPolicy::default().max_retries(3))
//!     .build()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Action Groups
//!
//! - [`TriliumClient::notes()`] - Get, create, patch, delete, search and export notes
//! - [`TriliumClient::branches()`] - Place notes in the tree
//! - [`TriliumClient::attributes()`] - Labels and relations
//! - [`TriliumClient::attachments()`] - Attachment metadata and content
//! - [`TriliumClient::calendar()`] - Day, week, month, year and inbox notes
//! - [`TriliumClient::auth()`] - Password login and logout
//!
//! # Response Codes
//!
//! [`TriliumClient::request()`] never fails because of a status code. A
//! status outside [`VALID_RESPONSE_CODES`] is logged as a warning and the
//! response is returned. Operations that decode an entity report such a
//! status as [`Error::Status`].

pub mod actions;
pub mod client;
pub mod error;
pub mod logging;
mod request;
mod response;
pub mod retry;
mod session;
pub mod types;
pub mod url;

pub use client::{ClientBuilder, TriliumClient};
pub use error::{Error, Result};
pub use logging::LogConfig;
pub use request::RequestBody;
pub use reqwest::{Method, StatusCode};
pub use response::{ApiResponse, VALID_RESPONSE_CODES, is_valid_status};
pub use retry::RetryPolicy;
pub use session::DEFAULT_USER_AGENT;
pub use types::{
    AppInfo, Attachment, AttachmentPatch, Attribute, AttributePatch, AttributeType, Branch,
    BranchPatch, CreateAttachmentParams, CreateAttributeParams, CreateBranchParams,
    CreateNoteParams, ExportFormat, Note, NotePatch, NoteWithBranch, SearchResponse,
};
