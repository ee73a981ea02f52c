//! Branch-related ETAPI actions.
//!
//! Branches place notes in the tree. Creating a branch for an existing note
//! clones it under another parent.

use reqwest::Method;

use crate::client::TriliumClient;
use crate::error::Result;
use crate::request::RequestBody;
use crate::response::ApiResponse;
use crate::types::{Branch, BranchPatch, CreateBranchParams};

/// Provides access to branch-related ETAPI operations.
///
/// Obtained via [`TriliumClient::branches()`].
#[derive(Debug)]
pub struct BranchActions<'a> {
    pub(crate) client: &'a TriliumClient,
}

impl<'a> BranchActions<'a> {
    /// Get a branch by ID.
    pub async fn get(&self, branch_id: &str) -> Result<Branch> {
        self.client
            .invoke(
                Method::GET,
                &format!("/branches/{branch_id}"),
                RequestBody::Empty,
                &[],
            )
            .await
    }

    /// Create a branch.
    ///
    /// If the note already sits under that parent, Trilium updates the
    /// existing branch instead.
    pub async fn create(&self, params: &CreateBranchParams) -> Result<Branch> {
        self.client
            .invoke(Method::POST, "/branches", RequestBody::json(params)?, &[])
            .await
    }

    /// Change a branch's prefix, position or expansion state.
    pub async fn patch(&self, branch_id: &str, patch: &BranchPatch) -> Result<Branch> {
        self.client
            .invoke(
                Method::PATCH,
                &format!("/branches/{branch_id}"),
                RequestBody::json(patch)?,
                &[],
            )
            .await
    }

    /// Delete a branch. Deleting a note's last branch deletes the note.
    pub async fn delete(&self, branch_id: &str) -> Result<ApiResponse> {
        self.client
            .request(
                Method::DELETE,
                &format!("/branches/{branch_id}"),
                RequestBody::Empty,
                &[],
            )
            .await
    }
}
