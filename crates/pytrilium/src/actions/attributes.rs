//! Attribute-related ETAPI actions.

use reqwest::Method;

use crate::client::TriliumClient;
use crate::error::Result;
use crate::request::RequestBody;
use crate::response::ApiResponse;
use crate::types::{Attribute, AttributePatch, CreateAttributeParams};

/// Provides access to attribute-related ETAPI operations.
///
/// Obtained via [`TriliumClient::attributes()`].
#[derive(Debug)]
pub struct AttributeActions<'a> {
    pub(crate) client: &'a TriliumClient,
}

impl<'a> AttributeActions<'a> {
    /// Get an attribute by ID.
    pub async fn get(&self, attribute_id: &str) -> Result<Attribute> {
        self.client
            .invoke(
                Method::GET,
                &format!("/attributes/{attribute_id}"),
                RequestBody::Empty,
                &[],
            )
            .await
    }

    /// Create a label or relation.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pytrilium::{CreateAttributeParams, TriliumClient};
    ///
    /// # async fn example(client: TriliumClient) -> pytrilium::Result<()> {
    /// let attribute = client
    ///     .attributes()
    ///     .create(&CreateAttributeParams::label("evnnmvHTCgIn", "priority", "high"))
    ///     .await?;
    /// println!("created {}", attribute.attribute_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, params: &CreateAttributeParams) -> Result<Attribute> {
        self.client
            .invoke(Method::POST, "/attributes", RequestBody::json(params)?, &[])
            .await
    }

    /// Change an attribute's value or position.
    pub async fn patch(&self, attribute_id: &str, patch: &AttributePatch) -> Result<Attribute> {
        self.client
            .invoke(
                Method::PATCH,
                &format!("/attributes/{attribute_id}"),
                RequestBody::json(patch)?,
                &[],
            )
            .await
    }

    /// Delete an attribute.
    pub async fn delete(&self, attribute_id: &str) -> Result<ApiResponse> {
        self.client
            .request(
                Method::DELETE,
                &format!("/attributes/{attribute_id}"),
                RequestBody::Empty,
                &[],
            )
            .await
    }
}
