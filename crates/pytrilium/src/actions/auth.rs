//! Password login and logout.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::TriliumClient;
use crate::error::Result;
use crate::request::RequestBody;
use crate::response::ApiResponse;

/// Provides access to authentication ETAPI operations.
///
/// Obtained via [`TriliumClient::auth()`]. To log in and start using the
/// token in one step, use [`TriliumClient::login()`].
#[derive(Debug)]
pub struct AuthActions<'a> {
    pub(crate) client: &'a TriliumClient,
}

#[derive(Serialize)]
struct LoginParams<'a> {
    password: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    auth_token: String,
}

impl<'a> AuthActions<'a> {
    /// Exchange a password for an ETAPI token.
    ///
    /// The token is returned, not installed on the client.
    pub async fn login(&self, password: &str) -> Result<String> {
        let response: LoginResponse = self
            .client
            .invoke(
                Method::POST,
                "/auth/login",
                RequestBody::json(&LoginParams { password })?,
                &[],
            )
            .await?;
        Ok(response.auth_token)
    }

    /// Invalidate the token the client is using.
    pub async fn logout(&self) -> Result<ApiResponse> {
        self.client
            .request(Method::POST, "/auth/logout", RequestBody::Empty, &[])
            .await
    }
}
