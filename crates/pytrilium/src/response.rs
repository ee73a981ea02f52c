//! The buffered response handed back by the dispatcher.

use std::borrow::Cow;

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Status codes treated as success. Anything else is logged as a warning.
pub const VALID_RESPONSE_CODES: [u16; 4] = [200, 201, 202, 204];

/// Whether `status` is in [`VALID_RESPONSE_CODES`].
pub fn is_valid_status(status: StatusCode) -> bool {
    VALID_RESPONSE_CODES.contains(&status.as_u16())
}

/// A fully read HTTP response from Trilium.
///
/// The body is buffered so it can be logged on an unexpected status and
/// still be handed to the caller afterwards.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ApiResponse {
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// The HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The body decoded as UTF-8, with invalid sequences replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Whether the status is in [`VALID_RESPONSE_CODES`].
    pub fn is_valid(&self) -> bool {
        is_valid_status(self.status)
    }

    /// Consume the response, returning the body.
    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }

    /// Turn a status outside the allow-list into [`Error::Status`].
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(Error::Status {
                status: self.status.as_u16(),
                body: self.text().into_owned(),
            })
        }
    }
}
