//! Error types for the pytrilium crate.
//!
//! Construction-time problems (a malformed URL, a missing credential, a
//! failed liveness probe) are fatal and surface from
//! [`ClientBuilder::build()`](crate::ClientBuilder::build). Once a client
//! exists, the raw dispatcher never fails on a status code: it logs the
//! anomaly and returns the [`ApiResponse`](crate::ApiResponse). Typed
//! operations, which need a body they can decode, report a non-valid status
//! as [`Error::Status`].
//!
//! # Example
//!
//! ```no_run
//! use pytrilium::{Error, TriliumClient};
//!
//! # async fn example() {
//! let result = TriliumClient::builder()
//!     .url("https://trilium.example.com")
//!     .token("my-etapi-token")
//!     .build()
//!     .await;
//!
//! match result {
//!     Ok(client) => println!("connected to {}", client.base_url()),
//!     Err(Error::InvalidUrl(url)) => eprintln!("bad URL: {url}"),
//!     Err(Error::Authentication { status, .. }) => {
//!         eprintln!("token rejected ({status}), check the ETAPI token");
//!     }
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! # }
//! ```

use thiserror::Error;

use crate::response::VALID_RESPONSE_CODES;

/// The error type for Trilium ETAPI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Local I/O error, e.g. while writing an export archive.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The base URL has no http/https scheme or cannot be parsed.
    ///
    /// Carries the URL exactly as it was supplied.
    #[error(
        "Invalid URL, please make sure to include https:// or http:// and that the URL is correct. The attempted URL was: {0}"
    )]
    InvalidUrl(String),

    /// Neither an ETAPI token nor a password was supplied.
    #[error("You must provide either a token or a password")]
    MissingCredential,

    /// The liveness probe was rejected with 401 or 403.
    #[error(
        "Trilium rejected the credential: {status}, response text: {body}. Response code should be one of {VALID_RESPONSE_CODES:?}. Please check your token or password."
    )]
    Authentication {
        /// Status code returned by the probe.
        status: u16,
        /// Response body returned by the probe.
        body: String,
    },

    /// The liveness probe returned a status outside the allow-list.
    #[error(
        "Invalid response code: {status}, response text: {body}. Response code should be one of {VALID_RESPONSE_CODES:?}. Please check your Trilium, URL, and token."
    )]
    Probe {
        /// Status code returned by the probe.
        status: u16,
        /// Response body returned by the probe.
        body: String,
    },

    /// A typed operation received a status outside the allow-list.
    #[error("Trilium returned {status}: {body}")]
    Status {
        /// Status code of the response.
        status: u16,
        /// Response body, decoded lossily as UTF-8.
        body: String,
    },

    /// The server could not be reached, even after retrying.
    #[error("Could not connect to Trilium at {0}. Is the server running?")]
    ConnectionRefused(String),

    /// The logging configuration could not be applied.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// A specialized Result type for Trilium ETAPI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_error_names_status_body_and_allow_list() {
        let err = Error::Probe {
            status: 500,
            body: "boom".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("boom"));
        assert!(msg.contains("[200, 201, 202, 204]"));
    }

    #[test]
    fn invalid_url_keeps_original_input() {
        let err = Error::InvalidUrl("trilium.local".to_string());
        assert!(err.to_string().ends_with("trilium.local"));
    }
}
