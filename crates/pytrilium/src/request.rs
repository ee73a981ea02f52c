//! Request bodies accepted by the dispatcher.

use serde::Serialize;

use crate::error::Result;

/// The body of an ETAPI request, tagged with its content type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// Serialized JSON.
    Json(Vec<u8>),
    /// Plain text, e.g. note content.
    Text(String),
    /// Raw bytes, e.g. attachment content.
    Binary(Vec<u8>),
}

impl RequestBody {
    /// Serialize `value` as a JSON body.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self::Json(serde_json::to_vec(value)?))
    }

    /// The `Content-Type` header to send with this body.
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::Json(_) => Some("application/json"),
            Self::Text(_) => Some("text/plain; charset=utf-8"),
            Self::Binary(_) => Some("application/octet-stream"),
        }
    }

    /// Bytes to put on the wire, copied so a retry can resend them.
    pub(crate) fn to_bytes(&self) -> Option<Vec<u8>> {
        match self {
            Self::Empty => None,
            Self::Json(bytes) | Self::Binary(bytes) => Some(bytes.clone()),
            Self::Text(text) => Some(text.clone().into_bytes()),
        }
    }
}
