//! Server information.

use serde::Deserialize;

/// Response of `GET /app-info`, the endpoint used as liveness probe.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    /// Trilium version.
    pub app_version: String,
    /// Database schema version.
    #[serde(default)]
    pub db_version: Option<u32>,
    /// Sync protocol version.
    #[serde(default)]
    pub sync_version: Option<u32>,
    /// Build date.
    #[serde(default)]
    pub build_date: Option<String>,
    /// Build revision (git hash).
    #[serde(default)]
    pub build_revision: Option<String>,
    /// Server data directory.
    #[serde(default)]
    pub data_directory: Option<String>,
    /// Web clipper protocol version.
    #[serde(default)]
    pub clipper_protocol_version: Option<String>,
    /// Server time in UTC.
    #[serde(default)]
    pub utc_date_time: Option<String>,
}
