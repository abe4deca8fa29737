//! Domain DTOs for the snippet API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently,
//! so the client's view of the wire contract is not coupled to the server's
//! Axum internals. Integration tests catch any schema drift between the two
//! crates. Timestamps are server-managed and frequently `null` on the wire,
//! so they map to `Option<DateTime<Utc>>` rather than sentinel values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Location in generated VCL where a snippet is inserted.
///
/// Lowercase on the wire. `None` means the snippet is excluded from generated
/// output entirely and must be included manually from custom VCL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnippetType {
    /// Above all subroutines.
    Init,
    /// Inside `vcl_recv`, below the boilerplate and above any objects.
    Recv,
    /// Inside `vcl_hit`.
    Hit,
    /// Inside `vcl_miss`.
    Miss,
    /// Inside `vcl_pass`.
    Pass,
    /// Inside `vcl_fetch`.
    Fetch,
    /// Inside `vcl_error`.
    Error,
    /// Inside `vcl_deliver`.
    Deliver,
    /// Inside `vcl_log`.
    Log,
    /// Not rendered into generated VCL.
    None,
}

/// A single VCL snippet as returned by the API.
///
/// `id` is the server-assigned identity; `name` is the human-facing one used
/// as the key for update and delete. `service_id` and `version` never change
/// once the snippet exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snippet {
    pub service_id: String,
    pub version: u32,
    pub content: String,
    pub dynamic: bool,
    pub id: String,
    pub name: String,
    pub priority: u32,
    #[serde(rename = "type")]
    pub snippet_type: SnippetType,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Form payload for creating a new snippet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSnippet {
    pub content: String,
    pub dynamic: bool,
    pub name: String,
    pub priority: u32,
    #[serde(rename = "type")]
    pub snippet_type: SnippetType,
}

/// Form payload for updating an existing snippet, keyed by name in the path.
///
/// The wire contract deliberately carries no `id` or `dynamic` field here:
/// neither attribute can be changed through an update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSnippet {
    pub content: String,
    pub name: String,
    pub priority: u32,
    #[serde(rename = "type")]
    pub snippet_type: SnippetType,
}

/// Acknowledgment envelope returned by delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}
