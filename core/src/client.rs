//! Stateless HTTP request builder and response parser for the snippet API.
//!
//! # Design
//! `SnippetClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! validates required fields and produces an `HttpRequest`, and a `parse_*`
//! method that consumes an `HttpResponse`. The caller executes the actual
//! HTTP round-trip, keeping the core deterministic and free of I/O
//! dependencies. Required-field checks run before a request is built, so a
//! precondition failure never reaches the network.

use crate::error::ApiError;
use crate::http::{FORM_CONTENT_TYPE, HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateSnippet, Snippet, StatusResponse, UpdateSnippet};

/// Synchronous, stateless client for the VCL snippet resource.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`. Shared references are safe to
/// use from multiple threads; the remote service is the sole arbiter of
/// ordering between concurrent calls.
#[derive(Debug, Clone)]
pub struct SnippetClient {
    base_url: String,
}

impl SnippetClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_snippets(
        &self,
        service_id: &str,
        version: u32,
    ) -> Result<HttpRequest, ApiError> {
        require_service_and_version(service_id, version)?;
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_path(service_id, version),
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn parse_list_snippets(&self, response: HttpResponse) -> Result<Vec<Snippet>, ApiError> {
        check_status(&response, 200)?;
        let mut snippets: Vec<Snippet> =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?;
        // `sort_by` is stable: snippets sharing a name keep the server's order.
        snippets.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(snippets)
    }

    pub fn build_create_snippet(
        &self,
        service_id: &str,
        version: u32,
        input: &CreateSnippet,
    ) -> Result<HttpRequest, ApiError> {
        require_service_and_version(service_id, version)?;
        let body =
            serde_urlencoded::to_string(input).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_path(service_id, version),
            headers: vec![("content-type".to_string(), FORM_CONTENT_TYPE.to_string())],
            body: Some(body),
        })
    }

    pub fn parse_create_snippet(&self, response: HttpResponse) -> Result<Snippet, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn build_update_snippet(
        &self,
        service_id: &str,
        version: u32,
        name: &str,
        input: &UpdateSnippet,
    ) -> Result<HttpRequest, ApiError> {
        require_service_and_version(service_id, version)?;
        require_name(name)?;
        let body =
            serde_urlencoded::to_string(input).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_path(service_id, version, name),
            headers: vec![("content-type".to_string(), FORM_CONTENT_TYPE.to_string())],
            body: Some(body),
        })
    }

    pub fn parse_update_snippet(&self, response: HttpResponse) -> Result<Snippet, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn build_delete_snippet(
        &self,
        service_id: &str,
        version: u32,
        name: &str,
    ) -> Result<HttpRequest, ApiError> {
        require_service_and_version(service_id, version)?;
        require_name(name)?;
        Ok(HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_path(service_id, version, name),
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn parse_delete_snippet(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 200)?;
        let status: StatusResponse =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?;
        if !status.ok {
            return Err(ApiError::RemoteRejected(status.msg.unwrap_or_default()));
        }
        Ok(())
    }

    fn collection_path(&self, service_id: &str, version: u32) -> String {
        format!(
            "{}/service/{service_id}/version/{version}/snippet",
            self.base_url
        )
    }

    fn item_path(&self, service_id: &str, version: u32, name: &str) -> String {
        format!(
            "{}/service/{service_id}/version/{version}/snippet/{name}",
            self.base_url
        )
    }
}

/// Reject an empty service id, then a zero version, in that order.
fn require_service_and_version(service_id: &str, version: u32) -> Result<(), ApiError> {
    if service_id.is_empty() {
        return Err(ApiError::MissingRequiredField("service_id"));
    }
    if version == 0 {
        return Err(ApiError::MissingRequiredField("version"));
    }
    Ok(())
}

/// Reject an empty snippet name. Checked after service id and version.
fn require_name(name: &str) -> Result<(), ApiError> {
    if name.is_empty() {
        return Err(ApiError::MissingRequiredField("name"));
    }
    Ok(())
}

/// Map a non-expected status code to `ApiError::Transport`.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(ApiError::Transport {
        status: response.status,
        body: response.body.clone(),
    })
}
