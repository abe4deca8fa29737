//! Synchronous API client core for the VCL snippet resource.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `SnippetClient` is stateless — it holds only `base_url`.
//! - Each operation is split into `build_*` (validates required fields,
//!   produces a request) and `parse_*` (consumes a response), so the I/O
//!   boundary is explicit and precondition failures never touch the network.
//! - Create and update bodies are form-encoded; all responses are JSON.
//! - List results are sorted by name with a stable sort, so snippets that
//!   share a name keep the server-returned relative order.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::SnippetClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateSnippet, Snippet, SnippetType, StatusResponse, UpdateSnippet};
