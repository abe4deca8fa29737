use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Form, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snippet {
    pub service_id: String,
    pub version: u32,
    pub content: String,
    pub dynamic: bool,
    pub id: String,
    pub name: String,
    pub priority: u32,
    #[serde(rename = "type")]
    pub snippet_type: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct CreateSnippetForm {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub dynamic: bool,
    pub name: String,
    #[serde(default)]
    pub priority: u32,
    #[serde(rename = "type")]
    pub snippet_type: String,
}

#[derive(Deserialize)]
pub struct UpdateSnippetForm {
    pub content: Option<String>,
    pub name: Option<String>,
    pub priority: Option<u32>,
    #[serde(rename = "type")]
    pub snippet_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

/// Snippets per service+version, in insertion order. List never sorts, so
/// clients observe the order snippets were created in.
pub type Db = Arc<RwLock<HashMap<(String, u32), Vec<Snippet>>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route(
            "/service/{service_id}/version/{version}/snippet",
            get(list_snippets).post(create_snippet),
        )
        .route(
            "/service/{service_id}/version/{version}/snippet/{name}",
            put(update_snippet).delete(delete_snippet),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_snippets(
    State(db): State<Db>,
    Path((service_id, version)): Path<(String, u32)>,
) -> Json<Vec<Snippet>> {
    let db = db.read().await;
    Json(db.get(&(service_id, version)).cloned().unwrap_or_default())
}

async fn create_snippet(
    State(db): State<Db>,
    Path((service_id, version)): Path<(String, u32)>,
    Form(input): Form<CreateSnippetForm>,
) -> Json<Snippet> {
    let now = Utc::now();
    let snippet = Snippet {
        service_id: service_id.clone(),
        version,
        content: input.content,
        dynamic: input.dynamic,
        id: Uuid::new_v4().simple().to_string(),
        name: input.name,
        priority: input.priority,
        snippet_type: input.snippet_type,
        created_at: Some(now),
        updated_at: Some(now),
        deleted_at: None,
    };
    db.write()
        .await
        .entry((service_id, version))
        .or_default()
        .push(snippet.clone());
    Json(snippet)
}

async fn update_snippet(
    State(db): State<Db>,
    Path((service_id, version, name)): Path<(String, u32, String)>,
    Form(input): Form<UpdateSnippetForm>,
) -> Result<Json<Snippet>, StatusCode> {
    let mut db = db.write().await;
    let snippets = db
        .get_mut(&(service_id, version))
        .ok_or(StatusCode::NOT_FOUND)?;
    let snippet = snippets
        .iter_mut()
        .find(|s| s.name == name)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(content) = input.content {
        snippet.content = content;
    }
    if let Some(new_name) = input.name {
        snippet.name = new_name;
    }
    if let Some(priority) = input.priority {
        snippet.priority = priority;
    }
    if let Some(snippet_type) = input.snippet_type {
        snippet.snippet_type = snippet_type;
    }
    snippet.updated_at = Some(Utc::now());
    Ok(Json(snippet.clone()))
}

async fn delete_snippet(
    State(db): State<Db>,
    Path((service_id, version, name)): Path<(String, u32, String)>,
) -> Json<StatusResponse> {
    let mut db = db.write().await;
    let removed = db
        .get_mut(&(service_id, version))
        .and_then(|snippets| {
            snippets
                .iter()
                .position(|s| s.name == name)
                .map(|i| snippets.remove(i))
        })
        .is_some();
    if removed {
        Json(StatusResponse { ok: true, msg: None })
    } else {
        Json(StatusResponse {
            ok: false,
            msg: Some("not found".to_string()),
        })
    }
}
