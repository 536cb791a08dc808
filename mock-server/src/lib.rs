//! In-process stand-in for the remote todo API.
//!
//! Speaks the same wire contract as the hosted service: integer ids assigned
//! on create, capitalized field names on output, either casing accepted on
//! input, full-record `PUT`. The list endpoint can optionally wrap its array
//! in `{"data": [...]}` to exercise that response shape.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "IsCompleted")]
    pub is_completed: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    #[serde(rename = "Title", alias = "title")]
    pub title: String,
    #[serde(rename = "Description", alias = "description", default)]
    pub description: String,
    #[serde(rename = "IsCompleted", alias = "isCompleted", default)]
    pub is_completed: bool,
}

/// Full replacement body. `Id`, when present, must match the path.
#[derive(Deserialize)]
pub struct ReplaceTodo {
    #[serde(rename = "Id", alias = "id", default)]
    pub id: Option<i64>,
    #[serde(rename = "Title", alias = "title")]
    pub title: String,
    #[serde(rename = "Description", alias = "description", default)]
    pub description: String,
    #[serde(rename = "IsCompleted", alias = "isCompleted", default)]
    pub is_completed: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MockConfig {
    /// Answer `GET /todos` with `{"data": [...]}` instead of a bare array.
    pub wrap_list: bool,
}

#[derive(Debug, Default)]
pub struct TodoTable {
    next_id: i64,
    todos: BTreeMap<i64, Todo>,
}

impl TodoTable {
    fn insert(&mut self, input: CreateTodo) -> Todo {
        self.next_id += 1;
        let todo = Todo {
            id: self.next_id,
            title: input.title,
            description: input.description,
            is_completed: input.is_completed,
        };
        self.todos.insert(todo.id, todo.clone());
        todo
    }
}

pub type Db = Arc<RwLock<TodoTable>>;

#[derive(Clone)]
struct AppState {
    db: Db,
    config: MockConfig,
}

pub fn app() -> Router {
    app_with(MockConfig::default())
}

pub fn app_with(config: MockConfig) -> Router {
    let state = AppState {
        db: Db::default(),
        config,
    };
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(replace_todo).delete(delete_todo))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(listener: TcpListener, config: MockConfig) -> Result<(), std::io::Error> {
    info!(addr = ?listener.local_addr().ok(), ?config, "mock todo API serving");
    axum::serve(listener, app_with(config)).await
}

async fn list_todos(State(state): State<AppState>) -> Response {
    let todos: Vec<Todo> = state.db.read().await.todos.values().cloned().collect();
    debug!(count = todos.len(), "listing todos");
    if state.config.wrap_list {
        Json(json!({ "data": todos })).into_response()
    } else {
        Json(todos).into_response()
    }
}

async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = state.db.write().await.insert(input);
    debug!(id = todo.id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, StatusCode> {
    let table = state.db.read().await;
    table.todos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn replace_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<ReplaceTodo>,
) -> Result<Json<Todo>, StatusCode> {
    if input.id.is_some_and(|body_id| body_id != id) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut table = state.db.write().await;
    let todo = table.todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    todo.title = input.title;
    todo.description = input.description;
    todo.is_completed = input.is_completed;
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> StatusCode {
    let mut table = state.db.write().await;
    match table.todos.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}
