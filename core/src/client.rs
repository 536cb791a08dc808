//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only the collection endpoint and carries no mutable
//! state between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes the
//! response. Every response first goes through [`TodoClient::parse_envelope`],
//! which reduces it to the uniform `{succeeded, payload, status}` triple; a
//! body that is not JSON becomes a `None` payload rather than an error.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{normalize_todo, normalize_todos, NewTodo, Todo};

/// Path of the todo collection below the API base URL.
pub const TODOS_PATH: &str = "/todos";

/// Uniform result of one API round-trip.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub succeeded: bool,
    pub payload: Option<Value>,
    pub status: u16,
}

impl ApiResponse {
    /// Result for a request that never produced a response.
    pub fn transport_failure() -> Self {
        Self {
            succeeded: false,
            payload: None,
            status: 0,
        }
    }

    fn check(self) -> Result<Option<Value>, ApiError> {
        if self.succeeded {
            Ok(self.payload)
        } else {
            Err(ApiError::from_status(self.status))
        }
    }
}

impl From<HttpResponse> for ApiResponse {
    fn from(response: HttpResponse) -> Self {
        let payload = serde_json::from_str::<Value>(&response.body)
            .ok()
            .filter(|value| !value.is_null());
        Self {
            succeeded: response.is_success(),
            payload,
            status: response.status,
        }
    }
}

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    endpoint: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: format!("{}{TODOS_PATH}", base_url.trim_end_matches('/')),
        }
    }

    /// Absolute URL of the todo collection.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build a request against the collection. `suffix` is appended to the
    /// endpoint verbatim (`""` or `"/{id}"`); a `None` body sends no body.
    pub fn build_request(&self, method: HttpMethod, suffix: &str, body: Option<&Value>) -> HttpRequest {
        let path = format!("{}{suffix}", self.endpoint);
        debug!(%method, %path, has_body = body.is_some(), "building request");
        HttpRequest {
            method,
            path,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: body.map(Value::to_string),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.build_request(HttpMethod::Get, "", None)
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        self.build_request(HttpMethod::Get, &item_suffix(id), None)
    }

    pub fn build_create_todo(&self, input: &NewTodo) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(self.build_request(HttpMethod::Post, "", Some(&body)))
    }

    /// Full-representation write; the API has no partial update.
    pub fn build_replace_todo(&self, todo: &Todo) -> Result<HttpRequest, ApiError> {
        let body = to_json(todo)?;
        Ok(self.build_request(HttpMethod::Put, &item_suffix(todo.id), Some(&body)))
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        self.build_request(HttpMethod::Delete, &item_suffix(id), None)
    }

    pub fn parse_envelope(&self, response: HttpResponse) -> ApiResponse {
        ApiResponse::from(response)
    }

    /// Accepts a bare array or an object wrapping the array in `data`.
    /// Any other successful payload is treated as an empty collection.
    pub fn parse_list_todos(&self, response: impl Into<ApiResponse>) -> Result<Vec<Todo>, ApiError> {
        let payload = response.into().check()?;
        let values = match payload {
            Some(Value::Array(values)) => values,
            Some(Value::Object(mut map)) => match map.remove("data").or_else(|| map.remove("Data")) {
                Some(Value::Array(values)) => values,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };
        Ok(normalize_todos(values))
    }

    pub fn parse_get_todo(&self, response: impl Into<ApiResponse>) -> Result<Todo, ApiError> {
        let payload = response.into().check()?.ok_or(ApiError::EmptyPayload)?;
        normalize_todo(payload).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_create_todo(&self, response: impl Into<ApiResponse>) -> Result<(), ApiError> {
        response.into().check().map(drop)
    }

    pub fn parse_replace_todo(&self, response: impl Into<ApiResponse>) -> Result<(), ApiError> {
        response.into().check().map(drop)
    }

    pub fn parse_delete_todo(&self, response: impl Into<ApiResponse>) -> Result<(), ApiError> {
        response.into().check().map(drop)
    }
}

/// Path suffix addressing a single item.
pub fn item_suffix(id: i64) -> String {
    format!("/{id}")
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    fn json_header() -> Vec<(String, String)> {
        vec![("Content-Type".to_string(), "application/json".to_string())]
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert!(req.body.is_none());
        assert_eq!(req.headers, json_header());
    }

    #[test]
    fn build_get_todo_produces_correct_request() {
        let req = client().build_get_todo(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_todo_produces_correct_request() {
        let req = client()
            .build_create_todo(&NewTodo::new("Buy milk", "Semi-skimmed"))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert_eq!(req.headers, json_header());
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["Title"], "Buy milk");
        assert_eq!(body["Description"], "Semi-skimmed");
        assert_eq!(body["IsCompleted"], false);
    }

    #[test]
    fn build_replace_todo_sends_full_record() {
        let todo = Todo {
            id: 5,
            title: "Updated".to_string(),
            description: "Desc".to_string(),
            is_completed: true,
        };
        let req = client().build_replace_todo(&todo).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/todos/5");
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["Id"], 5);
        assert_eq!(body["Title"], "Updated");
        assert_eq!(body["IsCompleted"], true);
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo(8);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/todos/8");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/");
        assert_eq!(client.build_list_todos().path, "http://localhost:3000/todos");
    }

    #[test]
    fn envelope_keeps_status_and_json_payload() {
        let env = client().parse_envelope(HttpResponse::new(201, r#"{"Id":1}"#));
        assert!(env.succeeded);
        assert_eq!(env.status, 201);
        assert_eq!(env.payload.unwrap()["Id"], 1);
    }

    #[test]
    fn envelope_turns_bad_json_into_null_payload() {
        let env = client().parse_envelope(HttpResponse::new(200, "<html>oops</html>"));
        assert!(env.succeeded);
        assert!(env.payload.is_none());

        let env = client().parse_envelope(HttpResponse::new(500, ""));
        assert!(!env.succeeded);
        assert!(env.payload.is_none());
        assert_eq!(env.status, 500);
    }

    #[test]
    fn parse_list_todos_accepts_bare_array() {
        let response = HttpResponse::new(
            200,
            r#"[{"Id":1,"Title":"Test","Description":"","IsCompleted":false}]"#,
        );
        let todos = client().parse_list_todos(response).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Test");
    }

    #[test]
    fn parse_list_todos_accepts_data_wrapper() {
        let response = HttpResponse::new(200, r#"{"data":[{"id":2,"title":"Wrapped"}]}"#);
        let todos = client().parse_list_todos(response).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 2);
    }

    #[test]
    fn parse_list_todos_tolerates_unexpected_payload() {
        let todos = client()
            .parse_list_todos(HttpResponse::new(200, r#"{"message":"ok"}"#))
            .unwrap();
        assert!(todos.is_empty());
        let todos = client()
            .parse_list_todos(HttpResponse::new(200, "not json"))
            .unwrap();
        assert!(todos.is_empty());
    }

    #[test]
    fn parse_list_todos_failure_status() {
        let err = client()
            .parse_list_todos(HttpResponse::new(503, "down"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 503 }));
    }

    #[test]
    fn parse_get_todo_not_found() {
        let err = client()
            .parse_get_todo(HttpResponse::new(404, ""))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_get_todo_requires_payload() {
        let err = client()
            .parse_get_todo(HttpResponse::new(200, "null"))
            .unwrap_err();
        assert!(matches!(err, ApiError::EmptyPayload));
    }

    #[test]
    fn parse_get_todo_rejects_wrong_shape() {
        let err = client()
            .parse_get_todo(HttpResponse::new(200, r#"{"Title":"no id"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn mutations_judge_success_by_status_only() {
        let c = client();
        assert!(c.parse_create_todo(HttpResponse::new(201, "")).is_ok());
        assert!(c.parse_replace_todo(HttpResponse::new(200, "garbage")).is_ok());
        assert!(c.parse_delete_todo(HttpResponse::new(204, "")).is_ok());
        assert!(matches!(
            c.parse_delete_todo(HttpResponse::new(404, "")),
            Err(ApiError::NotFound)
        ));
        assert!(matches!(
            c.parse_create_todo(HttpResponse::new(400, r#"{"error":"bad"}"#)),
            Err(ApiError::Http { status: 400 })
        ));
    }

    #[test]
    fn transport_failure_is_an_unsuccessful_envelope() {
        let err = client()
            .parse_delete_todo(ApiResponse::transport_failure())
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
