use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, MockConfig, Todo};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn bare_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let resp = app().oneshot(bare_request("GET", "/todos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert!(todos.is_empty());
}

#[tokio::test]
async fn list_todos_wrapped_in_data() {
    let app = app_with(MockConfig { wrap_list: true });
    let resp = app.oneshot(bare_request("GET", "/todos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_201() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/todos",
            r#"{"Title":"Buy milk","Description":"Two litres","IsCompleted":false}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.id, 1);
    assert_eq!(todo.title, "Buy milk");
    assert_eq!(todo.description, "Two litres");
    assert!(!todo.is_completed);
}

#[tokio::test]
async fn create_todo_missing_title_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/todos", r#"{"Description":"x"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_todo_not_found() {
    let resp = app().oneshot(bare_request("GET", "/todos/41")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_todo_non_numeric_id_returns_400() {
    let resp = app()
        .oneshot(bare_request("GET", "/todos/not-a-number"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- replace ---

#[tokio::test]
async fn replace_todo_not_found() {
    let resp = app()
        .oneshot(json_request(
            "PUT",
            "/todos/41",
            r#"{"Id":41,"Title":"Nope","Description":"","IsCompleted":false}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_todo_not_found() {
    let resp = app().oneshot(bare_request("DELETE", "/todos/41")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/todos",
            r#"{"Title":"Walk dog","Description":"Around the park"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Todo = body_json(resp).await;
    let id = created.id;

    // list contains the one todo
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(bare_request("GET", "/todos"))
        .await
        .unwrap();
    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos, vec![created.clone()]);

    // replace with the full record
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/todos/{id}"),
            &format!(r#"{{"Id":{id},"Title":"Walk dog","Description":"Around the park","IsCompleted":true}}"#),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Todo = body_json(resp).await;
    assert_eq!(updated.title, "Walk dog");
    assert!(updated.is_completed);

    // replace with mismatched body id is rejected
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/todos/{id}"),
            r#"{"Id":999,"Title":"Other","Description":"","IsCompleted":false}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // get reflects the replacement
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(bare_request("GET", &format!("/todos/{id}")))
        .await
        .unwrap();
    let fetched: Todo = body_json(resp).await;
    assert_eq!(fetched, updated);

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(bare_request("DELETE", &format!("/todos/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    // get after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(bare_request("GET", &format!("/todos/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // ids are never reused
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/todos", r#"{"title":"Next"}"#))
        .await
        .unwrap();
    let next: Todo = body_json(resp).await;
    assert_eq!(next.id, id + 1);
}
