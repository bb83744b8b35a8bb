//! HTTP-level tests for the employee API
//!
//! Each test builds the full router (middleware included) over a fresh
//! in-memory store and drives it with `oneshot`.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use employee_server::{Config, ServerState, build_router};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app() -> Router {
    let state = ServerState::initialize(&Config::in_memory())
        .await
        .expect("in-memory state");
    build_router(state).expect("router")
}

struct Reply {
    status: StatusCode,
    content_type: Option<String>,
    body: Vec<u8>,
}

impl Reply {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("json body")
    }

    fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Reply {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    Reply {
        status,
        content_type,
        body,
    }
}

fn ann() -> Value {
    json!({"name": "Ann", "position": "Eng", "office": "HQ", "salary": 50000})
}

#[tokio::test]
async fn test_full_lifecycle() {
    let app = app().await;

    let created = call(&app, Method::POST, "/employees", Some(ann())).await;
    assert_eq!(created.status, StatusCode::OK);
    let created = created.json();
    let id = created["_id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["name"], "Ann");
    assert_eq!(created["salary"], json!(50000));

    let fetched = call(&app, Method::GET, &format!("/employees/{id}"), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json(), created);

    let replaced = call(
        &app,
        Method::PUT,
        &format!("/employees/{id}"),
        Some(json!({"name": "Ann", "position": "Lead", "office": "HQ", "salary": 60000})),
    )
    .await;
    assert_eq!(replaced.status, StatusCode::OK);
    let replaced = replaced.json();
    assert_eq!(replaced["_id"], id.as_str());
    assert_eq!(replaced["position"], "Lead");
    assert_eq!(replaced["salary"], json!(60000));

    let deleted = call(&app, Method::DELETE, &format!("/employees/{id}"), None).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.json(), replaced);

    let gone = call(&app, Method::GET, &format!("/employees/{id}"), None).await;
    assert_eq!(gone.status, StatusCode::OK);
    assert!(gone.body.is_empty());
}

#[tokio::test]
async fn test_malformed_id_is_plain_text_400() {
    let app = app().await;

    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let body = (method == Method::PUT).then(ann);
        let reply = call(&app, method.clone(), "/employees/not-an-id", body).await;
        assert_eq!(reply.status, StatusCode::BAD_REQUEST, "{method}");
        assert_eq!(reply.text(), "No record with given id : not-an-id");
        assert!(
            reply
                .content_type
                .as_deref()
                .is_some_and(|ct| ct.starts_with("text/plain"))
        );
    }

    // Nothing was created by the rejected PUT
    let list = call(&app, Method::GET, "/employees", None).await;
    assert_eq!(list.json(), json!([]));
}

#[tokio::test]
async fn test_replace_nulls_omitted_fields() {
    let app = app().await;
    let created = call(&app, Method::POST, "/employees", Some(ann())).await.json();
    let id = created["_id"].as_str().unwrap();

    let replaced = call(
        &app,
        Method::PUT,
        &format!("/employees/{id}"),
        Some(json!({"name": "Ann B"})),
    )
    .await
    .json();

    assert_eq!(replaced["name"], "Ann B");
    assert!(replaced["position"].is_null());
    assert!(replaced["office"].is_null());
    assert!(replaced["salary"].is_null());
}

#[tokio::test]
async fn test_unknown_well_formed_id_is_empty_success() {
    let app = app().await;
    let uri = "/employees/aaaaaaaaaaaaaaaaaaaa";

    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let body = (method == Method::PUT).then(ann);
        let reply = call(&app, method.clone(), uri, body).await;
        assert_eq!(reply.status, StatusCode::OK, "{method}");
        assert!(reply.body.is_empty(), "{method}");
    }

    // PUT on a missing record does not create it
    let list = call(&app, Method::GET, "/employees", None).await;
    assert_eq!(list.json(), json!([]));
}

#[tokio::test]
async fn test_list_reflects_creates_and_deletes() {
    let app = app().await;

    let mut ids = Vec::new();
    for i in 0..4 {
        let body = json!({"name": format!("E{i}"), "position": "Eng", "office": "HQ"});
        let created = call(&app, Method::POST, "/employees", Some(body)).await.json();
        ids.push(created["_id"].as_str().unwrap().to_string());
    }
    for id in &ids[..1] {
        call(&app, Method::DELETE, &format!("/employees/{id}"), None).await;
    }

    let list = call(&app, Method::GET, "/employees", None).await;
    assert_eq!(list.status, StatusCode::OK);
    let list = list.json();
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert!(list.iter().all(|e| e["_id"] != ids[0].as_str()));
}

#[tokio::test]
async fn test_submitted_fields_come_back_unchanged() {
    let app = app().await;

    for body in [
        ann(),
        json!({"name": "Bob", "position": "Ops", "office": "Remote", "salary": 1234.5}),
    ] {
        let created = call(&app, Method::POST, "/employees", Some(body.clone())).await.json();
        for field in ["name", "position", "office", "salary"] {
            assert_eq!(created[field], body[field], "{field}");
        }
    }
}

#[tokio::test]
async fn test_create_with_missing_salary_stores_null() {
    let app = app().await;
    let created = call(
        &app,
        Method::POST,
        "/employees",
        Some(json!({"name": "Bob", "position": "Ops", "office": "Remote"})),
    )
    .await
    .json();
    assert!(created["salary"].is_null());
}

#[tokio::test]
async fn test_api_docs_describes_employee_paths() {
    let app = app().await;
    let reply = call(&app, Method::GET, "/api-docs", None).await;
    assert_eq!(reply.status, StatusCode::OK);

    let doc = reply.json();
    assert_eq!(doc["info"]["title"], "Employee Manager");
    assert_eq!(
        doc["info"]["description"],
        "An app to manage employees in a company"
    );
    assert!(doc["paths"]["/employees"].is_object());
    assert!(doc["paths"]["/employees/{id}"].is_object());
}

#[tokio::test]
async fn test_health_reports_database() {
    let app = app().await;
    let reply = call(&app, Method::GET, "/health", None).await;
    assert_eq!(reply.status, StatusCode::OK);
    let body = reply.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"]["status"], "ok");
}

#[tokio::test]
async fn test_cors_preflight_allows_configured_origin() {
    let app = app().await;
    let origin = Config::in_memory().cors_origin;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/employees")
        .header(header::ORIGIN, &origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        origin.as_str()
    );
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/employees")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_undecodable_body_is_rejected_without_touching_store() {
    let app = app().await;

    // Body without a JSON content type
    let request = Request::builder()
        .method(Method::POST)
        .uri("/employees")
        .body(Body::from(ann().to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    // Salary that is not a JSON number
    let reply = call(
        &app,
        Method::POST,
        "/employees",
        Some(json!({"name": "Ann", "salary": "lots"})),
    )
    .await;
    assert_eq!(reply.status, StatusCode::UNPROCESSABLE_ENTITY);

    let list = call(&app, Method::GET, "/employees", None).await;
    assert_eq!(list.json(), json!([]));
}
