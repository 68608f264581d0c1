#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use daily_diet::app::build_app;
use daily_diet::state::AppState;

/// Full router over a fresh in-memory store.
pub fn build_test_app() -> Router {
    build_app(AppState::in_memory())
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Registers a user and logs in, returning the `name=value` cookie pair.
pub async fn register_and_login(app: &Router, name: &str, email: &str, password: &str) -> String {
    let res = send(
        app,
        Method::POST,
        "/users",
        None,
        Some(json!({ "name": name, "email": email, "password": password })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = send(
        app,
        Method::POST,
        "/sessions",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    cookie_pair(&res)
}

pub fn cookie_pair(response: &Response<Body>) -> String {
    let header = response
        .headers()
        .get(SET_COOKIE)
        .expect("set-cookie header")
        .to_str()
        .unwrap();
    header.split(';').next().unwrap().trim().to_string()
}

pub async fn create_meal(app: &Router, cookie: &str, name: &str, status: &str) {
    let res = send(
        app,
        Method::POST,
        "/meals",
        Some(cookie),
        Some(json!({ "name": name, "description": format!("{name} description"), "dietStatus": status })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
}
