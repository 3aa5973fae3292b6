mod common;

use api::app::build_router;
use api::config::ServerConfig;
use api::gql::build_schema;
use api::AppState;
use axum::body::{to_bytes, Body};
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use common::*;
use infra::Db;
use serde_json::{json, Value};
use tower::ServiceExt;

fn router_with(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    build_router(state, schema)
}

fn graphql_post(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .header(CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = router_with(setup_state());

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn test_post_graphql_query() {
    let app = router_with(setup_state());

    let body = json!({ "query": r#"{ game(id: "1") { title } }"# }).to_string();
    let response = app.oneshot(graphql_post(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"data": {"game": {"title": "Zelda, Tears of the Kingdom"}}})
    );
}

#[tokio::test]
async fn test_post_graphql_mutation_with_variables() {
    let state = setup_state();
    let app = router_with(state.clone());

    let body = json!({
        "query": "mutation($id: ID!) { deleteGame(id: $id) { id } }",
        "variables": { "id": "1" },
    })
    .to_string();
    let response = app.oneshot(graphql_post(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["deleteGame"].as_array().unwrap().len(), 4);
    assert!(infra::repos::games::get_by_id(&state.db, "1").is_none());
}

#[tokio::test]
async fn test_malformed_envelope_is_bad_request() {
    let app = router_with(setup_state());

    let response = app.oneshot(graphql_post("{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("bad request: Invalid GraphQL request"));
}

#[tokio::test]
async fn test_graphql_errors_are_reported_in_body() {
    let app = router_with(setup_state());

    let body = json!({ "query": "{ nope }" }).to_string();
    let response = app.oneshot(graphql_post(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(!json["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_graphiql_served_when_enabled() {
    let app = router_with(setup_state());

    let response = app
        .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("graphiql"));
}

#[tokio::test]
async fn test_graphiql_not_served_when_disabled() {
    let config = ServerConfig {
        playground: false,
        ..ServerConfig::default()
    };
    let app = router_with(AppState::new(Db::seeded(), config));

    let response = app
        .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
