use async_graphql::http::GraphiQLSource;
use async_graphql::{ObjectType, Schema, SubscriptionType};
use axum::{
    extract::{Request, State},
    http::{
        header::{HeaderValue, CONTENT_TYPE},
        Method, StatusCode,
    },
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::error::AppError;
use crate::state::AppState;

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Build the Axum router with health endpoint and GraphQL.
pub fn build_router<Q, M, S>(state: AppState, schema: Schema<Q, M, S>) -> Router
where
    Q: ObjectType + Send + Sync + 'static,
    M: ObjectType + Send + Sync + 'static,
    S: SubscriptionType + Send + Sync + 'static,
{
    let config = state.config().clone();

    let mut graphql_route = post(move |req| graphql_handler(req, schema));
    if config.playground {
        graphql_route = graphql_route.get(graphiql);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    Router::new()
        // Liveness check; also proves the store lock is not wedged.
        .route("/health", get(health))
        .route("/graphql", graphql_route)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE]),
        )
}

/// Reads the JSON envelope by hand so malformed bodies get the same JSON
/// error shape as every other HTTP-level failure.
async fn graphql_handler<Q, M, S>(
    req: Request,
    schema: Schema<Q, M, S>,
) -> Result<Response, AppError>
where
    Q: ObjectType + Send + Sync + 'static,
    M: ObjectType + Send + Sync + 'static,
    S: SubscriptionType + Send + Sync + 'static,
{
    let (_parts, body) = req.into_parts();
    let body_bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {}", e)))?;

    let gql_request: async_graphql::Request = serde_json::from_slice(&body_bytes)
        .map_err(|e| AppError::BadRequest(format!("Invalid GraphQL request: {}", e)))?;

    let gql_response = schema.execute(gql_request).await;
    if !gql_response.errors.is_empty() {
        tracing::debug!(errors = ?gql_response.errors, "GraphQL request finished with errors");
    }

    Ok(Json(gql_response).into_response())
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn health(State(state): State<AppState>) -> &'static str {
    let games = infra::repos::games::count(&state.db);
    tracing::trace!(games, "health probe");
    "ok"
}
