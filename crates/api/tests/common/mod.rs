use api::config::ServerConfig;
use api::gql::AppSchema;
use api::AppState;
use async_graphql::{Request, Variables};
use infra::Db;

/// Fresh state over the seed data. Every test gets its own store, so
/// mutations never leak between tests.
pub fn setup_state() -> AppState {
    AppState::new(Db::seeded(), ServerConfig::default())
}

/// Helper function to execute GraphQL queries and mutations
#[allow(dead_code)]
pub async fn execute_graphql(
    schema: &AppSchema,
    query: &str,
    variables: Option<Variables>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    schema.execute(request).await
}

/// Executes and asserts the response carries no errors, returning the data as JSON.
#[allow(dead_code)]
pub async fn execute_ok(
    schema: &AppSchema,
    query: &str,
    variables: Option<Variables>,
) -> serde_json::Value {
    let response = execute_graphql(schema, query, variables).await;
    assert!(
        response.errors.is_empty(),
        "query should succeed: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

/// Pulls the `id` field out of every object in a JSON array.
#[allow(dead_code)]
pub fn ids(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}
