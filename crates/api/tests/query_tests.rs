mod common;

use api::gql::build_schema;
use async_graphql::Variables;
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_games_returns_seed_data_in_order() {
    let schema = build_schema(setup_state());

    let data = execute_ok(&schema, "{ games { id title platforms } }", None).await;

    assert_eq!(ids(&data["games"]), ["1", "2", "3", "4", "5"]);
    assert_eq!(
        data["games"][2],
        json!({"id": "3", "title": "Elden Ring", "platforms": ["PS5", "Xbox", "PC"]})
    );
}

#[tokio::test]
async fn test_game_by_id_for_every_existing_game() {
    let schema = build_schema(setup_state());
    let query = "query Game($id: ID!) { game(id: $id) { id } }";

    for id in ["1", "2", "3", "4", "5"] {
        let vars = Variables::from_json(json!({ "id": id }));
        let data = execute_ok(&schema, query, Some(vars)).await;
        assert_eq!(data["game"]["id"], id);
    }
}

#[tokio::test]
async fn test_unknown_ids_resolve_to_null() {
    let schema = build_schema(setup_state());

    let data = execute_ok(
        &schema,
        r#"{ game(id: "404") { id } author(id: "404") { id } review(id: "404") { id } }"#,
        None,
    )
    .await;

    assert_eq!(
        data,
        json!({"game": null, "author": null, "review": null})
    );
}

#[tokio::test]
async fn test_authors_query() {
    let schema = build_schema(setup_state());

    let data = execute_ok(&schema, "{ authors { id name verified } }", None).await;

    assert_eq!(
        data["authors"],
        json!([
            {"id": "1", "name": "mario", "verified": true},
            {"id": "2", "name": "yoshi", "verified": false},
            {"id": "3", "name": "peach", "verified": true},
        ])
    );
}

#[tokio::test]
async fn test_author_by_id() {
    let schema = build_schema(setup_state());

    let data = execute_ok(&schema, r#"{ author(id: "3") { name verified } }"#, None).await;

    assert_eq!(data["author"], json!({"name": "peach", "verified": true}));
}

#[tokio::test]
async fn test_reviews_query() {
    let schema = build_schema(setup_state());

    let data = execute_ok(&schema, "{ reviews { id rating content } }", None).await;

    assert_eq!(ids(&data["reviews"]), ["1", "2", "3", "4", "5", "6", "7"]);
    assert_eq!(
        data["reviews"][0],
        json!({"id": "1", "rating": 9, "content": "lorem ipsum"})
    );
}

#[tokio::test]
async fn test_review_by_id() {
    let schema = build_schema(setup_state());

    let data = execute_ok(&schema, r#"{ review(id: "4") { id rating } }"#, None).await;

    assert_eq!(data["review"], json!({"id": "4", "rating": 5}));
}

#[tokio::test]
async fn test_missing_required_argument_is_a_validation_error() {
    let schema = build_schema(setup_state());

    let response = execute_graphql(&schema, "{ game { id } }", None).await;

    assert!(!response.errors.is_empty());
}

#[tokio::test]
async fn test_foreign_keys_are_not_exposed() {
    let schema = build_schema(setup_state());

    let response = execute_graphql(&schema, "{ reviews { game_id } }", None).await;
    assert!(!response.errors.is_empty());

    let response = execute_graphql(&schema, "{ reviews { gameId } }", None).await;
    assert!(!response.errors.is_empty());
}
