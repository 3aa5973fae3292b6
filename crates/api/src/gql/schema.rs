use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptySubscription, Schema};

use super::loaders::{AuthorLoader, AuthorReviewsLoader, GameLoader, GameReviewsLoader};
use super::{MutationRoot, QueryRoot};
use crate::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState) -> AppSchema {
    // Loaders batch relationship lookups of one execution level. They do not
    // cache, so a schema-wide instance never serves rows from before a mutation.
    let game_loader = DataLoader::new(GameLoader::new(state.db.clone()), tokio::spawn);
    let author_loader = DataLoader::new(AuthorLoader::new(state.db.clone()), tokio::spawn);
    let game_reviews_loader =
        DataLoader::new(GameReviewsLoader::new(state.db.clone()), tokio::spawn);
    let author_reviews_loader =
        DataLoader::new(AuthorReviewsLoader::new(state.db.clone()), tokio::spawn);

    let introspection_enabled = state.config().introspection;

    let mut builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state) // available in resolvers via ctx.data::<AppState>()
    .data(game_loader)
    .data(author_loader)
    .data(game_reviews_loader)
    .data(author_reviews_loader)
    .limit_depth(15)
    .limit_complexity(500);

    if !introspection_enabled {
        builder = builder.disable_introspection();
    }

    builder.finish()
}

/// SDL of the served schema. Needs no state, so it can be printed without
/// starting the server.
pub fn schema_sdl() -> String {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .finish()
    .sdl()
}
