use async_graphql::dataloader::Loader;
use infra::{
    models::{AuthorRow, GameRow, ReviewRow},
    repos::{authors, games, reviews},
    Db,
};
use std::{collections::HashMap, convert::Infallible, future::Future};

// GameLoader - batch load games by ID
#[derive(Clone)]
pub struct GameLoader {
    db: Db,
}

impl GameLoader {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

impl Loader<String> for GameLoader {
    type Value = GameRow;
    type Error = Infallible;

    fn load(
        &self,
        keys: &[String],
    ) -> impl Future<Output = std::result::Result<HashMap<String, Self::Value>, Self::Error>> + Send
    {
        let db = self.db.clone();
        let ids: Vec<String> = keys.to_vec();

        async move {
            tracing::debug!(keys = ids.len(), "Batch loading games");
            Ok(games::get_many(&db, &ids))
        }
    }
}

// AuthorLoader - batch load authors by ID
#[derive(Clone)]
pub struct AuthorLoader {
    db: Db,
}

impl AuthorLoader {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

impl Loader<String> for AuthorLoader {
    type Value = AuthorRow;
    type Error = Infallible;

    fn load(
        &self,
        keys: &[String],
    ) -> impl Future<Output = std::result::Result<HashMap<String, Self::Value>, Self::Error>> + Send
    {
        let db = self.db.clone();
        let ids: Vec<String> = keys.to_vec();

        async move {
            tracing::debug!(keys = ids.len(), "Batch loading authors");
            Ok(authors::get_many(&db, &ids))
        }
    }
}

// GameReviewsLoader - batch load the reviews of several games, keyed by game ID
#[derive(Clone)]
pub struct GameReviewsLoader {
    db: Db,
}

impl GameReviewsLoader {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

impl Loader<String> for GameReviewsLoader {
    type Value = Vec<ReviewRow>;
    type Error = Infallible;

    fn load(
        &self,
        keys: &[String],
    ) -> impl Future<Output = std::result::Result<HashMap<String, Self::Value>, Self::Error>> + Send
    {
        let db = self.db.clone();
        let game_ids: Vec<String> = keys.to_vec();

        async move {
            tracing::debug!(keys = game_ids.len(), "Batch loading reviews by game");
            Ok(reviews::list_by_games(&db, &game_ids))
        }
    }
}

// AuthorReviewsLoader - batch load the reviews of several authors, keyed by author ID
#[derive(Clone)]
pub struct AuthorReviewsLoader {
    db: Db,
}

impl AuthorReviewsLoader {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

impl Loader<String> for AuthorReviewsLoader {
    type Value = Vec<ReviewRow>;
    type Error = Infallible;

    fn load(
        &self,
        keys: &[String],
    ) -> impl Future<Output = std::result::Result<HashMap<String, Self::Value>, Self::Error>> + Send
    {
        let db = self.db.clone();
        let author_ids: Vec<String> = keys.to_vec();

        async move {
            tracing::debug!(keys = author_ids.len(), "Batch loading reviews by author");
            Ok(reviews::list_by_authors(&db, &author_ids))
        }
    }
}
