use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, ID};
use infra::models::GameRow;
use infra::repos::{CreateGame, UpdateGame};

use crate::gql::domains::reviews::types::Review;
use crate::gql::error::ResultExt;
use crate::gql::loaders::GameReviewsLoader;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Game {
    pub id: ID,
    pub title: String,
    pub platforms: Vec<String>,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        Self {
            id: row.id.into(),
            title: row.title,
            platforms: row.platforms,
        }
    }
}

#[ComplexObject]
impl Game {
    /// Reviews of this game, in the order they were written.
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let loader = ctx.data::<DataLoader<GameReviewsLoader>>()?;
        let rows = loader
            .load_one(self.id.to_string())
            .await
            .gql_err("Failed to load reviews")?
            .unwrap_or_default();

        Ok(rows.into_iter().map(Review::from).collect())
    }
}

#[derive(InputObject)]
pub struct AddGameInput {
    pub title: String,
    pub platforms: Vec<String>,
}

impl From<AddGameInput> for CreateGame {
    fn from(input: AddGameInput) -> Self {
        Self {
            title: input.title,
            platforms: input.platforms,
        }
    }
}

/// Fields left out (or null) keep their current value.
#[derive(InputObject, Default)]
pub struct EditGameInput {
    pub title: Option<String>,
    pub platforms: Option<Vec<String>>,
}

impl From<EditGameInput> for UpdateGame {
    fn from(input: EditGameInput) -> Self {
        Self {
            title: input.title,
            platforms: input.platforms,
        }
    }
}
