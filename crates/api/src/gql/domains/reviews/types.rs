use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};
use infra::models::ReviewRow;

use crate::gql::domains::authors::types::Author;
use crate::gql::domains::games::types::Game;
use crate::gql::error::{GqlError, ResultExt};
use crate::gql::loaders::{AuthorLoader, GameLoader};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Review {
    pub id: ID,
    pub rating: i32,
    pub content: String,
    #[graphql(skip)]
    pub author_id: String,
    #[graphql(skip)]
    pub game_id: String,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Self {
            id: row.id.into(),
            rating: row.rating,
            content: row.content,
            author_id: row.author_id,
            game_id: row.game_id,
        }
    }
}

#[ComplexObject]
impl Review {
    async fn author(&self, ctx: &Context<'_>) -> Result<Author> {
        let loader = ctx.data::<DataLoader<AuthorLoader>>()?;

        match loader
            .load_one(self.author_id.clone())
            .await
            .gql_err("Failed to load author")?
        {
            Some(row) => Ok(row.into()),
            None => Err(GqlError::dangling("Author", &self.author_id).into()),
        }
    }

    /// Errors when the game was deleted after this review was written.
    async fn game(&self, ctx: &Context<'_>) -> Result<Game> {
        let loader = ctx.data::<DataLoader<GameLoader>>()?;

        match loader
            .load_one(self.game_id.clone())
            .await
            .gql_err("Failed to load game")?
        {
            Some(row) => Ok(row.into()),
            None => Err(GqlError::dangling("Game", &self.game_id).into()),
        }
    }
}
