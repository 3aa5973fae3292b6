use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};
use infra::models::AuthorRow;

use crate::gql::domains::reviews::types::Review;
use crate::gql::error::ResultExt;
use crate::gql::loaders::AuthorReviewsLoader;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: ID,
    pub name: String,
    pub verified: bool,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            verified: row.verified,
        }
    }
}

#[ComplexObject]
impl Author {
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let loader = ctx.data::<DataLoader<AuthorReviewsLoader>>()?;
        let rows = loader
            .load_one(self.id.to_string())
            .await
            .gql_err("Failed to load reviews")?
            .unwrap_or_default();

        Ok(rows.into_iter().map(Review::from).collect())
    }
}
