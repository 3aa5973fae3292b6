use async_graphql::{Context, Object, Result, ID};
use infra::repos::reviews;

use crate::state::AppState;

use super::types::Review;

#[derive(Default)]
pub struct ReviewQuery;

#[Object]
impl ReviewQuery {
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let state = ctx.data::<AppState>()?;
        let rows = reviews::list(&state.db);
        Ok(rows.into_iter().map(Review::from).collect())
    }

    async fn review(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Review>> {
        let state = ctx.data::<AppState>()?;
        Ok(reviews::get_by_id(&state.db, id.as_str()).map(Review::from))
    }
}
