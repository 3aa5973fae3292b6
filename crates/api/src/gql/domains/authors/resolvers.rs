use async_graphql::{Context, Object, Result, ID};
use infra::repos::authors;

use crate::state::AppState;

use super::types::Author;

#[derive(Default)]
pub struct AuthorQuery;

#[Object]
impl AuthorQuery {
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let state = ctx.data::<AppState>()?;
        let rows = authors::list(&state.db);
        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn author(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Author>> {
        let state = ctx.data::<AppState>()?;
        Ok(authors::get_by_id(&state.db, id.as_str()).map(Author::from))
    }
}
