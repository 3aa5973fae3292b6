use async_graphql::{Context, Object, Result, ID};
use infra::repos::{games, UpdateGame};

use crate::state::AppState;

use super::types::{AddGameInput, EditGameInput, Game};

#[derive(Default)]
pub struct GameQuery;

#[Object]
impl GameQuery {
    async fn games(&self, ctx: &Context<'_>) -> Result<Vec<Game>> {
        let state = ctx.data::<AppState>()?;
        let rows = games::list(&state.db);
        Ok(rows.into_iter().map(Game::from).collect())
    }

    async fn game(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Game>> {
        let state = ctx.data::<AppState>()?;
        Ok(games::get_by_id(&state.db, id.as_str()).map(Game::from))
    }
}

#[derive(Default)]
pub struct GameMutation;

#[Object]
impl GameMutation {
    async fn add_game(&self, ctx: &Context<'_>, game: AddGameInput) -> Result<Game> {
        let state = ctx.data::<AppState>()?;
        let row = games::create(&state.db, game.into());

        tracing::info!(game_id = %row.id, title = %row.title, "Game added");
        Ok(row.into())
    }

    /// Removes the game and returns the games left. Deleting an unknown id
    /// changes nothing.
    async fn delete_game(&self, ctx: &Context<'_>, id: ID) -> Result<Vec<Game>> {
        let state = ctx.data::<AppState>()?;
        let remaining = games::delete(&state.db, id.as_str());

        tracing::info!(game_id = %id.as_str(), remaining = remaining.len(), "Game deleted");
        Ok(remaining.into_iter().map(Game::from).collect())
    }

    /// Merges the given fields into the game. Returns null when no game has
    /// this id.
    async fn update_game(
        &self,
        ctx: &Context<'_>,
        id: ID,
        edits: Option<EditGameInput>,
    ) -> Result<Option<Game>> {
        let state = ctx.data::<AppState>()?;
        let edits: UpdateGame = edits.unwrap_or_default().into();

        let updated = games::update(&state.db, id.as_str(), edits);
        match &updated {
            Some(row) => tracing::info!(game_id = %row.id, "Game updated"),
            None => tracing::debug!(game_id = %id.as_str(), "No game to update"),
        }
        Ok(updated.map(Game::from))
    }
}
