use std::collections::HashMap;

use crate::db::Db;
use crate::models::GameRow;

#[derive(Debug, Clone)]
pub struct CreateGame {
    pub title: String,
    pub platforms: Vec<String>,
}

/// Partial edit of a game. `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateGame {
    pub title: Option<String>,
    pub platforms: Option<Vec<String>>,
}

impl UpdateGame {
    fn apply(&self, game: &mut GameRow) {
        if let Some(title) = &self.title {
            game.title = title.clone();
        }
        if let Some(platforms) = &self.platforms {
            game.platforms = platforms.clone();
        }
    }
}

pub fn list(db: &Db) -> Vec<GameRow> {
    db.read().games.clone()
}

pub fn count(db: &Db) -> usize {
    db.read().games.len()
}

pub fn get_by_id(db: &Db, id: &str) -> Option<GameRow> {
    db.read().game(id).cloned()
}

/// Batch lookup used by the data loaders. Unknown ids are simply absent
/// from the returned map.
pub fn get_many(db: &Db, ids: &[String]) -> HashMap<String, GameRow> {
    let store = db.read();
    ids.iter()
        .filter_map(|id| store.game(id).map(|g| (id.clone(), g.clone())))
        .collect()
}

pub fn create(db: &Db, data: CreateGame) -> GameRow {
    let mut store = db.write();
    let game = GameRow {
        id: store.allocate_game_id(),
        title: data.title,
        platforms: data.platforms,
    };
    store.games.push(game.clone());
    store.reindex_games();
    game
}

/// Merges `data` into every game carrying `id` and returns the first of
/// them, or `None` when no game matched.
pub fn update(db: &Db, id: &str, data: UpdateGame) -> Option<GameRow> {
    let mut store = db.write();
    store.game_position(id)?;

    for game in store.games.iter_mut().filter(|g| g.id == id) {
        data.apply(game);
    }
    store.game(id).cloned()
}

/// Removes every game carrying `id` and returns the games left. Reviews
/// pointing at a removed game are kept as they are.
pub fn delete(db: &Db, id: &str) -> Vec<GameRow> {
    let mut store = db.write();
    let before = store.games.len();
    store.games.retain(|g| g.id != id);
    if store.games.len() != before {
        store.reindex_games();
    }
    store.games.clone()
}
