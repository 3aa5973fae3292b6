use std::collections::HashMap;

use crate::db::Db;
use crate::models::ReviewRow;

pub fn list(db: &Db) -> Vec<ReviewRow> {
    db.read().reviews.clone()
}

pub fn get_by_id(db: &Db, id: &str) -> Option<ReviewRow> {
    db.read().review(id).cloned()
}

/// Reviews of one game, in the order they were recorded.
pub fn list_by_game(db: &Db, game_id: &str) -> Vec<ReviewRow> {
    db.read().reviews_for_game(game_id).cloned().collect()
}

/// Reviews written by one author, in the order they were recorded.
pub fn list_by_author(db: &Db, author_id: &str) -> Vec<ReviewRow> {
    db.read().reviews_for_author(author_id).cloned().collect()
}

/// Batch form of [`list_by_game`]. Every requested id gets an entry, empty
/// when the game has no reviews.
pub fn list_by_games(db: &Db, game_ids: &[String]) -> HashMap<String, Vec<ReviewRow>> {
    let store = db.read();
    game_ids
        .iter()
        .map(|id| (id.clone(), store.reviews_for_game(id).cloned().collect()))
        .collect()
}

/// Batch form of [`list_by_author`].
pub fn list_by_authors(db: &Db, author_ids: &[String]) -> HashMap<String, Vec<ReviewRow>> {
    let store = db.read();
    author_ids
        .iter()
        .map(|id| (id.clone(), store.reviews_for_author(id).cloned().collect()))
        .collect()
}
