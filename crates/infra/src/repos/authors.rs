use std::collections::HashMap;

use crate::db::Db;
use crate::models::AuthorRow;

pub fn list(db: &Db) -> Vec<AuthorRow> {
    db.read().authors.clone()
}

pub fn get_by_id(db: &Db, id: &str) -> Option<AuthorRow> {
    db.read().author(id).cloned()
}

pub fn get_many(db: &Db, ids: &[String]) -> HashMap<String, AuthorRow> {
    let store = db.read();
    ids.iter()
        .filter_map(|id| store.author(id).map(|a| (id.clone(), a.clone())))
        .collect()
}
