//! Records every process starts with. State is never persisted, so a restart
//! always comes back to exactly this data set.

use crate::models::{AuthorRow, GameRow, ReviewRow};

pub fn games() -> Vec<GameRow> {
    [
        ("1", "Zelda, Tears of the Kingdom", &["Switch"][..]),
        ("2", "Final Fantasy 7 Remake", &["PS5", "Xbox"][..]),
        ("3", "Elden Ring", &["PS5", "Xbox", "PC"][..]),
        ("4", "Mario Kart", &["Switch"][..]),
        ("5", "Pokemon Scarlet", &["PS5", "Xbox", "PC"][..]),
    ]
    .into_iter()
    .map(|(id, title, platforms)| GameRow {
        id: id.to_string(),
        title: title.to_string(),
        platforms: platforms.iter().map(|p| p.to_string()).collect(),
    })
    .collect()
}

pub fn authors() -> Vec<AuthorRow> {
    [("1", "mario", true), ("2", "yoshi", false), ("3", "peach", true)]
        .into_iter()
        .map(|(id, name, verified)| AuthorRow {
            id: id.to_string(),
            name: name.to_string(),
            verified,
        })
        .collect()
}

pub fn reviews() -> Vec<ReviewRow> {
    // (id, rating, author_id, game_id)
    [
        ("1", 9, "1", "2"),
        ("2", 10, "2", "1"),
        ("3", 7, "3", "3"),
        ("4", 5, "2", "4"),
        ("5", 8, "2", "5"),
        ("6", 7, "1", "2"),
        ("7", 10, "3", "1"),
    ]
    .into_iter()
    .map(|(id, rating, author_id, game_id)| ReviewRow {
        id: id.to_string(),
        rating,
        content: "lorem ipsum".to_string(),
        author_id: author_id.to_string(),
        game_id: game_id.to_string(),
    })
    .collect()
}
