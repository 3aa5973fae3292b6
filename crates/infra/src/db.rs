use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{AuthorRow, GameRow, ReviewRow};
use crate::seed;

/// Shared handle to the in-memory store.
///
/// Cloning is cheap; every clone points at the same collections. Readers share
/// the lock, each mutation takes the write lock for its whole
/// read-modify-write step so concurrent requests never lose updates.
#[derive(Clone)]
pub struct Db {
    inner: Arc<RwLock<Store>>,
}

impl Db {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// A store holding the fixed start-up data set.
    pub fn seeded() -> Self {
        Self::new(Store::new(seed::games(), seed::authors(), seed::reviews()))
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.inner.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.inner.write()
    }
}

impl Default for Db {
    fn default() -> Self {
        Self::seeded()
    }
}

/// The three collections plus the lookup indexes derived from them.
///
/// Collections keep insertion order. Indexes map an identifier to the
/// position of the first record carrying it, and a foreign key to the
/// positions of its dependent reviews in ascending order.
pub struct Store {
    pub(crate) games: Vec<GameRow>,
    pub(crate) authors: Vec<AuthorRow>,
    pub(crate) reviews: Vec<ReviewRow>,
    game_index: HashMap<String, usize>,
    author_index: HashMap<String, usize>,
    review_index: HashMap<String, usize>,
    reviews_by_game: HashMap<String, Vec<usize>>,
    reviews_by_author: HashMap<String, Vec<usize>>,
    next_game_id: u64,
}

impl Store {
    pub fn new(games: Vec<GameRow>, authors: Vec<AuthorRow>, reviews: Vec<ReviewRow>) -> Self {
        let author_index = position_index(authors.iter().map(|a| a.id.as_str()));
        let review_index = position_index(reviews.iter().map(|r| r.id.as_str()));
        let reviews_by_game = group_index(reviews.iter().map(|r| r.game_id.as_str()));
        let reviews_by_author = group_index(reviews.iter().map(|r| r.author_id.as_str()));

        // New ids continue after the largest numeric id already present.
        let next_game_id = games
            .iter()
            .filter_map(|g| g.id.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);

        let mut store = Self {
            games,
            authors,
            reviews,
            game_index: HashMap::new(),
            author_index,
            review_index,
            reviews_by_game,
            reviews_by_author,
            next_game_id,
        };
        store.reindex_games();
        store
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }

    pub(crate) fn game(&self, id: &str) -> Option<&GameRow> {
        self.game_index.get(id).map(|&pos| &self.games[pos])
    }

    pub(crate) fn game_position(&self, id: &str) -> Option<usize> {
        self.game_index.get(id).copied()
    }

    pub(crate) fn author(&self, id: &str) -> Option<&AuthorRow> {
        self.author_index.get(id).map(|&pos| &self.authors[pos])
    }

    pub(crate) fn review(&self, id: &str) -> Option<&ReviewRow> {
        self.review_index.get(id).map(|&pos| &self.reviews[pos])
    }

    pub(crate) fn reviews_for_game(
        &self,
        game_id: &str,
    ) -> impl Iterator<Item = &ReviewRow> + '_ {
        self.reviews_by_game
            .get(game_id)
            .into_iter()
            .flatten()
            .map(|&pos| &self.reviews[pos])
    }

    pub(crate) fn reviews_for_author(
        &self,
        author_id: &str,
    ) -> impl Iterator<Item = &ReviewRow> + '_ {
        self.reviews_by_author
            .get(author_id)
            .into_iter()
            .flatten()
            .map(|&pos| &self.reviews[pos])
    }

    /// Hands out the next game identifier. Identifiers are never reused, not
    /// even after the game holding one was deleted.
    pub(crate) fn allocate_game_id(&mut self) -> String {
        loop {
            let candidate = self.next_game_id.to_string();
            self.next_game_id += 1;
            if !self.game_index.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    /// Rebuilds the game id index. Must run after every change to `games`
    /// that shifts positions or touches identifiers.
    pub(crate) fn reindex_games(&mut self) {
        self.game_index = position_index(self.games.iter().map(|g| g.id.as_str()));
    }
}

fn position_index<'a>(ids: impl Iterator<Item = &'a str>) -> HashMap<String, usize> {
    let mut index = HashMap::new();
    for (pos, id) in ids.enumerate() {
        index.entry(id.to_string()).or_insert(pos);
    }
    index
}

fn group_index<'a>(keys: impl Iterator<Item = &'a str>) -> HashMap<String, Vec<usize>> {
    let mut index: HashMap<String, Vec<usize>> = HashMap::new();
    for (pos, key) in keys.enumerate() {
        index.entry(key.to_string()).or_default().push(pos);
    }
    index
}
