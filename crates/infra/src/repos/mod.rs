pub mod authors;
pub mod games;
pub mod reviews;

pub use games::{CreateGame, UpdateGame};
