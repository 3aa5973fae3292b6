// Each domain contains: mod.rs, resolvers.rs, types.rs

pub mod authors;
pub mod games;
pub mod reviews;
