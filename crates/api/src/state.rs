use infra::Db;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    config: ServerConfig,
}

impl AppState {
    pub fn new(db: Db, config: ServerConfig) -> Self {
        Self { db, config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
