pub mod api;
pub mod config;
pub mod core;
pub mod db;

pub use db::DbPool;

use config::Config;
use db::SqliteStore;

pub struct AppState {
    pub config: Config,
    pub db: DbPool,
    pub store: SqliteStore,
}

impl AppState {
    pub fn new(config: Config, db: DbPool) -> Self {
        let store = SqliteStore::new(db.clone());
        Self { config, db, store }
    }
}
