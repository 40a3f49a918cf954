use std::sync::Arc;

use anyhow::Context;

use crate::config::AppConfig;
use crate::db;
use crate::users::{SqliteUserStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Opens (or creates) the database and makes sure the schema exists.
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let db = db::connect(&config).await?;
        let users = Arc::new(SqliteUserStore::new(db)) as Arc<dyn UserStore>;
        users.init_schema().await.context("initialize schema")?;
        Ok(Self::from_parts(users, Arc::new(config)))
    }

    pub fn from_parts(users: Arc<dyn UserStore>, config: Arc<AppConfig>) -> Self {
        Self { users, config }
    }

    #[cfg(test)]
    pub fn test_config() -> AppConfig {
        AppConfig {
            database_url: "sqlite::memory:".into(),
            host: "127.0.0.1".into(),
            port: 0,
            max_connections: 1,
            expose_debug_routes: true,
            request_timeout_secs: 5,
        }
    }

    /// State over a fresh in-memory database.
    #[cfg(test)]
    pub async fn in_memory(config: AppConfig) -> Self {
        let users = Arc::new(SqliteUserStore::new(db::connect_in_memory().await)) as Arc<dyn UserStore>;
        users.init_schema().await.expect("schema");
        Self::from_parts(users, Arc::new(config))
    }
}
