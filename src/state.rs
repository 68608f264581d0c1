use crate::auth::repo::PgUserStore;
use crate::config::AppConfig;
use crate::meals::repo::PgMealStore;
use crate::storage::{MealStore, MemoryStore, UserStore};
use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserStore>,
    pub meals: Arc<dyn MealStore>,
}

impl AppState {
    /// Opens the pool and wires the Postgres stores. The caller owns the pool and closes it.
    pub async fn init(config: AppConfig) -> anyhow::Result<(Self, PgPool)> {
        let db = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        let state = Self::from_parts(
            Arc::new(config),
            Arc::new(PgUserStore::new(db.clone())),
            Arc::new(PgMealStore::new(db.clone())),
        );
        Ok((state, db))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        users: Arc<dyn UserStore>,
        meals: Arc<dyn MealStore>,
    ) -> Self {
        Self {
            config,
            users,
            meals,
        }
    }

    /// State backed by a single in-process `MemoryStore`.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::from_parts(
            Arc::new(AppConfig::local()),
            store.clone() as Arc<dyn UserStore>,
            store as Arc<dyn MealStore>,
        )
    }
}
