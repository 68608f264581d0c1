use async_trait::async_trait;
use thiserror::Error;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::auth::repo_types::User;
use crate::meals::repo_types::{Meal, MealPatch, NewMeal};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email already registered")]
    EmailTaken,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persists user credentials.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, name: &str, email: &str, password_hash: &str) -> StoreResult<User>;
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;
}

/// Persists meals. Every operation except `insert` filters on `(id, owner)`.
#[async_trait]
pub trait MealStore: Send + Sync {
    async fn insert(&self, owner: Uuid, meal: NewMeal) -> StoreResult<Meal>;
    /// Returns `false` when no meal with that id belongs to `owner`.
    async fn update(&self, owner: Uuid, id: Uuid, patch: MealPatch) -> StoreResult<bool>;
    /// Meals in insertion order.
    async fn list_by_user(&self, owner: Uuid) -> StoreResult<Vec<Meal>>;
    async fn get(&self, owner: Uuid, id: Uuid) -> StoreResult<Option<Meal>>;
    /// Returns how many rows were removed (0 or 1).
    async fn delete(&self, owner: Uuid, id: Uuid) -> StoreResult<u64>;
}

/// Process-local store used by tests and `AppState::in_memory`.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    meals: RwLock<Vec<Meal>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, name: &str, email: &str, password_hash: &str) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == email) {
            return Err(StoreError::EmailTaken);
        }
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl MealStore for MemoryStore {
    async fn insert(&self, owner: Uuid, meal: NewMeal) -> StoreResult<Meal> {
        let now = OffsetDateTime::now_utc();
        let meal = Meal {
            id: Uuid::new_v4(),
            user_id: owner,
            name: meal.name,
            description: meal.description,
            diet_status: meal.diet_status,
            created_at: now,
            updated_at: now,
        };
        self.meals.write().await.push(meal.clone());
        Ok(meal)
    }

    async fn update(&self, owner: Uuid, id: Uuid, patch: MealPatch) -> StoreResult<bool> {
        let mut meals = self.meals.write().await;
        let Some(meal) = meals.iter_mut().find(|m| m.id == id && m.user_id == owner) else {
            return Ok(false);
        };
        if let Some(name) = patch.name {
            meal.name = name;
        }
        if let Some(description) = patch.description {
            meal.description = description;
        }
        if let Some(status) = patch.diet_status {
            meal.diet_status = status;
        }
        meal.updated_at = OffsetDateTime::now_utc();
        Ok(true)
    }

    async fn list_by_user(&self, owner: Uuid) -> StoreResult<Vec<Meal>> {
        let meals = self.meals.read().await;
        Ok(meals.iter().filter(|m| m.user_id == owner).cloned().collect())
    }

    async fn get(&self, owner: Uuid, id: Uuid) -> StoreResult<Option<Meal>> {
        let meals = self.meals.read().await;
        Ok(meals
            .iter()
            .find(|m| m.id == id && m.user_id == owner)
            .cloned())
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> StoreResult<u64> {
        let mut meals = self.meals.write().await;
        let before = meals.len();
        meals.retain(|m| !(m.id == id && m.user_id == owner));
        Ok((before - meals.len()) as u64)
    }
}
