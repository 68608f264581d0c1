use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::meals::repo_types::{Meal, MealPatch, NewMeal};
use crate::storage::{MealStore, StoreResult};

#[derive(Clone)]
pub struct PgMealStore {
    db: PgPool,
}

impl PgMealStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MealStore for PgMealStore {
    async fn insert(&self, owner: Uuid, meal: NewMeal) -> StoreResult<Meal> {
        let row = sqlx::query_as::<_, Meal>(
            r#"
            INSERT INTO meals (id, user_id, name, description, diet_status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, name, description, diet_status, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(owner)
        .bind(meal.name)
        .bind(meal.description)
        .bind(meal.diet_status)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    // Single statement so concurrent patches to different columns do not clobber each other.
    async fn update(&self, owner: Uuid, id: Uuid, patch: MealPatch) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE meals
               SET name        = COALESCE($3, name),
                   description = COALESCE($4, description),
                   diet_status = COALESCE($5, diet_status),
                   updated_at  = now()
             WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(owner)
        .bind(patch.name)
        .bind(patch.description)
        .bind(patch.diet_status)
        .execute(&self.db)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_by_user(&self, owner: Uuid) -> StoreResult<Vec<Meal>> {
        let rows = sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, user_id, name, description, diet_status, created_at, updated_at
              FROM meals
             WHERE user_id = $1
             ORDER BY seq ASC
            "#,
        )
        .bind(owner)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn get(&self, owner: Uuid, id: Uuid) -> StoreResult<Option<Meal>> {
        let row = sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, user_id, name, description, diet_status, created_at, updated_at
              FROM meals
             WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM meals WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected())
    }
}
