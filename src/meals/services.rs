use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::meals::repo_types::{Meal, MealPatch, NewMeal};
use crate::meals::summary::{summarize, DietSummary};
use crate::storage::MealStore;

pub async fn create_meal(meals: &dyn MealStore, owner: Uuid, meal: NewMeal) -> AppResult<Meal> {
    let meal = meals.insert(owner, meal).await?;
    info!(user_id = %owner, meal_id = %meal.id, "meal created");
    Ok(meal)
}

pub async fn update_meal(
    meals: &dyn MealStore,
    owner: Uuid,
    id: Uuid,
    patch: MealPatch,
) -> AppResult<()> {
    if !meals.update(owner, id, patch).await? {
        warn!(user_id = %owner, meal_id = %id, "update of unknown meal");
        return Err(AppError::NotFound);
    }
    info!(user_id = %owner, meal_id = %id, "meal updated");
    Ok(())
}

pub async fn list_meals(meals: &dyn MealStore, owner: Uuid) -> AppResult<Vec<Meal>> {
    Ok(meals.list_by_user(owner).await?)
}

/// `None` when the meal does not exist or belongs to someone else.
pub async fn get_meal(meals: &dyn MealStore, owner: Uuid, id: Uuid) -> AppResult<Option<Meal>> {
    Ok(meals.get(owner, id).await?)
}

/// Succeeds whether or not a meal was removed.
pub async fn delete_meal(meals: &dyn MealStore, owner: Uuid, id: Uuid) -> AppResult<()> {
    let removed = meals.delete(owner, id).await?;
    info!(user_id = %owner, meal_id = %id, removed, "meal delete");
    Ok(())
}

pub async fn meal_summary(meals: &dyn MealStore, owner: Uuid) -> AppResult<DietSummary> {
    let list = meals.list_by_user(owner).await?;
    Ok(summarize(&list))
}
