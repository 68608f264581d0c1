use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "diet_status", rename_all = "snake_case")]
pub enum DietStatus {
    InDiet,
    OutDiet,
}

impl DietStatus {
    pub fn is_in_diet(self) -> bool {
        matches!(self, DietStatus::InDiet)
    }
}

/// A meal as its owner sees it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Meal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub diet_status: DietStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewMeal {
    pub name: String,
    pub description: String,
    pub diet_status: DietStatus,
}

/// Field-level update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct MealPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub diet_status: Option<DietStatus>,
}
