use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::meals::repo_types::{DietStatus, Meal, MealPatch, NewMeal};
use crate::meals::summary::DietSummary;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealRequest {
    pub name: String,
    pub description: String,
    pub diet_status: DietStatus,
}

impl CreateMealRequest {
    pub fn validate(self) -> Result<NewMeal, AppError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Name is required".into()));
        }
        Ok(NewMeal {
            name,
            description: self.description,
            diet_status: self.diet_status,
        })
    }
}

/// Any subset of the meal fields; omitted ones keep their value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMealRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub diet_status: Option<DietStatus>,
}

impl UpdateMealRequest {
    pub fn validate(self) -> Result<MealPatch, AppError> {
        let name = match self.name {
            Some(n) if n.trim().is_empty() => {
                return Err(AppError::Validation("Name must not be blank".into()))
            }
            Some(n) => Some(n.trim().to_string()),
            None => None,
        };
        Ok(MealPatch {
            name,
            description: self.description,
            diet_status: self.diet_status,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct MealListResponse {
    pub meals: Vec<Meal>,
}

#[derive(Debug, Serialize)]
pub struct MealResponse {
    pub meal: Option<Meal>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: DietSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_uses_camel_case_status() {
        let req: CreateMealRequest = serde_json::from_str(
            r#"{"name":"Salad","description":"Green","dietStatus":"in_diet"}"#,
        )
        .unwrap();
        let meal = req.validate().unwrap();
        assert_eq!(meal.diet_status, DietStatus::InDiet);
        assert_eq!(meal.name, "Salad");
    }

    #[test]
    fn unknown_status_does_not_deserialize() {
        let res = serde_json::from_str::<CreateMealRequest>(
            r#"{"name":"Salad","description":"Green","dietStatus":"sometimes"}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn create_request_requires_name() {
        let req = CreateMealRequest {
            name: "   ".into(),
            description: String::new(),
            diet_status: DietStatus::OutDiet,
        };
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn update_request_accepts_partial_body() {
        let req: UpdateMealRequest = serde_json::from_str(r#"{"dietStatus":"out_diet"}"#).unwrap();
        let patch = req.validate().unwrap();
        assert!(patch.name.is_none());
        assert!(patch.description.is_none());
        assert_eq!(patch.diet_status, Some(DietStatus::OutDiet));
    }

    #[test]
    fn update_request_rejects_blank_name() {
        let req = UpdateMealRequest {
            name: Some(" ".into()),
            ..Default::default()
        };
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }
}
