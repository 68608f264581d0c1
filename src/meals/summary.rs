use serde::Serialize;

use super::repo_types::{DietStatus, Meal};

/// Aggregate statistics over one user's meals. Computed per request, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DietSummary {
    #[serde(rename = "mealsInDiet")]
    pub count_in_diet: u64,
    #[serde(rename = "mealsOutDiet")]
    pub count_out_diet: u64,
    #[serde(rename = "totalMeals")]
    pub total_count: u64,
    #[serde(rename = "maxPositiveSequence")]
    pub longest_in_diet_run: u64,
}

impl DietSummary {
    /// Single pass in the order given. The run is positional: callers decide the
    /// order, and the store hands meals back in insertion order, not by timestamp.
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = DietStatus>,
    {
        let mut summary = Self::default();
        let mut current_run = 0;

        for status in statuses {
            summary.total_count += 1;
            if status.is_in_diet() {
                summary.count_in_diet += 1;
                current_run += 1;
                summary.longest_in_diet_run = summary.longest_in_diet_run.max(current_run);
            } else {
                summary.count_out_diet += 1;
                current_run = 0;
            }
        }

        summary
    }
}

pub fn summarize(meals: &[Meal]) -> DietSummary {
    DietSummary::from_statuses(meals.iter().map(|m| m.diet_status))
}
