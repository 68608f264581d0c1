use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use tracing::instrument;
use uuid::Uuid;

use crate::{auth::extractors::AuthUser, error::AppError, error::AppResult, state::AppState};

use super::dto::{CreateMealRequest, MealListResponse, MealResponse, SummaryResponse, UpdateMealRequest};
use super::services;

type MealId = WithRejection<Path<Uuid>, AppError>;

// `/meals/summary` is a static segment and wins over `/meals/:id`.
pub fn meal_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals).post(create_meal))
        .route("/meals/summary", get(get_summary))
        .route(
            "/meals/:id",
            get(get_meal).put(update_meal).delete(delete_meal),
        )
}

#[instrument(skip(state, body))]
pub async fn create_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    WithRejection(Json(body), _): WithRejection<Json<CreateMealRequest>, AppError>,
) -> AppResult<StatusCode> {
    let meal = body.validate()?;
    services::create_meal(state.meals.as_ref(), user_id, meal).await?;
    Ok(StatusCode::CREATED)
}

#[instrument(skip(state, body))]
pub async fn update_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    WithRejection(Path(id), _): MealId,
    WithRejection(Json(body), _): WithRejection<Json<UpdateMealRequest>, AppError>,
) -> AppResult<StatusCode> {
    let patch = body.validate()?;
    services::update_meal(state.meals.as_ref(), user_id, id, patch).await?;
    Ok(StatusCode::OK)
}

#[instrument(skip(state))]
pub async fn list_meals(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<MealListResponse>> {
    let meals = services::list_meals(state.meals.as_ref(), user_id).await?;
    Ok(Json(MealListResponse { meals }))
}

#[instrument(skip(state))]
pub async fn get_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    WithRejection(Path(id), _): MealId,
) -> AppResult<Json<MealResponse>> {
    let meal = services::get_meal(state.meals.as_ref(), user_id, id).await?;
    Ok(Json(MealResponse { meal }))
}

#[instrument(skip(state))]
pub async fn delete_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    WithRejection(Path(id), _): MealId,
) -> AppResult<StatusCode> {
    services::delete_meal(state.meals.as_ref(), user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
pub async fn get_summary(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<SummaryResponse>> {
    let summary = services::meal_summary(state.meals.as_ref(), user_id).await?;
    Ok(Json(SummaryResponse { summary }))
}
