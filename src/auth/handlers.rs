use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use axum_extra::extract::{cookie::CookieJar, WithRejection};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, RegisterRequest},
        password::hash_password_async,
        session::{authenticate, session_cookie},
    },
    error::{AppError, AppResult},
    state::AppState,
    storage::StoreError,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(register))
        .route("/sessions", post(create_session))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<RegisterRequest>, AppError>,
) -> AppResult<StatusCode> {
    let payload = payload.validate().map_err(|e| {
        warn!(error = %e, "invalid registration");
        e
    })?;

    let hash = hash_password_async(payload.password).await?;

    let user = state
        .users
        .create_user(&payload.name, &payload.email, &hash)
        .await
        .map_err(|e| {
            if matches!(e, StoreError::EmailTaken) {
                warn!(email = %payload.email, "email already registered");
            }
            AppError::from(e)
        })?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(StatusCode::CREATED)
}

#[instrument(skip(state, jar, payload))]
pub async fn create_session(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Json(payload), _): WithRejection<Json<LoginRequest>, AppError>,
) -> AppResult<(CookieJar, StatusCode)> {
    let payload = payload.validate()?;

    let token = authenticate(state.users.as_ref(), &payload.email, &payload.password).await?;

    info!(user_id = %token.user_id, "user logged in");
    let jar = jar.add(session_cookie(token, &state.config.session));
    Ok((jar, StatusCode::OK))
}
