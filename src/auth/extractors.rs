use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use tracing::warn;
use uuid::Uuid;

use super::session::authorize;
use crate::error::AppError;

/// Reads the session cookie, returning the caller's user ID.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        match authorize(&jar) {
            Ok(user_id) => Ok(AuthUser(user_id)),
            Err(e) => {
                warn!(uri = %parts.uri, "missing or malformed session cookie");
                Err(e)
            }
        }
    }
}
