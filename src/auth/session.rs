//! Cookie sessions.
//!
//! The session token is the user's id, carried in the `userId` cookie. Nothing is
//! stored server-side: a request is authorized when it presents a cookie whose value
//! parses as a UUID. Expiry is enforced by the browser through `Max-Age`.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::auth::password::{verify_password_async, DUMMY_HASH};
use crate::config::SessionConfig;
use crate::error::{AppError, AppResult};
use crate::storage::UserStore;

pub const SESSION_COOKIE: &str = "userId";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionToken {
    pub user_id: Uuid,
}

impl SessionToken {
    pub fn value(&self) -> String {
        self.user_id.to_string()
    }
}

/// Checks `password` against the account registered under `email`.
///
/// An unknown email and a wrong password both yield `InvalidCredentials`; the
/// unknown-email path still runs an argon2 verification.
pub async fn authenticate(
    users: &dyn UserStore,
    email: &str,
    password: &str,
) -> AppResult<SessionToken> {
    let user = users.find_by_email(email).await?;
    let hash = user
        .as_ref()
        .map_or_else(|| DUMMY_HASH.to_string(), |u| u.password_hash.clone());

    let matches = verify_password_async(password.to_string(), hash).await?;

    match user {
        Some(u) if matches => {
            debug!(user_id = %u.id, "credentials verified");
            Ok(SessionToken { user_id: u.id })
        }
        Some(u) => {
            warn!(user_id = %u.id, "login invalid password");
            Err(AppError::InvalidCredentials)
        }
        None => {
            warn!("login unknown email");
            Err(AppError::InvalidCredentials)
        }
    }
}

pub fn session_cookie(token: SessionToken, cfg: &SessionConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.value()))
        .path("/")
        .max_age(time::Duration::hours(cfg.ttl_hours))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cfg.cookie_secure)
        .build()
}

/// Resolves the caller from the session cookie. Does not look the user up.
pub fn authorize(jar: &CookieJar) -> AppResult<Uuid> {
    let cookie = jar.get(SESSION_COOKIE).ok_or(AppError::Unauthorized)?;
    Uuid::parse_str(cookie.value()).map_err(|_| AppError::Unauthorized)
}
