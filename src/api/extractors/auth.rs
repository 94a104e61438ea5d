use crate::domain::models::user::User;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use std::sync::Arc;
use tracing::Span;

/// Resolves `Authorization: Token <key>` to the owning user. Rejects with
/// 401 when the header is missing, malformed, or names an unknown token.
pub struct AuthUser(pub User);

pub(crate) fn bearer_token_key(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Token ")
        .map(str::trim)
        .filter(|key| !key.is_empty())
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let key = bearer_token_key(parts).ok_or(AppError::Unauthorized)?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let token = app_state
            .token_repo
            .find_by_key(key)
            .await?
            .ok_or(AppError::Unauthorized)?;

        let user = app_state
            .user_repo
            .find_by_id(token.user_id)
            .await?
            .ok_or(AppError::Unauthorized)?;

        Span::current().record("user_id", user.id);

        Ok(AuthUser(user))
    }
}
