use crate::api::extractors::auth::bearer_token_key;
use crate::domain::models::user::User;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::sync::Arc;

/// Like AuthUser, but a missing or invalid token resolves to a guest
/// instead of rejecting. Used where the policy itself decides whether
/// anonymous callers are acceptable.
pub struct MaybeAuthUser(pub Option<User>);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let key = match bearer_token_key(parts) {
            Some(key) => key,
            None => return Ok(MaybeAuthUser(None)),
        };

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let token = match app_state.token_repo.find_by_key(key).await? {
            Some(token) => token,
            None => return Ok(MaybeAuthUser(None)),
        };

        let user = app_state.user_repo.find_by_id(token.user_id).await?;
        Ok(MaybeAuthUser(user))
    }
}
