use crate::api::dtos::requests::{LoginRequest, RegisterRequest};
use crate::api::dtos::responses::{AuthResponse, UserProfile};
use crate::api::extractors::json_body::JsonBody;
use crate::domain::models::user::NewUser;
use crate::error::{AppError, FieldErrors};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

pub async fn register(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut errors = FieldErrors::default();

    if payload.username.trim().is_empty() {
        errors.push("username", "This field may not be blank.");
    }
    if payload.password.is_empty() {
        errors.push("password", "This field may not be blank.");
    }
    if payload.email.trim().is_empty() {
        errors.push("email", "This field may not be blank.");
    } else if !payload.email.contains('@') {
        errors.push("email", "Enter a valid email address.");
    }

    if errors.is_empty()
        && state
            .user_repo
            .find_by_username(payload.username.trim())
            .await?
            .is_some()
    {
        errors.push("username", "A user with that username already exists.");
    }

    if !errors.is_empty() {
        return Err(AppError::Fields(errors));
    }

    let password_hash = state.auth_service.hash_password(&payload.password)?;

    let user = state
        .user_repo
        .create(&NewUser {
            username: payload.username.trim().to_string(),
            email: payload.email.trim().to_string(),
            first_name: payload.first_name.unwrap_or_default(),
            last_name: payload.last_name.unwrap_or_default(),
            password_hash,
        })
        .await?;

    let token = state.auth_service.issue_token(user.id).await?;

    info!("User registered: {}", user.username);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: UserProfile::from(&user),
            token: token.key,
        }),
    ))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Unknown username and wrong password share one error so the response
    // never reveals which check failed.
    let invalid = || AppError::Validation("Invalid credentials".to_string());

    // Trimmed to match what registration stores.
    let user = state
        .user_repo
        .find_by_username(payload.username.trim())
        .await?;

    let user = match user {
        Some(user)
            if state
                .auth_service
                .verify_password(&user.password_hash, &payload.password) =>
        {
            user
        }
        Some(_) => return Err(invalid()),
        None => {
            // Burn an equivalent verification so unknown usernames cost the
            // same as wrong passwords.
            state.auth_service.burn_verification(&payload.password);
            return Err(invalid());
        }
    };

    let token = state.auth_service.issue_token(user.id).await?;

    info!("User logged in: {}", user.username);

    Ok(Json(AuthResponse {
        user: UserProfile::from(&user),
        token: token.key,
    }))
}
