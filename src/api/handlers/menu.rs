use crate::api::dtos::requests::MenuItemRequest;
use crate::api::extractors::json_body::JsonBody;
use crate::api::extractors::maybe_auth::MaybeAuthUser;
use crate::domain::models::menu::{MenuItem, NewMenuItem};
use crate::domain::policy::{authorize_menu, Action, Principal};
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

fn principal(user: &MaybeAuthUser) -> Principal {
    match &user.0 {
        Some(user) => Principal::from(user),
        None => Principal::Anonymous,
    }
}

fn validate(payload: &MenuItemRequest) -> Result<NewMenuItem, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::Validation("title may not be blank".into()));
    }
    if payload.price.is_sign_negative() {
        return Err(AppError::Validation("price must not be negative".into()));
    }
    let inventory = payload.inventory.unwrap_or(0);
    if inventory < 0 {
        return Err(AppError::Validation("inventory must not be negative".into()));
    }

    Ok(NewMenuItem {
        title: payload.title.trim().to_string(),
        price: payload.price,
        inventory,
    })
}

pub async fn list_menu(
    State(state): State<Arc<AppState>>,
    user: MaybeAuthUser,
) -> Result<impl IntoResponse, AppError> {
    authorize_menu(&principal(&user), Action::List, state.config.menu_write_policy).allowed()?;

    let items = state.menu_repo.list().await?;
    Ok(Json(items))
}

pub async fn get_menu_item(
    State(state): State<Arc<AppState>>,
    user: MaybeAuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    authorize_menu(&principal(&user), Action::Retrieve, state.config.menu_write_policy)
        .allowed()?;

    let item = state
        .menu_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Menu item not found".into()))?;
    Ok(Json(item))
}

pub async fn create_menu_item(
    State(state): State<Arc<AppState>>,
    user: MaybeAuthUser,
    JsonBody(payload): JsonBody<MenuItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    authorize_menu(&principal(&user), Action::Create, state.config.menu_write_policy).allowed()?;

    let new_item = validate(&payload)?;
    let created = state.menu_repo.create(&new_item).await?;

    info!("Menu item created: {} ({})", created.id, created.title);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_menu_item(
    State(state): State<Arc<AppState>>,
    user: MaybeAuthUser,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<MenuItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    authorize_menu(&principal(&user), Action::Update, state.config.menu_write_policy).allowed()?;

    let new_item = validate(&payload)?;
    let existing = state
        .menu_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Menu item not found".into()))?;

    let updated = state
        .menu_repo
        .update(&MenuItem {
            id: existing.id,
            title: new_item.title,
            price: new_item.price,
            inventory: new_item.inventory,
            created_at: existing.created_at,
        })
        .await?
        .ok_or(AppError::NotFound("Menu item not found".into()))?;

    info!("Menu item updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_menu_item(
    State(state): State<Arc<AppState>>,
    user: MaybeAuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    authorize_menu(&principal(&user), Action::Delete, state.config.menu_write_policy).allowed()?;

    if !state.menu_repo.delete(id).await? {
        return Err(AppError::NotFound("Menu item not found".into()));
    }

    info!("Menu item deleted: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
