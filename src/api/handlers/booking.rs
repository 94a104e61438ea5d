use crate::api::dtos::requests::BookingRequest;
use crate::api::extractors::auth::AuthUser;
use crate::api::extractors::json_body::JsonBody;
use crate::domain::models::booking::{Booking, NewBooking};
use crate::domain::policy::{authorize_booking, booking_scope, Action, Principal};
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;
use tracing::info;

struct BookingFields {
    name: String,
    no_of_guests: i32,
    booking_date: NaiveDate,
    booking_time: NaiveTime,
}

fn validate(payload: &BookingRequest) -> Result<BookingFields, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("name may not be blank".into()));
    }
    if payload.no_of_guests < 1 {
        return Err(AppError::Validation("no_of_guests must be at least 1".into()));
    }

    let booking_date = NaiveDate::parse_from_str(&payload.booking_date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid booking_date (expected YYYY-MM-DD)".into()))?;

    let booking_time = NaiveTime::parse_from_str(&payload.booking_time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(&payload.booking_time, "%H:%M"))
        .map_err(|_| AppError::Validation("Invalid booking_time (expected HH:MM or HH:MM:SS)".into()))?;

    Ok(BookingFields {
        name: payload.name.trim().to_string(),
        no_of_guests: payload.no_of_guests,
        booking_date,
        booking_time,
    })
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    // Never the full table: the scope pins the query to the caller.
    let owner_id = booking_scope(&Principal::from(&user))?;

    let bookings = state.booking_repo.list_by_owner(owner_id).await?;
    Ok(Json(bookings))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state
        .booking_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Not found".into()))?;

    authorize_booking(&Principal::from(&user), Action::Retrieve, Some(booking.user_id))
        .allowed()?;

    Ok(Json(booking))
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    JsonBody(payload): JsonBody<BookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let principal = Principal::from(&user);
    authorize_booking(&principal, Action::Create, None).allowed()?;

    let fields = validate(&payload)?;

    // Any client-supplied `user` field is discarded; the owner is always the
    // authenticated caller.
    let created = state
        .booking_repo
        .create(&NewBooking {
            user_id: user.id,
            name: fields.name,
            no_of_guests: fields.no_of_guests,
            booking_date: fields.booking_date,
            booking_time: fields.booking_time,
        })
        .await?;

    info!("Booking created: {} for user {}", created.id, user.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<BookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let existing = state
        .booking_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Not found".into()))?;

    authorize_booking(&Principal::from(&user), Action::Update, Some(existing.user_id))
        .allowed()?;

    let fields = validate(&payload)?;

    let updated = state
        .booking_repo
        .update(&Booking {
            id: existing.id,
            user_id: existing.user_id,
            name: fields.name,
            no_of_guests: fields.no_of_guests,
            booking_date: fields.booking_date,
            booking_time: fields.booking_time,
            created_at: existing.created_at,
        })
        .await?;

    info!("Booking updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let existing = state
        .booking_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Not found".into()))?;

    authorize_booking(&Principal::from(&user), Action::Delete, Some(existing.user_id))
        .allowed()?;

    state.booking_repo.delete(existing.id).await?;

    info!("Booking deleted: {}", existing.id);
    Ok(StatusCode::NO_CONTENT)
}
