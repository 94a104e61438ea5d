use crate::domain::models::{
    auth::AuthToken,
    booking::{Booking, NewBooking},
    menu::{MenuItem, NewMenuItem},
    user::{NewUser, User},
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &NewUser) -> Result<User, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;
    /// Administrative removal; bookings and the auth token cascade with it.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Idempotent issuance: stores `candidate` only if the user has no token
    /// yet, then returns whatever the store holds. The UNIQUE constraint on
    /// user_id makes this safe under concurrent first logins.
    async fn get_or_create(&self, candidate: &AuthToken) -> Result<AuthToken, AppError>;
    async fn find_by_key(&self, key: &str) -> Result<Option<AuthToken>, AppError>;
}

#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn create(&self, item: &NewMenuItem) -> Result<MenuItem, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<MenuItem>, AppError>;
    async fn list(&self) -> Result<Vec<MenuItem>, AppError>;
    async fn update(&self, item: &MenuItem) -> Result<Option<MenuItem>, AppError>;
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &NewBooking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Booking>, AppError>;
    async fn list_by_owner(&self, user_id: i64) -> Result<Vec<Booking>, AppError>;
    async fn update(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
