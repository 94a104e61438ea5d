use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct MenuItemRequest {
    pub title: String,
    pub price: Decimal,
    #[serde(default)]
    pub inventory: Option<i32>,
}

#[derive(Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub no_of_guests: i32,
    pub booking_date: String,
    pub booking_time: String,
    /// Accepted for wire compatibility and ignored: the owner is always the
    /// authenticated caller.
    #[serde(default)]
    pub user: Option<i64>,
}
