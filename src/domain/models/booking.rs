use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: i64,
    /// Owner. Assigned by the server at creation time and immutable after.
    #[serde(rename = "user")]
    pub user_id: i64,
    pub name: String,
    pub no_of_guests: i32,
    pub booking_date: NaiveDate,
    pub booking_time: NaiveTime,
    pub created_at: DateTime<Utc>,
}

pub struct NewBooking {
    pub user_id: i64,
    pub name: String,
    pub no_of_guests: i32,
    pub booking_date: NaiveDate,
    pub booking_time: NaiveTime,
}
