use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MenuItem {
    pub id: i64,
    pub title: String,
    pub price: Decimal,
    pub inventory: i32,
    pub created_at: DateTime<Utc>,
}

// Price is stored as TEXT; sqlx has no SQLite Decimal mapping, so the row
// mapping is spelled out.
impl FromRow<'_, SqliteRow> for MenuItem {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let price: String = row.try_get("price")?;
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            price: price.parse().map_err(|e: rust_decimal::Error| sqlx::Error::ColumnDecode {
                index: "price".to_string(),
                source: Box::new(e),
            })?,
            inventory: row.try_get("inventory")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

pub struct NewMenuItem {
    pub title: String,
    pub price: Decimal,
    pub inventory: i32,
}
