use crate::domain::models::menu::{MenuItem, NewMenuItem};
use crate::domain::ports::MenuRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct SqliteMenuRepo {
    pool: SqlitePool,
}

impl SqliteMenuRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuRepository for SqliteMenuRepo {
    async fn create(&self, item: &NewMenuItem) -> Result<MenuItem, AppError> {
        sqlx::query_as::<_, MenuItem>(
            "INSERT INTO menu_items (title, price, inventory, created_at)
             VALUES (?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&item.title)
        .bind(item.price.to_string())
        .bind(item.inventory)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MenuItem>, AppError> {
        sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<MenuItem>, AppError> {
        sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, item: &MenuItem) -> Result<Option<MenuItem>, AppError> {
        sqlx::query_as::<_, MenuItem>(
            "UPDATE menu_items SET title = ?, price = ?, inventory = ?
             WHERE id = ?
             RETURNING *",
        )
        .bind(&item.title)
        .bind(item.price.to_string())
        .bind(item.inventory)
        .bind(item.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(result.rows_affected() > 0)
    }
}
