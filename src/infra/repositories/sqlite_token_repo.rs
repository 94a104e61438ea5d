use crate::domain::models::auth::AuthToken;
use crate::domain::ports::TokenRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteTokenRepo {
    pool: SqlitePool,
}

impl SqliteTokenRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for SqliteTokenRepo {
    async fn get_or_create(&self, candidate: &AuthToken) -> Result<AuthToken, AppError> {
        // The UNIQUE constraint on user_id arbitrates concurrent first
        // logins: only one insert wins, everyone reads back the same row.
        sqlx::query(
            "INSERT INTO auth_tokens (key, user_id, created_at) VALUES (?, ?, ?)
             ON CONFLICT(user_id) DO NOTHING",
        )
        .bind(&candidate.key)
        .bind(candidate.user_id)
        .bind(candidate.created_at)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        sqlx::query_as::<_, AuthToken>("SELECT * FROM auth_tokens WHERE user_id = ?")
            .bind(candidate.user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<AuthToken>, AppError> {
        sqlx::query_as::<_, AuthToken>("SELECT * FROM auth_tokens WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
