use chrono::{DateTime, Utc};
use rand::{distributions::Alphanumeric, Rng};
use sqlx::FromRow;

/// One opaque bearer credential per user. Created lazily on first
/// registration or login and returned unchanged on every login after.
#[derive(Debug, FromRow, Clone)]
pub struct AuthToken {
    pub key: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl AuthToken {
    pub fn generate(user_id: i64) -> Self {
        let key: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(40)
            .map(char::from)
            .collect();

        Self {
            key,
            user_id,
            created_at: Utc::now(),
        }
    }
}
