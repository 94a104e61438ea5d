use restaurant_backend::{
    api::router::create_router,
    config::Config,
    domain::policy::MenuWritePolicy,
    domain::services::auth_service::AuthService,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo, sqlite_menu_repo::SqliteMenuRepo,
        sqlite_token_repo::SqliteTokenRepo, sqlite_user_repo::SqliteUserRepo,
    },
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::{json, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        Self::with_menu_policy(MenuWritePolicy::AuthenticatedWrite).await
    }

    pub async fn with_menu_policy(menu_write_policy: MenuWritePolicy) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url,
            port: 0,
            menu_write_policy,
        };

        let token_repo = Arc::new(SqliteTokenRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(token_repo.clone()));

        let state = Arc::new(AppState {
            config,
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            token_repo,
            menu_repo: Arc::new(SqliteMenuRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            auth_service,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (axum::http::StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Token {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    /// Registers a user and returns (token, user_id).
    pub async fn register(&self, username: &str, password: &str) -> (String, i64) {
        let payload = json!({
            "username": username,
            "password": password,
            "email": format!("{username}@example.com")
        });

        let (status, body) = self
            .request("POST", "/api/auth/register/", None, Some(payload))
            .await;

        if !status.is_success() {
            panic!("Registration failed in test helper: status {status}, body {body}");
        }

        let token = body["token"].as_str().expect("No token in body").to_string();
        let user_id = body["user"]["id"].as_i64().expect("No user id in body");
        (token, user_id)
    }

    pub async fn login(&self, username: &str, password: &str) -> (axum::http::StatusCode, Value) {
        self.request(
            "POST",
            "/api/auth/login/",
            None,
            Some(json!({ "username": username, "password": password })),
        )
        .await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
