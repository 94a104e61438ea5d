use crate::domain::policy::MenuWritePolicy;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub menu_write_policy: MenuWritePolicy,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://restaurant.db?mode=rwc".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a number"),
            menu_write_policy: match env::var("MENU_WRITE_POLICY").as_deref() {
                Ok("staff") => MenuWritePolicy::StaffWrite,
                Ok("authenticated") | Err(_) => MenuWritePolicy::AuthenticatedWrite,
                Ok(other) => panic!("MENU_WRITE_POLICY must be 'authenticated' or 'staff', got '{other}'"),
            },
        }
    }
}
