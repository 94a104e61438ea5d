use crate::domain::{models::auth::AuthToken, ports::TokenRepository};
use crate::error::AppError;
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use std::sync::Arc;

pub struct AuthService {
    token_repo: Arc<dyn TokenRepository>,
}

// Structurally valid argon2 hash that matches no password. Verifying
// against it keeps the unknown-username login path as slow as the
// wrong-password path.
const PHONY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$AAAAAAAAAAAAAAAAAAAAAA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

impl AuthService {
    pub fn new(token_repo: Arc<dyn TokenRepository>) -> Self {
        Self { token_repo }
    }

    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        Ok(Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| AppError::Internal)?
            .to_string())
    }

    pub fn verify_password(&self, stored_hash: &str, password: &str) -> bool {
        match PasswordHash::new(stored_hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    /// Runs a full verification against a hash no password matches. Called
    /// when the username is unknown, so response time does not reveal
    /// whether a username exists.
    pub fn burn_verification(&self, password: &str) {
        let _ = self.verify_password(PHONY_HASH, password);
    }

    /// Get-or-create: a fresh key is offered, but if the user already holds a
    /// token the stored one comes back and the fresh key is discarded. Repeat
    /// logins therefore always return the identical key.
    pub async fn issue_token(&self, user_id: i64) -> Result<AuthToken, AppError> {
        let candidate = AuthToken::generate(user_id);
        self.token_repo.get_or_create(&candidate).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::PasswordHash;
    use async_trait::async_trait;

    struct NullTokenRepo;

    #[async_trait]
    impl TokenRepository for NullTokenRepo {
        async fn get_or_create(&self, candidate: &AuthToken) -> Result<AuthToken, AppError> {
            Ok(candidate.clone())
        }

        async fn find_by_key(&self, _key: &str) -> Result<Option<AuthToken>, AppError> {
            Ok(None)
        }
    }

    fn service() -> AuthService {
        AuthService::new(Arc::new(NullTokenRepo))
    }

    #[test]
    fn phony_hash_parses_and_matches_nothing() {
        // If the constant ever stops parsing, verify_password would return
        // early and the timing equalizer would be gone.
        assert!(PasswordHash::new(PHONY_HASH).is_ok());
        assert!(!service().verify_password(PHONY_HASH, "any-password"));
        service().burn_verification("any-password");
    }

    #[test]
    fn password_round_trip() {
        let svc = service();
        let hash = svc.hash_password("s3cret").unwrap();
        assert!(svc.verify_password(&hash, "s3cret"));
        assert!(!svc.verify_password(&hash, "not-it"));
    }
}
