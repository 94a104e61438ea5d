pub mod auth;
pub mod json_body;
pub mod maybe_auth;
