pub mod auth;
pub mod booking;
pub mod menu;
pub mod user;
