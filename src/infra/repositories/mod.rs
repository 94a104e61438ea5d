pub mod sqlite_booking_repo;
pub mod sqlite_menu_repo;
pub mod sqlite_token_repo;
pub mod sqlite_user_repo;
