pub mod account_repository_sqlx;
pub mod booking_repository_sqlx;
pub mod hostel_repository_sqlx;
