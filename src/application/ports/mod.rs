pub mod account_repository;
pub mod booking_repository;
pub mod hostel_repository;
