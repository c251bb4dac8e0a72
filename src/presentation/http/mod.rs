pub mod auth;
pub mod cleaner;
pub mod error;
pub mod health;
pub mod hostel;
pub mod student;
pub mod supervisor;
