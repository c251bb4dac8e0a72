pub mod accounts;
pub mod bookings;
