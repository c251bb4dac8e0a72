pub mod accept_booking;
pub mod cancel_booking;
pub mod complete_booking;
pub mod create_booking;
pub mod list_hostel_bookings;
pub mod list_my_bookings;
