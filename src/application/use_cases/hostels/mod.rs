pub mod create_hostel;
pub mod list_hostels;
