use uuid::Uuid;

use crate::application::ports::account_repository::AccountRepository;
use crate::application::ports::booking_repository::{BookingRepository, BookingRow};

/// Creates a Pending booking for the student's own hostel. Returns None when
/// the student account no longer resolves.
pub struct CreateBooking<'a, A: AccountRepository + ?Sized, B: BookingRepository + ?Sized> {
    pub accounts: &'a A,
    pub bookings: &'a B,
}

impl<'a, A: AccountRepository + ?Sized, B: BookingRepository + ?Sized> CreateBooking<'a, A, B> {
    pub async fn execute(
        &self,
        student_id: Uuid,
        note: Option<&str>,
    ) -> anyhow::Result<Option<BookingRow>> {
        let student = match self.accounts.find_by_id(student_id).await? {
            Some(a) => a,
            None => return Ok(None),
        };
        let booking = self
            .bookings
            .create_booking(student_id, student.hostel_id, note)
            .await?;
        Ok(Some(booking))
    }
}
