use uuid::Uuid;

use crate::application::ports::booking_repository::BookingRepository;
use crate::domain::bookings::BookingStatus;

#[derive(thiserror::Error, Debug)]
pub enum CancelBookingError {
    #[error("Could not find booking with matching ID")]
    UnknownBooking,
    #[error("You can only cancel your own bookings")]
    NotOwner,
    #[error("Booking can no longer be cancelled")]
    NotCancellable,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, PartialEq, Eq)]
pub enum CancelOutcome {
    Cancelled,
    AlreadyCancelled,
}

/// A student may withdraw a booking, but only while it is still Pending.
pub struct CancelBooking<'a, R: BookingRepository + ?Sized> {
    pub bookings: &'a R,
}

impl<'a, R: BookingRepository + ?Sized> CancelBooking<'a, R> {
    pub async fn execute(
        &self,
        booking_id: Uuid,
        student_id: Uuid,
    ) -> Result<CancelOutcome, CancelBookingError> {
        if self
            .bookings
            .cancel_own_pending(booking_id, student_id)
            .await?
        {
            return Ok(CancelOutcome::Cancelled);
        }
        match self.bookings.find_by_id(booking_id).await? {
            None => Err(CancelBookingError::UnknownBooking),
            Some(b) if b.student_id != student_id => Err(CancelBookingError::NotOwner),
            Some(b) if b.status == BookingStatus::Cancelled => Ok(CancelOutcome::AlreadyCancelled),
            Some(_) => Err(CancelBookingError::NotCancellable),
        }
    }
}
