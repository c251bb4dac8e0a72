use uuid::Uuid;

use crate::application::ports::booking_repository::BookingRepository;

#[derive(thiserror::Error, Debug)]
pub enum AcceptBookingError {
    #[error("Could not find booking with matching ID")]
    UnknownBooking,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, PartialEq, Eq)]
pub enum AcceptOutcome {
    Assigned,
    AlreadyAssigned,
}

/// Claims a booking for a cleaner. The claim itself is one conditional
/// UPDATE, so losing a concurrent race lands in the AlreadyAssigned arm
/// instead of overwriting the winner.
pub struct AcceptBooking<'a, R: BookingRepository + ?Sized> {
    pub bookings: &'a R,
}

impl<'a, R: BookingRepository + ?Sized> AcceptBooking<'a, R> {
    pub async fn execute(
        &self,
        booking_id: Uuid,
        cleaner_id: Uuid,
    ) -> Result<AcceptOutcome, AcceptBookingError> {
        if self
            .bookings
            .assign_if_unassigned(booking_id, cleaner_id)
            .await?
        {
            return Ok(AcceptOutcome::Assigned);
        }
        match self.bookings.find_by_id(booking_id).await? {
            None => Err(AcceptBookingError::UnknownBooking),
            Some(_) => Ok(AcceptOutcome::AlreadyAssigned),
        }
    }
}
