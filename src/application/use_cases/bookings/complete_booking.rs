use uuid::Uuid;

use crate::application::ports::booking_repository::BookingRepository;
use crate::domain::bookings::BookingStatus;

#[derive(thiserror::Error, Debug)]
pub enum CompleteBookingError {
    #[error("Could not find booking with matching ID")]
    UnknownBooking,
    #[error("Booking has not been assigned to a cleaner yet")]
    NotAssigned,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, PartialEq, Eq)]
pub enum CompleteOutcome {
    Completed,
    AlreadyCompleted,
}

pub struct CompleteBooking<'a, R: BookingRepository + ?Sized> {
    pub bookings: &'a R,
}

impl<'a, R: BookingRepository + ?Sized> CompleteBooking<'a, R> {
    pub async fn execute(&self, booking_id: Uuid) -> Result<CompleteOutcome, CompleteBookingError> {
        if self
            .bookings
            .transition_status(booking_id, BookingStatus::Assigned, BookingStatus::Completed)
            .await?
        {
            return Ok(CompleteOutcome::Completed);
        }
        match self.bookings.find_by_id(booking_id).await? {
            None => Err(CompleteBookingError::UnknownBooking),
            Some(b) if b.status == BookingStatus::Completed => {
                Ok(CompleteOutcome::AlreadyCompleted)
            }
            Some(_) => Err(CompleteBookingError::NotAssigned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::InMemoryBookings;

    #[tokio::test]
    async fn pending_booking_cannot_be_completed() {
        let bookings = InMemoryBookings::default();
        let booking = bookings.seed_pending(Uuid::new_v4(), Uuid::new_v4());
        let uc = CompleteBooking {
            bookings: &bookings,
        };
        let err = uc.execute(booking.id).await.unwrap_err();
        assert!(matches!(err, CompleteBookingError::NotAssigned));
    }

    #[tokio::test]
    async fn assigned_booking_completes_once_then_reports_already_completed() {
        let bookings = InMemoryBookings::default();
        let booking = bookings.seed_pending(Uuid::new_v4(), Uuid::new_v4());
        bookings
            .assign_if_unassigned(booking.id, Uuid::new_v4())
            .await
            .unwrap();
        let uc = CompleteBooking {
            bookings: &bookings,
        };
        assert_eq!(
            uc.execute(booking.id).await.unwrap(),
            CompleteOutcome::Completed
        );
        assert_eq!(
            uc.execute(booking.id).await.unwrap(),
            CompleteOutcome::AlreadyCompleted
        );
        assert_eq!(
            bookings.get(booking.id).unwrap().status,
            BookingStatus::Completed
        );
    }

    #[tokio::test]
    async fn unknown_booking_id_is_an_error() {
        let bookings = InMemoryBookings::default();
        let uc = CompleteBooking {
            bookings: &bookings,
        };
        let err = uc.execute(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, CompleteBookingError::UnknownBooking));
    }
}
