use uuid::Uuid;

use crate::application::ports::booking_repository::{BookingRepository, BookingRow};

/// Bookings assigned to this cleaner.
pub struct ListCleanerBookings<'a, R: BookingRepository + ?Sized> {
    pub bookings: &'a R,
}

impl<'a, R: BookingRepository + ?Sized> ListCleanerBookings<'a, R> {
    pub async fn execute(&self, cleaner_id: Uuid) -> anyhow::Result<Vec<BookingRow>> {
        self.bookings.list_by_cleaner(cleaner_id).await
    }
}

/// Bookings this student has requested.
pub struct ListStudentBookings<'a, R: BookingRepository + ?Sized> {
    pub bookings: &'a R,
}

impl<'a, R: BookingRepository + ?Sized> ListStudentBookings<'a, R> {
    pub async fn execute(&self, student_id: Uuid) -> anyhow::Result<Vec<BookingRow>> {
        self.bookings.list_by_student(student_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::InMemoryBookings;

    #[tokio::test]
    async fn cleaner_listing_filters_by_assignee() {
        let bookings = InMemoryBookings::default();
        let hostel = Uuid::new_v4();
        let cleaner = Uuid::new_v4();
        let mine = bookings.seed_pending(Uuid::new_v4(), hostel);
        let theirs = bookings.seed_pending(Uuid::new_v4(), hostel);
        bookings
            .assign_if_unassigned(mine.id, cleaner)
            .await
            .unwrap();
        bookings
            .assign_if_unassigned(theirs.id, Uuid::new_v4())
            .await
            .unwrap();
        bookings.seed_pending(Uuid::new_v4(), hostel);

        let uc = ListCleanerBookings {
            bookings: &bookings,
        };
        let rows = uc.execute(cleaner).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, mine.id);
    }

    #[tokio::test]
    async fn student_listing_filters_by_requester() {
        let bookings = InMemoryBookings::default();
        let hostel = Uuid::new_v4();
        let student = Uuid::new_v4();
        let a = bookings.seed_pending(student, hostel);
        let b = bookings.seed_pending(student, hostel);
        bookings.seed_pending(Uuid::new_v4(), hostel);

        let uc = ListStudentBookings {
            bookings: &bookings,
        };
        let mut ids: Vec<_> = uc
            .execute(student)
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        ids.sort();
        let mut expected = vec![a.id, b.id];
        expected.sort();
        assert_eq!(ids, expected);
    }
}
