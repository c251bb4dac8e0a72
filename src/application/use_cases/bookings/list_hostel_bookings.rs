use uuid::Uuid;

use crate::application::ports::account_repository::AccountRepository;
use crate::application::ports::booking_repository::{BookingRepository, BookingRow};

/// The hostel-wide work queue: every booking of the account's hostel,
/// assigned or not. Returns None when the account no longer resolves.
pub struct ListHostelBookings<'a, A: AccountRepository + ?Sized, B: BookingRepository + ?Sized> {
    pub accounts: &'a A,
    pub bookings: &'a B,
}

impl<'a, A: AccountRepository + ?Sized, B: BookingRepository + ?Sized>
    ListHostelBookings<'a, A, B>
{
    pub async fn execute(&self, account_id: Uuid) -> anyhow::Result<Option<Vec<BookingRow>>> {
        let account = match self.accounts.find_by_id(account_id).await? {
            Some(a) => a,
            None => return Ok(None),
        };
        let rows = self.bookings.list_by_hostel(account.hostel_id).await?;
        Ok(Some(rows))
    }
}
