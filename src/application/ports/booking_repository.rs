use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::bookings::BookingStatus;

#[derive(Debug, Clone)]
pub struct BookingRow {
    pub id: Uuid,
    pub student_id: Uuid,
    pub hostel_id: Uuid,
    pub cleaner_id: Option<Uuid>,
    pub status: BookingStatus,
    pub note: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create_booking(
        &self,
        student_id: Uuid,
        hostel_id: Uuid,
        note: Option<&str>,
    ) -> anyhow::Result<BookingRow>;
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<BookingRow>>;
    async fn list_by_hostel(&self, hostel_id: Uuid) -> anyhow::Result<Vec<BookingRow>>;
    async fn list_by_cleaner(&self, cleaner_id: Uuid) -> anyhow::Result<Vec<BookingRow>>;
    async fn list_by_student(&self, student_id: Uuid) -> anyhow::Result<Vec<BookingRow>>;
    /// Claims the booking for `cleaner_id` only if no cleaner is set yet.
    /// Returns whether a row was updated. Single conditional UPDATE, so two
    /// concurrent accepts cannot both win.
    async fn assign_if_unassigned(&self, id: Uuid, cleaner_id: Uuid) -> anyhow::Result<bool>;
    /// Moves the booking from `from` to `to` in one conditional UPDATE.
    async fn transition_status(
        &self,
        id: Uuid,
        from: BookingStatus,
        to: BookingStatus,
    ) -> anyhow::Result<bool>;
    /// Cancels the booking only while Pending and only for its own student.
    async fn cancel_own_pending(&self, id: Uuid, student_id: Uuid) -> anyhow::Result<bool>;
}
