use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::application::ports::booking_repository::{BookingRepository, BookingRow};
use crate::domain::bookings::BookingStatus;
use crate::infrastructure::db::PgPool;

pub struct SqlxBookingRepository {
    pub pool: PgPool,
}

impl SqlxBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const BOOKING_COLUMNS: &str =
    "id, student_id, hostel_id, cleaner_id, status, note, created_at, updated_at";

fn row_to_booking(r: &sqlx::postgres::PgRow) -> anyhow::Result<BookingRow> {
    Ok(BookingRow {
        id: r.get("id"),
        student_id: r.get("student_id"),
        hostel_id: r.get("hostel_id"),
        cleaner_id: r.get("cleaner_id"),
        status: BookingStatus::parse(r.get::<&str, _>("status"))?,
        note: r.get("note"),
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    })
}

#[async_trait]
impl BookingRepository for SqlxBookingRepository {
    async fn create_booking(
        &self,
        student_id: Uuid,
        hostel_id: Uuid,
        note: Option<&str>,
    ) -> anyhow::Result<BookingRow> {
        let row = sqlx::query(&format!(
            "INSERT INTO bookings (student_id, hostel_id, note) VALUES ($1, $2, $3)
             RETURNING {BOOKING_COLUMNS}"
        ))
        .bind(student_id)
        .bind(hostel_id)
        .bind(note)
        .fetch_one(&self.pool)
        .await?;
        row_to_booking(&row)
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<BookingRow>> {
        let row = sqlx::query(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_booking).transpose()
    }

    async fn list_by_hostel(&self, hostel_id: Uuid) -> anyhow::Result<Vec<BookingRow>> {
        let rows = sqlx::query(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE hostel_id = $1 ORDER BY created_at DESC"
        ))
        .bind(hostel_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_booking).collect()
    }

    async fn list_by_cleaner(&self, cleaner_id: Uuid) -> anyhow::Result<Vec<BookingRow>> {
        let rows = sqlx::query(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE cleaner_id = $1 ORDER BY created_at DESC"
        ))
        .bind(cleaner_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_booking).collect()
    }

    async fn list_by_student(&self, student_id: Uuid) -> anyhow::Result<Vec<BookingRow>> {
        let rows = sqlx::query(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE student_id = $1 ORDER BY created_at DESC"
        ))
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_booking).collect()
    }

    async fn assign_if_unassigned(&self, id: Uuid, cleaner_id: Uuid) -> anyhow::Result<bool> {
        // Single compare-and-set; only one of two racing accepts can win.
        let res = sqlx::query(
            r#"UPDATE bookings SET cleaner_id = $2, status = 'Assigned', updated_at = now()
               WHERE id = $1 AND cleaner_id IS NULL"#,
        )
        .bind(id)
        .bind(cleaner_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn transition_status(
        &self,
        id: Uuid,
        from: BookingStatus,
        to: BookingStatus,
    ) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"UPDATE bookings SET status = $3, updated_at = now()
               WHERE id = $1 AND status = $2"#,
        )
        .bind(id)
        .bind(from.as_str())
        .bind(to.as_str())
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn cancel_own_pending(&self, id: Uuid, student_id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"UPDATE bookings SET status = 'Cancelled', updated_at = now()
               WHERE id = $1 AND student_id = $2 AND status = 'Pending'"#,
        )
        .bind(id)
        .bind(student_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }
}
