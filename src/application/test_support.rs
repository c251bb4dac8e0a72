//! In-memory repository doubles for use-case tests.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::account_repository::{AccountRepository, AccountRow};
use crate::application::ports::booking_repository::{BookingRepository, BookingRow};
use crate::application::ports::hostel_repository::{HostelRepository, HostelRow};
use crate::domain::accounts::Role;
use crate::domain::bookings::BookingStatus;

#[derive(Default)]
pub struct InMemoryAccounts {
    rows: Mutex<Vec<AccountRow>>,
}

impl InMemoryAccounts {
    pub fn seed(&self, role: Role, email: &str, hostel_id: Uuid) -> AccountRow {
        let row = AccountRow {
            id: Uuid::new_v4(),
            role,
            name: "seeded".into(),
            email: email.into(),
            phone_number: "0".into(),
            hostel_id,
            password_hash: None,
            created_at: chrono::Utc::now(),
        };
        self.rows.lock().unwrap().push(row.clone());
        row
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccounts {
    async fn create_account(
        &self,
        role: Role,
        name: &str,
        email: &str,
        phone_number: &str,
        hostel_id: Uuid,
        password_hash: &str,
    ) -> anyhow::Result<AccountRow> {
        let row = AccountRow {
            id: Uuid::new_v4(),
            role,
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            hostel_id,
            password_hash: Some(password_hash.into()),
            created_at: chrono::Utc::now(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<AccountRow>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<AccountRow>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryHostels {
    rows: Mutex<Vec<HostelRow>>,
}

impl InMemoryHostels {
    pub fn seed(&self, name: &str, abbreviated_name: &str) -> HostelRow {
        let row = HostelRow {
            id: Uuid::new_v4(),
            name: name.into(),
            abbreviated_name: abbreviated_name.into(),
            created_at: chrono::Utc::now(),
        };
        self.rows.lock().unwrap().push(row.clone());
        row
    }
}

#[async_trait]
impl HostelRepository for InMemoryHostels {
    async fn create_hostel(
        &self,
        name: &str,
        abbreviated_name: &str,
    ) -> anyhow::Result<HostelRow> {
        Ok(self.seed(name, abbreviated_name))
    }

    async fn find_by_abbreviation(
        &self,
        abbreviated_name: &str,
    ) -> anyhow::Result<Option<HostelRow>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.abbreviated_name == abbreviated_name)
            .cloned())
    }

    async fn list_hostels(&self) -> anyhow::Result<Vec<HostelRow>> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryBookings {
    rows: Mutex<Vec<BookingRow>>,
}

impl InMemoryBookings {
    pub fn seed_pending(&self, student_id: Uuid, hostel_id: Uuid) -> BookingRow {
        let now = chrono::Utc::now();
        let row = BookingRow {
            id: Uuid::new_v4(),
            student_id,
            hostel_id,
            cleaner_id: None,
            status: BookingStatus::Pending,
            note: None,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(row.clone());
        row
    }

    pub fn get(&self, id: Uuid) -> Option<BookingRow> {
        self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookings {
    async fn create_booking(
        &self,
        student_id: Uuid,
        hostel_id: Uuid,
        note: Option<&str>,
    ) -> anyhow::Result<BookingRow> {
        let now = chrono::Utc::now();
        let row = BookingRow {
            id: Uuid::new_v4(),
            student_id,
            hostel_id,
            cleaner_id: None,
            status: BookingStatus::Pending,
            note: note.map(|s| s.to_string()),
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<BookingRow>> {
        Ok(self.get(id))
    }

    async fn list_by_hostel(&self, hostel_id: Uuid) -> anyhow::Result<Vec<BookingRow>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.hostel_id == hostel_id)
            .cloned()
            .collect())
    }

    async fn list_by_cleaner(&self, cleaner_id: Uuid) -> anyhow::Result<Vec<BookingRow>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.cleaner_id == Some(cleaner_id))
            .cloned()
            .collect())
    }

    async fn list_by_student(&self, student_id: Uuid) -> anyhow::Result<Vec<BookingRow>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn assign_if_unassigned(&self, id: Uuid, cleaner_id: Uuid) -> anyhow::Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows
            .iter_mut()
            .find(|r| r.id == id && r.cleaner_id.is_none())
        {
            Some(row) => {
                row.cleaner_id = Some(cleaner_id);
                row.status = BookingStatus::Assigned;
                row.updated_at = chrono::Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn transition_status(
        &self,
        id: Uuid,
        from: BookingStatus,
        to: BookingStatus,
    ) -> anyhow::Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.id == id && r.status == from) {
            Some(row) => {
                row.status = to;
                row.updated_at = chrono::Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn cancel_own_pending(&self, id: Uuid, student_id: Uuid) -> anyhow::Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| {
            r.id == id && r.student_id == student_id && r.status == BookingStatus::Pending
        }) {
            Some(row) => {
                row.status = BookingStatus::Cancelled;
                row.updated_at = chrono::Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
