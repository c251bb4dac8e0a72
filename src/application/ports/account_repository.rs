use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::accounts::Role;

#[derive(Debug, Clone)]
pub struct AccountRow {
    pub id: Uuid,
    pub role: Role,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub hostel_id: Uuid,
    pub password_hash: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create_account(
        &self,
        role: Role,
        name: &str,
        email: &str,
        phone_number: &str,
        hostel_id: Uuid,
        password_hash: &str,
    ) -> anyhow::Result<AccountRow>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<AccountRow>>;
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<AccountRow>>;
}
