use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct HostelRow {
    pub id: Uuid,
    pub name: String,
    pub abbreviated_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[async_trait]
pub trait HostelRepository: Send + Sync {
    async fn create_hostel(&self, name: &str, abbreviated_name: &str)
    -> anyhow::Result<HostelRow>;
    async fn find_by_abbreviation(&self, abbreviated_name: &str)
    -> anyhow::Result<Option<HostelRow>>;
    async fn list_hostels(&self) -> anyhow::Result<Vec<HostelRow>>;
}
