use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::hostel_repository::{HostelRepository, HostelRow};
use crate::infrastructure::db::PgPool;

pub struct SqlxHostelRepository {
    pub pool: PgPool,
}

impl SqlxHostelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_hostel(r: &sqlx::postgres::PgRow) -> HostelRow {
    HostelRow {
        id: r.get("id"),
        name: r.get("name"),
        abbreviated_name: r.get("abbreviated_name"),
        created_at: r.get("created_at"),
    }
}

#[async_trait]
impl HostelRepository for SqlxHostelRepository {
    async fn create_hostel(
        &self,
        name: &str,
        abbreviated_name: &str,
    ) -> anyhow::Result<HostelRow> {
        let row = sqlx::query(
            r#"INSERT INTO hostels (name, abbreviated_name) VALUES ($1, $2)
               RETURNING id, name, abbreviated_name, created_at"#,
        )
        .bind(name)
        .bind(abbreviated_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row_to_hostel(&row))
    }

    async fn find_by_abbreviation(
        &self,
        abbreviated_name: &str,
    ) -> anyhow::Result<Option<HostelRow>> {
        let row = sqlx::query(
            r#"SELECT id, name, abbreviated_name, created_at FROM hostels
               WHERE abbreviated_name = $1"#,
        )
        .bind(abbreviated_name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(row_to_hostel))
    }

    async fn list_hostels(&self) -> anyhow::Result<Vec<HostelRow>> {
        let rows = sqlx::query(
            r#"SELECT id, name, abbreviated_name, created_at FROM hostels ORDER BY name"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(row_to_hostel).collect())
    }
}
