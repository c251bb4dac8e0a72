use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::application::ports::account_repository::{AccountRepository, AccountRow};
use crate::domain::accounts::Role;
use crate::infrastructure::db::PgPool;

pub struct SqlxAccountRepository {
    pub pool: PgPool,
}

impl SqlxAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_account(r: &sqlx::postgres::PgRow) -> anyhow::Result<AccountRow> {
    Ok(AccountRow {
        id: r.get("id"),
        role: Role::parse(r.get::<&str, _>("role"))?,
        name: r.get("name"),
        email: r.get("email"),
        phone_number: r.get("phone_number"),
        hostel_id: r.get("hostel_id"),
        password_hash: r.try_get("password_hash").ok(),
        created_at: r.get("created_at"),
    })
}

#[async_trait]
impl AccountRepository for SqlxAccountRepository {
    async fn create_account(
        &self,
        role: Role,
        name: &str,
        email: &str,
        phone_number: &str,
        hostel_id: Uuid,
        password_hash: &str,
    ) -> anyhow::Result<AccountRow> {
        let row = sqlx::query(
            r#"INSERT INTO accounts (role, name, email, phone_number, hostel_id, password_hash)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING id, role, name, email, phone_number, hostel_id, password_hash, created_at"#,
        )
        .bind(role.as_str())
        .bind(name)
        .bind(email)
        .bind(phone_number)
        .bind(hostel_id)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        row_to_account(&row)
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<AccountRow>> {
        let row = sqlx::query(
            r#"SELECT id, role, name, email, phone_number, hostel_id, password_hash, created_at
               FROM accounts WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_account).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<AccountRow>> {
        let row = sqlx::query(
            r#"SELECT id, role, name, email, phone_number, hostel_id, NULL::text AS password_hash, created_at
               FROM accounts WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_account).transpose()
    }
}
