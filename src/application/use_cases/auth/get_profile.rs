use uuid::Uuid;

use crate::application::ports::account_repository::{AccountRepository, AccountRow};

pub struct GetProfile<'a, R: AccountRepository + ?Sized> {
    pub accounts: &'a R,
}

impl<'a, R: AccountRepository + ?Sized> GetProfile<'a, R> {
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<Option<AccountRow>> {
        self.accounts.find_by_id(id).await
    }
}
